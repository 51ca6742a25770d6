//! Fuzz target for card validation.
//!
//! Tests that validate() never panics and always produces a coherent result.

#![no_main]

use bandeira::{is_valid, passes_checksum, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = validate(data);

    // Valid results carry no error, invalid ones carry exactly one
    assert_eq!(result.is_valid(), result.error().is_none());
    assert_eq!(result.is_valid(), result.error_message().is_none());

    // A missing brand means the input never reached the classifier,
    // so it cannot be valid
    if result.brand().is_none() {
        assert!(!result.is_valid());
    }

    // The boolean wrappers agree with the full validator
    assert_eq!(is_valid(data), result.is_valid());

    // A fully valid card necessarily passes the bare checksum
    if result.is_valid() {
        assert!(passes_checksum(data));
    }
});
