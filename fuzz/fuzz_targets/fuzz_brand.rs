//! Fuzz target for brand classification.
//!
//! Tests that identify_brand() is total and deterministic on arbitrary input.

#![no_main]

use bandeira::{identify_brand, CardBrand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let brand = identify_brand(data);

    // Deterministic
    assert_eq!(brand, identify_brand(data));

    // Non-digit input can never classify as a known brand
    let stripped: String = data.chars().filter(|&c| c != ' ' && c != '-').collect();
    if stripped.is_empty() || !stripped.bytes().all(|b| b.is_ascii_digit()) {
        assert_eq!(brand, CardBrand::Unknown);
    }

    // Every variant has a stable, non-empty label
    assert!(!brand.name().is_empty());
});
