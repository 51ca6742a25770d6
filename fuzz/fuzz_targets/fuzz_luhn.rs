//! Fuzz target for the Luhn core.
//!
//! Tests that the checksum functions never panic and that the check-digit
//! property holds for arbitrary digit sequences.

#![no_main]

use bandeira::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp bytes into the digit-value range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::validate(&digits);
    let _ = luhn::compute_checksum(&digits);

    if digits.is_empty() {
        return;
    }

    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "check digit must be a single digit");

    let mut with_check = digits.clone();
    with_check.push(check);
    assert!(
        luhn::validate(&with_check),
        "appending the check digit must make the sequence valid"
    );
});
