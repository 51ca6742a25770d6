//! Luhn checksum algorithm.
//!
//! The Luhn ("modulus 10") checksum catches most single-digit typos and
//! adjacent transpositions in identification numbers. Every second digit
//! counted from the right, excluding the check digit itself, is doubled
//! (subtracting 9 when the result exceeds 9) and the total must be divisible
//! by 10.
//!
//! The core operates on digit-value slices (`0..=9`, not ASCII); the string
//! surface lives in [`crate::validate::passes_checksum`].

/// Doubled-digit lookup: `2 * d`, minus 9 when that exceeds 9.
/// Avoids the branch in the inner loop.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit sequence using the Luhn algorithm.
///
/// An empty slice is reported invalid: emptiness is a distinct error class
/// that callers reject before asking for a checksum.
///
/// # Example
///
/// ```
/// use bandeira::luhn::validate;
///
/// // Valid Visa test card
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// // Last digit changed
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && compute_checksum(digits) % 10 == 0
}

/// Computes the raw Luhn sum (not reduced modulo 10).
///
/// Offsets count from the right: offset 0 (the check digit) is kept as-is,
/// offset 1 is doubled, offset 2 kept, and so on.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(offset, &d)| {
            if offset % 2 == 1 {
                u32::from(DOUBLE_TABLE[d as usize])
            } else {
                u32::from(d)
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` pass Luhn validation when
/// appended.
///
/// Every given digit shifts one position left once the check digit is
/// appended, so the doubling parity is inverted relative to
/// [`compute_checksum`].
///
/// # Example
///
/// ```
/// use bandeira::luhn::{generate_check_digit, validate};
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
///
/// let mut full = partial.to_vec();
/// full.push(1);
/// assert!(validate(&full));
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(offset, &d)| {
            // offset + 1 in the final number, so even offsets get doubled
            if offset % 2 == 0 {
                u32::from(DOUBLE_TABLE[d as usize])
            } else {
                u32::from(d)
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
