//! # bandeira
//!
//! Credit card number validation and brand identification.
//!
//! Three pure operations: brand classification from prefix/length rules,
//! Luhn checksum validation, and an orchestrating validator that combines
//! both with input sanitation. No I/O, no global state; every function is
//! re-entrant and safe to call from any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use bandeira::{validate, identify_brand, passes_checksum, CardBrand};
//!
//! // Full validation - spaces and hyphens are fine
//! let result = validate("4111-1111-1111-1111");
//! assert!(result.is_valid());
//! assert_eq!(result.brand(), Some(CardBrand::Visa));
//! assert_eq!(result.brand_label(), "Visa");
//!
//! // Brand identification alone
//! assert_eq!(identify_brand("3528000000000000"), CardBrand::Jcb);
//!
//! // Checksum alone
//! assert!(passes_checksum("4111111111111111"));
//! assert!(!passes_checksum("4111111111111112"));
//! ```
//!
//! ## Error States
//!
//! Malformed input never panics; it produces a result with a distinct error
//! state and a diagnostic brand label:
//!
//! ```rust
//! use bandeira::{validate, ValidationError};
//!
//! let result = validate("  ");
//! assert!(!result.is_valid());
//! assert_eq!(result.error(), Some(ValidationError::Empty));
//! assert_eq!(result.brand_label(), "invalid: empty input");
//! assert_eq!(result.error_message().unwrap(), "card number cannot be empty");
//! ```
//!
//! An unknown brand is *not* an error: a number that matches no rule can
//! still pass the checksum and come back valid.
//!
//! ## Brand Rules
//!
//! Rules are evaluated in a fixed order; the first match wins:
//!
//! | # | Brand | Prefix | Length |
//! |---|-------|--------|--------|
//! | 1 | Visa | 4 | 13, 16, 19 |
//! | 2 | Mastercard | 51-55, 2221-2720 | 16 |
//! | 3 | American Express | 34, 37 | 15 |
//! | 4 | Discover | 6011, 644-649, 65 | 16-19 |
//! | 5 | JCB | 3528-3589 | 16-19 |
//! | 6 | Diners Club | 36, 38, 39, 300-305 | 14-19 |
//! | 7 | Elo | 17 literal prefixes | any |
//! | 8 | Hipercard | 606282, 3841 | any |
//!
//! Several Elo prefixes overlap Visa's and Mastercard's ranges; because the
//! earlier rules win, a 16-digit `4011...` number is reported as Visa. That
//! precedence is preserved deliberately.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | `bandeira` command-line tool with interactive shell |
//! | `serde` | `Serialize` impls for result types |
//!
//! ## Security
//!
//! Normalized card-number buffers are wrapped in [`zeroize::Zeroizing`] so
//! full numbers do not linger in freed memory, and results never carry the
//! number itself - only the brand and the error state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod classify;
pub mod error;
pub mod luhn;
pub mod normalize;
pub mod validate;

// Re-export the main surface at the crate root
pub use brand::CardBrand;
pub use classify::identify_brand;
pub use error::ValidationError;
pub use validate::{
    is_valid, passes_checksum, validate, ValidationResult, MAX_CARD_DIGITS, MIN_CARD_DIGITS,
};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA_16: &str = "4111111111111111";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5500000000000004";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";
    const DINERS: &str = "30569309025904";
    const JCB: &str = "3530111333300000";

    #[test]
    fn test_visa() {
        let result = validate(VISA_16);
        assert!(result.is_valid());
        assert_eq!(result.brand(), Some(CardBrand::Visa));

        let result = validate(VISA_13);
        assert!(result.is_valid());
        assert_eq!(result.brand(), Some(CardBrand::Visa));
    }

    #[test]
    fn test_other_brands() {
        assert_eq!(validate(MASTERCARD).brand(), Some(CardBrand::Mastercard));
        assert_eq!(validate(AMEX).brand(), Some(CardBrand::Amex));
        assert_eq!(validate(DISCOVER).brand(), Some(CardBrand::Discover));
        assert_eq!(validate(DINERS).brand(), Some(CardBrand::DinersClub));
        assert_eq!(validate(JCB).brand(), Some(CardBrand::Jcb));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(VISA_16));
        assert!(is_valid(MASTERCARD));
        assert!(is_valid("4111 1111 1111 1111"));
        assert!(!is_valid("4111111111111112"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_passes_checksum() {
        assert!(passes_checksum(VISA_16));
        assert!(!passes_checksum("4111111111111112"));
    }

    #[test]
    fn test_identify_brand_matches_validate() {
        for number in [VISA_16, MASTERCARD, AMEX, DISCOVER, DINERS, JCB] {
            assert_eq!(Some(identify_brand(number)), validate(number).brand());
        }
    }

    #[test]
    fn test_length_constants() {
        assert_eq!(MIN_CARD_DIGITS, 13);
        assert_eq!(MAX_CARD_DIGITS, 19);
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardBrand>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<ValidationResult>();
    }
}
