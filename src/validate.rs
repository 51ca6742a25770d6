//! Validation orchestration.
//!
//! [`validate`] runs the full pipeline: normalization, the empty/charset/
//! length gates, brand classification, and the Luhn checksum. Every input,
//! however malformed, resolves to a well-formed [`ValidationResult`]; nothing
//! in this module panics or returns early with a bare error.
//!
//! The normalized digit buffers are held in [`zeroize::Zeroizing`] so full
//! card numbers do not linger in freed memory after a call returns.

use zeroize::Zeroizing;

use crate::brand::CardBrand;
use crate::classify::classify_digits;
use crate::error::ValidationError;
use crate::luhn;
use crate::normalize::normalize;

/// Minimum digits a card number may have after normalization.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum digits a card number may have after normalization.
pub const MAX_CARD_DIGITS: usize = 19;

/// Outcome of validating one card number.
///
/// An immutable record with three logical fields: validity, brand, and an
/// optional error. The brand field is `None` when the input was rejected
/// before classification (empty, non-numeric, bad length);
/// [`ValidationResult::brand_label`] renders either the brand name or the
/// rejection diagnostic as a fixed string.
///
/// Note that `brand() == Some(CardBrand::Unknown)` together with
/// `is_valid() == true` is a perfectly normal outcome: the number passed the
/// checksum but matched no brand rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    is_valid: bool,
    brand: Option<CardBrand>,
    error: Option<ValidationError>,
}

impl ValidationResult {
    /// Input rejected before classification was attempted.
    #[inline]
    const fn rejected(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            brand: None,
            error: Some(error),
        }
    }

    /// Input reached the classifier; validity depends on the checksum.
    #[inline]
    const fn classified(brand: CardBrand, checksum_ok: bool) -> Self {
        Self {
            is_valid: checksum_ok,
            brand: Some(brand),
            error: if checksum_ok {
                None
            } else {
                Some(ValidationError::ChecksumFailed)
            },
        }
    }

    /// Whether the number passed every check.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The classified brand, or `None` if the input never reached the
    /// classifier.
    #[inline]
    pub const fn brand(&self) -> Option<CardBrand> {
        self.brand
    }

    /// The brand name, or the rejection diagnostic for inputs that never
    /// reached the classifier.
    pub const fn brand_label(&self) -> &'static str {
        match (self.brand, self.error) {
            (Some(brand), _) => brand.name(),
            (None, Some(error)) => error.brand_label(),
            // Unreachable through the public constructors
            (None, None) => "unknown brand",
        }
    }

    /// The failure state, `None` when the number is valid.
    #[inline]
    pub const fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// The failure message, `None` when the number is valid.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

/// Validates a credit card number.
///
/// Pipeline, each step short-circuiting to a distinct failure state:
/// 1. strip spaces and hyphens;
/// 2. reject empty input;
/// 3. reject non-digit characters;
/// 4. reject lengths outside 13-19;
/// 5. classify the brand and run the Luhn checksum.
///
/// # Example
///
/// ```
/// use bandeira::{validate, CardBrand, ValidationError};
///
/// let result = validate("4111-1111-1111-1111");
/// assert!(result.is_valid());
/// assert_eq!(result.brand(), Some(CardBrand::Visa));
/// assert_eq!(result.error(), None);
///
/// let result = validate("4111111111111112");
/// assert!(!result.is_valid());
/// assert_eq!(result.brand(), Some(CardBrand::Visa));
/// assert_eq!(result.error(), Some(ValidationError::ChecksumFailed));
/// ```
pub fn validate(input: &str) -> ValidationResult {
    let cleaned = Zeroizing::new(normalize(input));

    if cleaned.is_empty() {
        return ValidationResult::rejected(ValidationError::Empty);
    }

    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationResult::rejected(ValidationError::NonNumeric);
    }

    let length = cleaned.len();
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&length) {
        return ValidationResult::rejected(ValidationError::InvalidLength { length });
    }

    let brand = classify_digits(&cleaned);
    let digits = Zeroizing::new(digit_values(&cleaned));

    ValidationResult::classified(brand, luhn::validate(&digits))
}

/// Quick boolean check, equivalent to `validate(input).is_valid()`.
///
/// # Example
///
/// ```
/// use bandeira::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111111111111112"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}

/// Checks only the Luhn checksum, skipping brand and length rules.
///
/// Spaces and hyphens are stripped first. Returns `false` for empty or
/// non-digit input rather than failing.
///
/// # Example
///
/// ```
/// use bandeira::passes_checksum;
///
/// assert!(passes_checksum("4111111111111111"));
/// assert!(!passes_checksum("4111111111111112"));
/// assert!(!passes_checksum(""));
/// assert!(!passes_checksum("41x1"));
/// ```
pub fn passes_checksum(input: &str) -> bool {
    let cleaned = Zeroizing::new(normalize(input));
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits = Zeroizing::new(digit_values(&cleaned));
    luhn::validate(&digits)
}

/// ASCII digit string to digit values. Caller guarantees all-digit input.
#[inline]
fn digit_values(cleaned: &str) -> Vec<u8> {
    cleaned.bytes().map(|b| b - b'0').collect()
}
