//! Validation error states.
//!
//! No variant is ever thrown or panicked: every malformed input maps to a
//! distinct result state carried inside [`crate::ValidationResult`]. An
//! unrecognized brand is deliberately *not* an error - such a number can
//! still pass the checksum.

use std::fmt;

/// Why a card number failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// The input was empty after stripping separators.
    Empty,

    /// The input contained characters other than digits, spaces or hyphens.
    NonNumeric,

    /// The stripped number was shorter than 13 or longer than 19 digits.
    InvalidLength {
        /// The actual number of digits provided.
        length: usize,
    },

    /// The brand rules were consulted but the Luhn checksum failed.
    ///
    /// Usually indicates a typo in the card number.
    ChecksumFailed,
}

impl ValidationError {
    /// Diagnostic label shown in the brand field of a rejected result.
    ///
    /// Rejections surface through the brand field of the result, so the
    /// three pre-classification errors each carry a short "invalid: ..."
    /// label. A checksum failure keeps the real brand, hence has no label
    /// of its own here.
    pub const fn brand_label(&self) -> &'static str {
        match self {
            Self::Empty => "invalid: empty input",
            Self::NonNumeric => "invalid: non-numeric characters",
            Self::InvalidLength { .. } => "invalid: incorrect length",
            Self::ChecksumFailed => "invalid: checksum",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number cannot be empty"),
            Self::NonNumeric => write!(f, "card number must contain only digits"),
            Self::InvalidLength { length } => {
                write!(f, "card length ({}) is invalid", length)
            }
            Self::ChecksumFailed => write!(f, "checksum validation failed"),
        }
    }
}

impl std::error::Error for ValidationError {}
