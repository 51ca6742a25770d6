//! Card brand types.
//!
//! This module provides the `CardBrand` enum for identifying card networks.
//! `Unknown` is a regular variant because an unrecognized prefix is a valid
//! classification outcome, not a failure: such a number can still pass the
//! Luhn check.

use std::fmt;

/// Card brands recognized by the classifier.
///
/// Each variant corresponds to one rule in the ordered rule table (see
/// [`crate::classify::identify_brand`]). The Brazilian networks Elo and
/// Hipercard are matched purely on literal prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardBrand {
    /// Visa - first digit 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - prefix 51-55 or 2221-2720, length 16
    Mastercard,
    /// American Express - prefix 34 or 37, length 15
    Amex,
    /// Discover - prefix 6011, 644-649 or 65, length 16-19
    Discover,
    /// JCB - prefix 3528-3589, length 16-19
    Jcb,
    /// Diners Club - prefix 36, 38, 39 or 300-305, length 14-19
    DinersClub,
    /// Elo - Brazilian network, fixed list of literal prefixes, any length
    Elo,
    /// Hipercard - Brazilian network, prefix 606282 or 3841, any length
    Hipercard,
    /// No rule matched the number.
    Unknown,
}

impl CardBrand {
    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Elo => "Elo",
            Self::Hipercard => "Hipercard",
            Self::Unknown => "unknown brand",
        }
    }

    /// Returns `true` for every variant except [`CardBrand::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
