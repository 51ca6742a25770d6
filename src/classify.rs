//! Card brand classification from prefix and length rules.
//!
//! Each brand rule is a predicate over the cleaned number's length and a
//! fixed-width leading prefix. Rules are evaluated in a fixed order and the
//! first match wins; order matters because several prefixes overlap (the Elo
//! prefixes `4011`, `4576` and `5067` sit inside Visa's and Mastercard's
//! ranges, so a 16-digit `4011...` number classifies as Visa). The order is
//! part of the contract: changing it silently reclassifies real numbers.

use crate::brand::CardBrand;
use crate::normalize::normalize;

/// Elo literal prefixes, matched with `starts_with` in this order.
///
/// The list mixes 4- and 6-digit prefixes; the broad 4-digit entries at the
/// tail (`5067`, `4576`, `4011`) subsume several of the 6-digit ones but are
/// kept verbatim, matching the reference rule table.
const ELO_PREFIXES: [&str; 17] = [
    "401178", "401179", "431274", "438935", "451416", "457393", "457631",
    "457632", "504175", "627780", "636297", "636368", "636369", "506699",
    "5067", "4576", "4011",
];

/// Hipercard literal prefixes.
const HIPERCARD_PREFIXES: [&str; 2] = ["606282", "3841"];

/// Identifies the card brand of a number.
///
/// Spaces and hyphens are stripped before classification. Returns
/// [`CardBrand::Unknown`] when the stripped input is empty, contains
/// non-digit characters, or matches no rule. Deterministic and total: never
/// panics, regardless of input length or content.
///
/// # Example
///
/// ```
/// use bandeira::{identify_brand, CardBrand};
///
/// assert_eq!(identify_brand("4111 1111 1111 1111"), CardBrand::Visa);
/// assert_eq!(identify_brand("3528000000000000"), CardBrand::Jcb);
/// assert_eq!(identify_brand("6062820000000000"), CardBrand::Hipercard);
/// assert_eq!(identify_brand("9999999999999999"), CardBrand::Unknown);
/// ```
pub fn identify_brand(input: &str) -> CardBrand {
    let cleaned = normalize(input);
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return CardBrand::Unknown;
    }
    classify_digits(&cleaned)
}

/// Classifies an already-cleaned, all-digit number.
///
/// Works for any length, including lengths the orchestrator would reject;
/// numbers shorter than a rule's prefix width simply fail that rule.
pub(crate) fn classify_digits(number: &str) -> CardBrand {
    let len = number.len();

    // Visa: broad first-digit rule, evaluated before the overlapping Elo
    // prefixes further down
    if number.starts_with('4') && matches!(len, 13 | 16 | 19) {
        return CardBrand::Visa;
    }

    if len == 16
        && (in_prefix_range(number, 2, 51, 55) || in_prefix_range(number, 4, 2221, 2720))
    {
        return CardBrand::Mastercard;
    }

    if len == 15 && (number.starts_with("34") || number.starts_with("37")) {
        return CardBrand::Amex;
    }

    if (16..=19).contains(&len)
        && (number.starts_with("6011")
            || in_prefix_range(number, 3, 644, 649)
            || number.starts_with("65"))
    {
        return CardBrand::Discover;
    }

    if (16..=19).contains(&len) && in_prefix_range(number, 4, 3528, 3589) {
        return CardBrand::Jcb;
    }

    if (14..=19).contains(&len)
        && (number.starts_with("36")
            || number.starts_with("38")
            || number.starts_with("39")
            || in_prefix_range(number, 3, 300, 305))
    {
        return CardBrand::DinersClub;
    }

    // Elo and Hipercard match on prefix alone, regardless of total length
    if ELO_PREFIXES.iter().any(|p| number.starts_with(p)) {
        return CardBrand::Elo;
    }

    if HIPERCARD_PREFIXES.iter().any(|p| number.starts_with(p)) {
        return CardBrand::Hipercard;
    }

    CardBrand::Unknown
}

/// Reads the first `width` digits of `number` as an unsigned integer and
/// tests it against an inclusive range.
///
/// Non-matching when the number is shorter than `width`, so length-mangled
/// input can never make a range rule panic.
#[inline]
fn in_prefix_range(number: &str, width: usize, lo: u32, hi: u32) -> bool {
    match number.get(..width).and_then(|p| p.parse::<u32>().ok()) {
        Some(value) => (lo..=hi).contains(&value),
        None => false,
    }
}
