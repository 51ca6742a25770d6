//! Input normalization for card numbers.
//!
//! Card numbers are commonly written with group separators
//! (`4111-1111-1111-1111`, `4111 1111 1111 1111`). Normalization strips the
//! two accepted separators, spaces and hyphens, and nothing else. The output
//! is deliberately not validated here: emptiness and stray characters are
//! distinct error classes handled by the orchestrator in [`crate::validate`].

/// Removes all spaces and hyphens from a raw card number string.
///
/// Total function: never fails, any input produces a (possibly empty) output.
///
/// # Example
///
/// ```
/// use bandeira::normalize::normalize;
///
/// assert_eq!(normalize("4111-1111 1111-1111"), "4111111111111111");
/// assert_eq!(normalize("  -  "), "");
/// assert_eq!(normalize("abc-123"), "abc123");
/// ```
#[inline]
pub fn normalize(input: &str) -> String {
    input.chars().filter(|&c| c != ' ' && c != '-').collect()
}
