//! Validity gate: cheap pre-filter before full extraction

use crate::text::split_lines;

/// Whether a message plausibly describes an offer.
///
/// Needs at least two non-blank lines, and one of: a "R$" amount, the word
/// "cupom" in any case, or a line starting with "http".
pub fn is_offer_candidate(text: &str) -> bool {
    let lines = split_lines(text);
    if lines.len() < 2 {
        return false;
    }

    let has_price = lines.iter().any(|line| line.contains("R$"));
    let has_coupon = lines
        .iter()
        .any(|line| line.to_lowercase().contains("cupom"));
    let has_link = lines.iter().any(|line| line.starts_with("http"));

    has_price || has_coupon || has_link
}
