//! Offer extraction pipeline
//!
//! gate -> description -> price -> coupon -> links, all over one snapshot of
//! the message lines.

use crate::coupon::extract_coupon;
use crate::description::find_description;
use crate::error::ExtractError;
use crate::gate::is_offer_candidate;
use crate::offer::OfferRecord;
use crate::price::extract_price;
use crate::text::split_lines;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

/// Extract unique URLs in message order. URLs are kept exactly as written.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for mat in URL_RE.find_iter(text) {
        let url = mat.as_str();
        if seen.insert(url) {
            links.push(url.to_string());
        }
    }

    links
}

/// Derive the full record from a message. Does not apply the gate.
pub fn extract_record(text: &str) -> OfferRecord {
    let lines = split_lines(text);
    let price = extract_price(text, &lines);

    OfferRecord {
        description: find_description(&lines),
        price: price.price,
        installment: price.installment,
        coupon: extract_coupon(&lines),
        links: extract_links(text),
    }
}

/// Run the gate and extraction, reporting why a message yields no offer.
pub fn extract_offer(text: &str) -> Result<OfferRecord, ExtractError> {
    if !is_offer_candidate(text) {
        return Err(ExtractError::NoCandidate);
    }

    let record = extract_record(text);
    if !record.has_description() {
        return Err(ExtractError::UnresolvedDescription);
    }

    Ok(record)
}

/// Offers found in one message.
///
/// A message is always treated as a single offer candidate, so this yields
/// at most one record.
pub fn process_message(text: &str) -> Vec<OfferRecord> {
    match extract_offer(text) {
        Ok(record) => vec![record],
        Err(e) => {
            tracing::debug!(reason = %e, "message skipped");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::SENTINEL_DESCRIPTION;

    #[test]
    fn test_extract_links() {
        let text = "Loja 1: https://a.example/x?y=1\nLoja 2: http://b.example/p).";
        assert_eq!(
            extract_links(text),
            vec!["https://a.example/x?y=1", "http://b.example/p)."]
        );
    }

    #[test]
    fn test_extract_links_dedup_keeps_first_order() {
        let text = "https://b.example https://a.example https://b.example https://a.example";
        assert_eq!(extract_links(text), vec!["https://b.example", "https://a.example"]);
    }

    #[test]
    fn test_extract_record_full() {
        let text = "🔥 Teclado Mecânico Redragon RGB\n\
                    De R$ 350,00 por R$ 199,90 em 10x sem juros\n\
                    Cupom: TECLADOVIP\n\
                    https://loja.example.com/produto123";
        let record = extract_record(text);
        assert_eq!(record.description, "🔥 Teclado Mecânico Redragon RGB");
        assert_eq!(record.price, "199,90");
        assert_eq!(record.installment, "10x sem juros");
        assert_eq!(record.coupon, "TECLADOVIP");
        assert_eq!(record.links, vec!["https://loja.example.com/produto123"]);
    }

    #[test]
    fn test_extract_offer_no_candidate() {
        assert_eq!(
            extract_offer("só uma linha R$ 10"),
            Err(ExtractError::NoCandidate)
        );
        assert_eq!(
            extract_offer("Bom dia grupo\nHoje tem promoção"),
            Err(ExtractError::NoCandidate)
        );
    }

    #[test]
    fn test_extract_offer_unresolved_description() {
        let text = "R$ 49,90\nhttps://loja.example/x";
        assert_eq!(extract_record(text).description, SENTINEL_DESCRIPTION);
        assert_eq!(extract_offer(text), Err(ExtractError::UnresolvedDescription));
        assert!(process_message(text).is_empty());
    }

    #[test]
    fn test_process_message_single_offer() {
        let text = "Mouse Gamer Redragon Cobra\nR$ 99,90\nhttps://loja.example/mouse";
        let offers = process_message(text);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].description, "🔥Mouse Gamer Redragon Cobra");
        assert_eq!(offers[0].price, "99,90");
    }
}
