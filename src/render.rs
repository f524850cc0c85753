//! Canonical offer template

use crate::offer::OfferRecord;

const PRICE_GLYPH: &str = "💵";
const COUPON_GLYPH: &str = "🎟";
const LINK_GLYPH: &str = "🔗";
const PRODUCT_SEPARATOR: &str = "📍Produto";
const PRICE_PLACEHOLDER: &str = "💵R$[preço]";

/// Render a record into the fixed reply template.
///
/// Description, blank line, price line, optional coupon line, then links;
/// every link after the first is preceded by a `📍Produto` line. No trailing
/// newline.
pub fn render(record: &OfferRecord) -> String {
    let mut parts: Vec<String> = vec![record.description.clone(), String::new()];

    if record.price.is_empty() {
        parts.push(PRICE_PLACEHOLDER.to_string());
    } else if record.installment.is_empty() {
        parts.push(format!("{PRICE_GLYPH}R${}", record.price));
    } else {
        parts.push(format!(
            "{PRICE_GLYPH}R${} em {}",
            record.price, record.installment
        ));
    }

    if !record.coupon.is_empty() {
        if record.coupon.starts_with("Resgate") {
            parts.push(format!("{COUPON_GLYPH}{}", record.coupon));
        } else {
            parts.push(format!("{COUPON_GLYPH}Cupom: {}", record.coupon));
        }
    }

    for (i, link) in record.links.iter().enumerate() {
        if i > 0 {
            parts.push(PRODUCT_SEPARATOR.to_string());
        }
        parts.push(format!("{LINK_GLYPH}{link}"));
    }

    parts.join("\n")
}
