//! Coupon extraction
//!
//! Tiers run in precedence order. Inside a tier lines are scanned in message
//! order, and the first tier that yields a coupon ends the search.

use regex::Regex;
use std::sync::LazyLock;

/// A coupon tier over the message lines.
pub type Tier = fn(&[&str]) -> Option<String>;

/// Coupon tiers in precedence order.
pub const TIERS: &[(&str, Tier)] = &[
    ("redeem_amount", redeem_amount),
    ("marketplace_combo", marketplace_combo),
    ("ticket_glyph", ticket_glyph),
    ("labeled", labeled),
    ("bare_code", bare_code),
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("coupon pattern is valid")
}

static REDEEM_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)RESGATE\s*(?:O)?\s*CUPOM\s*DE\s*R?\$?(\d+)\s*OFF"));
static REDEEM_SHORT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Resgate\s*Cupom\s*(\d+)\s*Off\s*:"));
static COMBO_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)([A-Z0-9]+\s*\+\s*[A-Z0-9]+\s*\+\s*\d+\s*moedas?)")
});
static COMBO_ALT_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)([A-Z0-9]+\s*(?:ou|/)\s*[A-Z0-9]+\s*(?:\+[^+]*)*\+?\s*\d+\s*Moedas?\s*(?:no\s*APP)?)")
});
static TICKET_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[🎟📝]\x{FE0F}?\s*"));
static COUPON_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^Cupom[:\s]*"));
static DASH_LABELED_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)-\s*Cupom[:\s]*([^\n]+)"));
static LABELED_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)Cupom[:\s]*([^\n]+)"));
static SPACED_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Cupom\s+([A-Z0-9]+)"));
static BARE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z0-9]+$"));
static TARGET_CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s*para\s*atingir.*$"));
static LINK_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)AQUI:?\s*http.*$"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Extract the coupon text, or an empty string.
///
/// A tier that matches ends the search even when its text cleans down to
/// nothing.
pub fn extract_coupon(lines: &[&str]) -> String {
    for (name, tier) in TIERS {
        if let Some(coupon) = tier(lines) {
            tracing::debug!(tier = *name, %coupon, "coupon found");
            return coupon;
        }
    }
    String::new()
}

fn redeem_amount(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        REDEEM_RE
            .captures(line)
            .or_else(|| REDEEM_SHORT_RE.captures(line))
            .map(|cap| format!("Resgate cupom de R${} OFF", &cap[1]))
    })
}

fn marketplace_combo(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        COMBO_RE
            .captures(line)
            .or_else(|| COMBO_ALT_RE.captures(line))
            .map(|cap| cap[1].trim().to_string())
    })
}

fn ticket_glyph(lines: &[&str]) -> Option<String> {
    let line = lines
        .iter()
        .find(|line| line.contains('🎟') || line.contains('📝'))?;
    let text = TICKET_PREFIX_RE.replace(line, "");
    let text = COUPON_LABEL_RE.replace(&text, "");
    Some(clean_coupon(&text))
}

fn labeled(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        if let Some(cap) = DASH_LABELED_RE.captures(line) {
            return Some(clean_coupon(&cap[1]));
        }
        if let Some(cap) = LABELED_RE.captures(line) {
            return Some(clean_coupon(&cap[1]));
        }
        SPACED_LABEL_RE
            .captures(line)
            .map(|cap| cap[1].to_string())
    })
}

fn bare_code(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| {
            BARE_CODE_RE.is_match(line)
                && (5..=20).contains(&line.chars().count())
                && !line.starts_with("http")
        })
        .map(|line| line.to_string())
}

/// Trim, drop "para atingir..." and "AQUI: http..." tails, collapse spaces.
pub fn clean_coupon(text: &str) -> String {
    let text = text.trim();
    let text = TARGET_CLAUSE_RE.replace(text, "");
    let text = LINK_CLAUSE_RE.replace(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_lines;

    fn coupon_of(text: &str) -> String {
        extract_coupon(&split_lines(text))
    }

    #[test]
    fn test_tier_order() {
        let names: Vec<&str> = TIERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["redeem_amount", "marketplace_combo", "ticket_glyph", "labeled", "bare_code"]
        );
    }

    #[test]
    fn test_redeem_beats_bare_code() {
        let text = "Fone Bluetooth\nRESGATE CUPOM DE R$10 OFF\nABCDE123";
        assert_eq!(coupon_of(text), "Resgate cupom de R$10 OFF");
    }

    #[test]
    fn test_redeem_short_form() {
        assert_eq!(
            coupon_of("Headset\nResgate Cupom 25 Off: na página do produto"),
            "Resgate cupom de R$25 OFF"
        );
        assert_eq!(
            coupon_of("Headset\nresgate o cupom de $5 off"),
            "Resgate cupom de R$5 OFF"
        );
    }

    #[test]
    fn test_marketplace_combo() {
        assert_eq!(
            coupon_of("Placa de vídeo\nCupom: BR10 + ALI20 + 300 moedas"),
            "BR10 + ALI20 + 300 moedas"
        );
        assert_eq!(
            coupon_of("SSD\nUse BRAE04 ou BRAE05 + 150 Moedas no APP"),
            "BRAE04 ou BRAE05 + 150 Moedas no APP"
        );
    }

    #[test]
    fn test_ticket_glyph() {
        assert_eq!(coupon_of("Mouse\n🎟 Cupom: MOUSE10"), "MOUSE10");
        assert_eq!(coupon_of("Mouse\n📝 Use FRETEGRATIS no carrinho"), "Use FRETEGRATIS no carrinho");
        assert_eq!(coupon_of("Mouse\n🎟️CUPOM GAMER15"), "GAMER15");
    }

    #[test]
    fn test_labeled_forms() {
        assert_eq!(coupon_of("Mouse\n- Cupom: DESCONTO5"), "DESCONTO5");
        assert_eq!(coupon_of("Mouse\nCupom: TECLADOVIP"), "TECLADOVIP");
        assert_eq!(coupon_of("Mouse\nUse o cupom   PRIMEIRA   COMPRA"), "PRIMEIRA COMPRA");
    }

    #[test]
    fn test_cleanup_drops_tails() {
        assert_eq!(
            coupon_of("Mouse\nCupom: JUNTA10 para atingir o valor mínimo"),
            "JUNTA10"
        );
        assert_eq!(
            coupon_of("Mouse\nCupom: RESGATE AQUI: https://loja.example/cupom"),
            "RESGATE"
        );
    }

    #[test]
    fn test_empty_tier_match_ends_search() {
        let lines = vec!["Mouse Gamer Redragon", "🎟", "Cupom: ABC"];
        assert_eq!(extract_coupon(&lines), "");

        let lines = vec![
            "Teclado Mecânico",
            "- Cupom: para atingir o mínimo",
            "ABCDE123",
        ];
        assert_eq!(extract_coupon(&lines), "");
    }

    #[test]
    fn test_bare_code() {
        assert_eq!(coupon_of("Mouse Gamer\nR$ 99\nGAMER2024"), "GAMER2024");
        assert_eq!(coupon_of("Mouse Gamer\nR$ 99\nABC"), "");
        assert_eq!(coupon_of("Mouse Gamer\nR$ 99\nlowercase"), "");
    }

    #[test]
    fn test_no_coupon() {
        assert_eq!(coupon_of("Mouse Gamer\nR$ 99,90\nhttps://loja.example"), "");
    }

    #[test]
    fn test_clean_coupon() {
        assert_eq!(clean_coupon("  ABC   DEF  "), "ABC DEF");
        assert_eq!(clean_coupon("XYZ Para Atingir R$ 100"), "XYZ");
    }
}
