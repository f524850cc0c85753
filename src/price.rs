//! Price and installment extraction
//!
//! Amounts are captured as written ("1.299,90") and never parsed.

use regex::Regex;
use std::sync::LazyLock;

/// Price patterns in precedence order. The first pattern matching anywhere
/// in the message wins, even when a later one would match earlier text.
pub const PRICE_PATTERNS: &[(&str, &str)] = &[
    ("por_label", r"POR:\s*([\d.,]+)(?:\s*REAIS)?"),
    ("de_por", r"De\s*R\$\s*[\d.,]+\s*por\s*R\$\s*([\d.,]+)"),
    ("valor_label", r"Valor:\s*R\$\s*([\d.,]+)"),
    ("por_apenas", r"Por\s*apenas:\s*R\$\s*([\d.,]+)"),
    ("cartao_note", r"R\$\s*([\d.,]+)\s*\(Cartão\)"),
    ("no_cartao", r"R\$\s*([\d.,]+)\s*NO\s*CARTÃO"),
    ("no_pix", r"R\$\s*([\d.,]+)\s*NO\s*PIX"),
    ("pix_note", r"R\$\s*([\d.,]+)\s*\(NO PIX\)"),
    ("reais", r"R\$\s*([\d.,]+)\s*REAIS"),
    ("cash_emoji", r"💵R\$\s*([\d.,]+)"),
    ("money_valor", r"💸\s*Valor:\s*R\$\s*([\d.,]+)"),
    ("bare", r"R\$\s*([\d.,]+)"),
    ("com_ativacao", r"por\s*R\$\s*([\d.,]+)\s*com\s*ativação"),
];

static PRICE_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PRICE_PATTERNS
        .iter()
        .map(|(name, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("price pattern is valid");
            (*name, re)
        })
        .collect()
});

static LINE_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\$\s*([\d.,]+)").expect("line price pattern is valid"));

static INSTALLMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+x\s*sem\s*juros)").expect("installment pattern is valid")
});

/// Lines at least this long are skipped by the per-line fallback.
const MAX_FALLBACK_LINE_CHARS: usize = 100;

/// Price and installment text of one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceInfo {
    pub price: String,
    pub installment: String,
}

/// Extract the price and installment terms.
pub fn extract_price(text: &str, lines: &[&str]) -> PriceInfo {
    PriceInfo {
        price: find_price(text, lines).unwrap_or_default(),
        installment: extract_installment(text),
    }
}

fn find_price(text: &str, lines: &[&str]) -> Option<String> {
    for (name, re) in PRICE_RES.iter() {
        if let Some(cap) = re.captures(text) {
            tracing::debug!(pattern = *name, price = &cap[1], "price found");
            return Some(cap[1].to_string());
        }
    }

    price_from_lines(lines)
}

/// Per-line fallback: the first `R$N` amount on a line shorter than
/// [`MAX_FALLBACK_LINE_CHARS`].
fn price_from_lines(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .filter(|line| line.chars().count() < MAX_FALLBACK_LINE_CHARS)
        .find_map(|line| LINE_PRICE_RE.captures(line).map(|cap| cap[1].to_string()))
}

/// Interest-free installment text ("10x sem juros"), or empty.
pub fn extract_installment(text: &str) -> String {
    INSTALLMENT_RE
        .captures(text)
        .map(|cap| cap[1].to_string())
        .unwrap_or_default()
}
