//! Description locator
//!
//! Finds the line naming the product. Strategies run in a fixed order and the
//! first one that produces a description wins:
//! - `marked_line`: a line starting with a product marker glyph
//! - `product_line`: a line that looks like a product name
//! - `first_plausible_line`: the first line that is not metadata
//! - `last_resort`: any product-looking line, metadata or not

use crate::offer::{MARKER, SENTINEL_DESCRIPTION};
use crate::text::{char_len, strip_noise_glyphs, with_marker};
use crate::vocab::{BRANDS, NON_DESCRIPTION_PREFIXES, PRODUCT_MARKERS, PRODUCT_TERMS};
use regex::{Regex, RegexSet};
use std::sync::LazyLock;

/// A description strategy over the message lines.
pub type Strategy = fn(&[&str]) -> Option<String>;

/// Description strategies in precedence order.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("marked_line", marked_line),
    ("product_line", product_line),
    ("first_plausible_line", first_plausible_line),
    ("last_resort", last_resort),
];

static NON_DESCRIPTION: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(
        NON_DESCRIPTION_PREFIXES
            .iter()
            .map(|prefix| format!("(?i)^(?:{prefix})")),
    )
    .expect("non-description prefixes are valid regexes")
});

/// Removed from marked lines, in this order.
static MARKED_LINE_NOISE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[💵💰]?\s*R\$\s*[\d.,]+",
        r"-?\s*R\$\s*[\d.,]+",
        r"\(Cartão\)",
        r"\s*por\s*R\$\s*[\d,]+\s*com\s*ativação[^.]*\.?",
        r"\s*na[^.]*loja[^.]*\.?",
        r"\* \d+×",
        r"Aqui estão[^🔥]*—",
        r"-?\s*R\$(?:\s*[\d.,]+)?",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("marked-line pattern is valid"))
    .collect()
});

/// Removed from unmarked candidate lines, in this order.
static BASIC_NOISE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\s*-?\s*R\$(?:\s*[\d.,]+)?", r"\s*\(Cartão\)", r"\* \d+×"]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("basic cleanup pattern is valid"))
        .collect()
});

/// Locate the product description, or return [`SENTINEL_DESCRIPTION`].
pub fn find_description(lines: &[&str]) -> String {
    for (name, strategy) in STRATEGIES {
        if let Some(description) = strategy(lines).filter(|d| !d.is_empty()) {
            tracing::debug!(strategy = *name, %description, "description found");
            return description;
        }
    }
    SENTINEL_DESCRIPTION.to_string()
}

fn marked_line(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| {
            PRODUCT_MARKERS.iter().any(|m| line.starts_with(m)) && char_len(line) > 5
        })
        .map(|line| normalize_marked_line(line))
}

fn product_line(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .filter(|line| !is_non_description(line))
        .map(|line| basic_cleanup(line))
        .find(|cleaned| char_len(cleaned) > 10 && looks_like_product(cleaned))
        .map(|cleaned| with_marker(&cleaned))
}

fn first_plausible_line(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .filter(|line| {
            !is_non_description(line) && char_len(line) > 8 && !line.starts_with("http")
        })
        .map(|line| basic_cleanup(line))
        .find(|cleaned| char_len(cleaned) > 5)
        .map(|cleaned| with_marker(&cleaned))
}

fn last_resort(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| looks_like_product(line) && char_len(line) > 15)
        .map(|line| with_marker(&basic_cleanup(line)))
}

/// Normalize a line that already carries a product marker.
///
/// All leading marker glyphs collapse into a single 🔥; a space after the
/// glyph run in the source is kept as one space. Noise glyphs, prices and
/// payment notes are removed. Stripping repeats until the body is stable, so
/// a marker uncovered by a removal is stripped too.
pub fn normalize_marked_line(line: &str) -> String {
    let mut body = line.to_string();
    let mut spaced = false;

    loop {
        let (rest, rest_spaced) = strip_leading_markers(&body);
        spaced |= rest_spaced;
        let cleaned = scrub(rest, &MARKED_LINE_NOISE);
        if cleaned == body {
            break;
        }
        body = cleaned;
    }

    if spaced && !body.is_empty() {
        format!("{MARKER} {body}")
    } else {
        format!("{MARKER}{body}")
    }
}

/// Strip the run of leading marker glyphs. Reports whether whitespace
/// followed any of them.
fn strip_leading_markers(line: &str) -> (&str, bool) {
    let mut rest = line.trim_start();
    let mut spaced = false;

    while let Some(marker) = PRODUCT_MARKERS.iter().find(|m| rest.starts_with(**m)) {
        let after = &rest[marker.len()..];
        spaced |= after.starts_with(char::is_whitespace);
        rest = after.trim_start();
    }

    (rest, spaced)
}

fn basic_cleanup(line: &str) -> String {
    let mut cleaned = line.trim().to_string();
    loop {
        let next = scrub(&cleaned, &BASIC_NOISE);
        if next == cleaned {
            return cleaned;
        }
        cleaned = next;
    }
}

/// One pass of noise-glyph and pattern removal.
fn scrub(text: &str, patterns: &[Regex]) -> String {
    let mut cleaned = strip_noise_glyphs(text);
    for re in patterns {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Whether a line is metadata (link, price label, shipping notice...) rather
/// than a product name.
pub fn is_non_description(line: &str) -> bool {
    NON_DESCRIPTION.is_match(line) || char_len(line.trim()) < 10
}

/// Whether a line reads like a product name: a known product word or brand,
/// or at least two capitalized words.
pub fn looks_like_product(line: &str) -> bool {
    let lower = line.to_lowercase();
    if PRODUCT_TERMS
        .iter()
        .chain(BRANDS)
        .any(|term| lower.contains(term))
    {
        return true;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() >= 2 {
        let capitalized = words
            .iter()
            .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
            .count();
        if capitalized >= 2 {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_order() {
        let names: Vec<&str> = STRATEGIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["marked_line", "product_line", "first_plausible_line", "last_resort"]
        );
    }

    #[test]
    fn test_marked_line_keeps_spacing() {
        assert_eq!(
            normalize_marked_line("🔥 Teclado Mecânico Redragon RGB"),
            "🔥 Teclado Mecânico Redragon RGB"
        );
        assert_eq!(normalize_marked_line("🔥Mouse Gamer"), "🔥Mouse Gamer");
    }

    #[test]
    fn test_marked_line_collapses_markers() {
        assert_eq!(normalize_marked_line("🔥🔥🔥 Cadeira Gamer"), "🔥 Cadeira Gamer");
        assert_eq!(normalize_marked_line("✨➡️ Headset Sem Fio"), "🔥 Headset Sem Fio");
        assert_eq!(normalize_marked_line("📦🔥Cooler Rainbow"), "🔥Cooler Rainbow");
    }

    #[test]
    fn test_marked_line_strips_price_and_payment_notes() {
        assert_eq!(
            normalize_marked_line("🔥 Monitor LG UltraGear 27 R$ 1.299,90 (Cartão)"),
            "🔥 Monitor LG UltraGear 27"
        );
        assert_eq!(
            normalize_marked_line("🔥 SSD Kingston 1TB ✅ 💰R$ 399"),
            "🔥 SSD Kingston 1TB"
        );
        assert_eq!(normalize_marked_line("🔥 Mouse Logitech * 2×"), "🔥 Mouse Logitech");
    }

    #[test]
    fn test_marked_line_strips_preamble() {
        assert_eq!(
            normalize_marked_line("🔥 Aqui estão as ofertas — Fone JBL Tune"),
            "🔥 Fone JBL Tune"
        );
    }

    #[test]
    fn test_marked_line_idempotent() {
        for line in [
            "🔥 Teclado Mecânico Redragon RGB",
            "✨✨ Placa de Vídeo RTX 4060 R$ 1.999",
            "🎮Controle Sem Fio (Cartão)",
            "🔥🔥 Kit Desodorante Egeo",
        ] {
            let once = normalize_marked_line(line);
            assert_eq!(normalize_marked_line(&once), once, "input: {line}");
            assert_eq!(once.matches(MARKER).count(), 1, "input: {line}");
        }
    }

    #[test]
    fn test_marked_line_strips_markers_behind_noise_glyphs() {
        let once = normalize_marked_line("🔥 ⚡️ ✨ Kit Teclado Mouse");
        assert_eq!(once, "🔥 Kit Teclado Mouse");
        assert_eq!(normalize_marked_line(&once), once);
    }

    #[test]
    fn test_marked_line_strips_markers_behind_prices() {
        let once = normalize_marked_line("🔥R$10 ✨ Fone Bluetooth");
        assert_eq!(once, "🔥 Fone Bluetooth");
        assert_eq!(normalize_marked_line(&once), once);
    }

    #[test]
    fn test_basic_cleanup_strips_currency_anywhere() {
        assert_eq!(basic_cleanup("Monitor LG UltraGear R$ 899,00"), "Monitor LG UltraGear");
        assert_eq!(
            basic_cleanup("Mouse Sem Fio R$ 99 (Cartão) à vista"),
            "Mouse Sem Fio à vista"
        );
        assert_eq!(basic_cleanup("Kit R$ Teclado"), "Kit Teclado");
        assert_eq!(basic_cleanup("Kit RR$$ Teclado"), "Kit Teclado");
    }

    #[test]
    fn test_non_description_prefixes() {
        assert!(is_non_description("https://loja.example.com/produto"));
        assert!(is_non_description("cupom: GANHE10 para todo o site"));
        assert!(is_non_description("Valor: R$ 199,90 à vista"));
        assert!(is_non_description("FRETE GRÁTIS para todo o Brasil"));
        assert!(is_non_description("Em até 10x sem juros no cartão"));
        assert!(is_non_description("2× unidades no carrinho"));
        assert!(is_non_description("Curta"));
        assert!(!is_non_description("Mouse Gamer Redragon Cobra"));
    }

    #[test]
    fn test_looks_like_product() {
        assert!(looks_like_product("kit com teclado e mouse"));
        assert!(looks_like_product("oferta redragon imperdível"));
        assert!(looks_like_product("Garrafa Térmica Stanley"));
        assert!(!looks_like_product("corre que acaba rápido"));
        assert!(!looks_like_product("Aproveitem"));
    }

    #[test]
    fn test_find_description_marked_line_first() {
        let lines = vec!["Mouse Gamer Logitech G203", "✨ Teclado Redragon Kumara"];
        assert_eq!(find_description(&lines), "🔥 Teclado Redragon Kumara");
    }

    #[test]
    fn test_find_description_product_line() {
        let lines = vec![
            "Cupom: ABC",
            "Monitor Gamer LG UltraGear 24 - R$ 899,00",
            "https://loja.example/monitor",
        ];
        assert_eq!(find_description(&lines), "🔥Monitor Gamer LG UltraGear 24");
    }

    #[test]
    fn test_find_description_product_line_drops_inline_price() {
        let lines = vec!["Monitor LG UltraGear R$ 899,00", "https://x.example/m"];
        assert_eq!(find_description(&lines), "🔥Monitor LG UltraGear");
    }

    #[test]
    fn test_find_description_first_plausible_line() {
        let lines = vec!["corre que acaba rápido", "R$ 49,90"];
        assert_eq!(find_description(&lines), "🔥corre que acaba rápido");
    }

    #[test]
    fn test_find_description_last_resort() {
        let lines = vec!["Cupom do teclado mecânico", "R$ 49,90"];
        assert_eq!(find_description(&lines), "🔥Cupom do teclado mecânico");
    }

    #[test]
    fn test_find_description_sentinel() {
        let lines = vec!["R$ 49,90", "https://loja.example/x"];
        assert_eq!(find_description(&lines), SENTINEL_DESCRIPTION);
    }
}
