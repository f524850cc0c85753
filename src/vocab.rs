//! Static vocabularies used by the extraction heuristics
//!
//! Everything the heuristics match literally lives here, so the tables can be
//! tested and extended without touching control flow.

/// Glyphs that mark a line as a product description.
///
/// Multi-glyph alternatives come before their own prefixes so stripping
/// removes the longest one.
pub const PRODUCT_MARKERS: &[&str] = &[
    "✨➡️",
    "🔥",
    "✨",
    "🧟‍♂️",
    "📦",
    "🎮",
    "🖥️",
    "💻",
    "⌨️",
    "🖱️",
];

/// Decorative glyphs removed from anywhere inside a description.
pub const NOISE_GLYPHS: &[&str] = &[
    "⚡️", "✔️", "⚠️", "✅", "⭐️", "🇧🇷", "✍️", "💸", "📝", "💵", "💰",
];

/// Line prefixes (regex, matched case-insensitively at line start) that mark
/// metadata rather than a product name.
pub const NON_DESCRIPTION_PREFIXES: &[&str] = &[
    r"http",
    r"🔗",
    r"📍",
    r"💸",
    r"📝",
    r"🎟",
    r"💵",
    r"✍️",
    r"POR:",
    r"Valor:",
    r"Cupom",
    r"Oferta:",
    r"Use o",
    r"Ative por",
    r"Vendido e entregue",
    r"Parcelado",
    r"Garantia",
    r"Limitado",
    r"OFF",
    r"Origem do",
    r"Por apenas:",
    r"COMPREI",
    r"Link de compra:",
    r"🔗 Link",
    r"Aqui estão",
    r"Visite a página",
    r"www\.",
    r"\d+×",
    r"❌",
    r"✅",
    r"⚠️",
    r"FRETE GRÁTIS",
    r"Em até \d+x",
];

/// Product-category words.
pub const PRODUCT_TERMS: &[&str] = &[
    "teclado",
    "mouse",
    "monitor",
    "processador",
    "placa",
    "notebook",
    "game",
    "power bank",
    "combo",
    "desodorante",
    "ssd",
    "headset",
    "console",
    "cooler",
    "cadeira",
    "fone",
    "webcam",
    "impressora",
    "tablet",
    "smartphone",
    "smartwatch",
    "tv",
    "som",
    "caixa",
    "fonte",
    "memória",
    "hd",
    "nvme",
    "gamer",
    "escritório",
    "mesh",
    "gabinete",
    "rainbow",
];

/// Brand names.
pub const BRANDS: &[&str] = &[
    "nike",
    "alienware",
    "dell",
    "inno3d",
    "acer",
    "egeo",
    "xfx",
    "amd",
    "nvidia",
    "radeon",
    "geforce",
    "lg",
    "ultragear",
    "corsair",
    "vgn",
    "boyhom",
    "redragon",
    "irok",
    "aula",
    "elg",
    "msi",
    "asus",
    "intel",
    "mancer",
];
