//! Text helpers shared by the extractors

use crate::offer::MARKER;
use crate::vocab::NOISE_GLYPHS;

/// Split a message into trimmed, non-blank lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Remove every decorative glyph in [`NOISE_GLYPHS`].
pub fn strip_noise_glyphs(s: &str) -> String {
    let mut out = s.to_string();
    for glyph in NOISE_GLYPHS {
        if out.contains(glyph) {
            out = out.replace(glyph, "");
        }
    }
    out
}

/// Prefix the canonical marker unless it is already there.
pub fn with_marker(s: &str) -> String {
    if s.starts_with(MARKER) {
        s.to_string()
    } else {
        format!("{MARKER}{s}")
    }
}

/// Shorten for log lines, on a character boundary.
pub fn truncate(s: &str, max: usize) -> String {
    if char_len(s) <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
