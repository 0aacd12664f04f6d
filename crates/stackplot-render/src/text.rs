//! Text measurement for layout.
//!
//! Margins and legend sizing only need advance-level accuracy, so widths
//! come from a compact per-character table calibrated to a Computer
//! Modern-like serif face. Actual glyph shaping is left to the SVG consumer;
//! PNG export resolves real fonts through the system font database.

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Advance width of one character, in em.
fn char_advance_em(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '!' | '.' | ',' | ':' | ';' | '\'' | '|' => 0.28,
        'f' | 't' | 'r' | 's' | '(' | ')' | '[' | ']' | '/' | ' ' => 0.36,
        'm' | 'w' => 0.78,
        'M' | 'W' => 0.92,
        '0'..='9' => 0.50,
        '-' | '+' | '=' | '~' => 0.56,
        c if c.is_ascii_uppercase() => 0.70,
        c if c.is_ascii_lowercase() => 0.50,
        _ => 0.60,
    }
}

/// Measure text width and height in points.
pub fn measure_text(text: &str, size_pt: f64) -> TextMetrics {
    let width: f64 = text.chars().map(char_advance_em).sum::<f64>() * size_pt;
    TextMetrics { width, height: size_pt * 1.2, ascent: size_pt * 0.8 }
}
