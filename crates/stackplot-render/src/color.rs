use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a `#rrggbb` string (leading `#` optional).
    ///
    /// Returns `None` for anything that is not exactly six ASCII hex
    /// digits, including short forms like `#fff` and non-ASCII input.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b, a: 1.0 })
    }

    /// Infallible `#rrggbb` parse for built-in palette constants; malformed
    /// input yields black.
    pub fn hex(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or_default()
    }

    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_fill())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

// --- Palettes ---

/// ColorBrewer Set1 (8) followed by Set3 (12) — the default stacking palette.
pub const BREWER20: &[&str] = &[
    "#E41A1C", "#377EB8", "#4DAF4A", "#FF7F00", "#984EA3", "#A65628", "#F781BF", "#999999",
    "#8DD3C7", "#FFFFB3", "#BEBADA", "#FB8072", "#80B1D3", "#FDB462", "#B3DE69", "#FCCDE5",
    "#D9D9D9", "#BC80BD", "#CCEBC5", "#FFED6F",
];

pub const OKABE_ITO: &[&str] =
    &["#0072b2", "#d55e00", "#56b4e9", "#e69f00", "#f0e442", "#009e73", "#cc79a7"];

pub const TABLEAU10: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

pub fn palette_colors(name: &str) -> Vec<Color> {
    let strs = match name {
        "brewer20" => BREWER20,
        "okabe_ito" => OKABE_ITO,
        "tableau10" => TABLEAU10,
        _ => BREWER20,
    };
    strs.iter().map(|s| Color::hex(s)).collect()
}

/// Color for series `i`: wraps cyclically past the palette length.
pub fn series_color(palette: &[Color], i: usize) -> Color {
    palette[i % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        let c = Color::hex("#E41A1C");
        assert_eq!(c.r, 0xE4);
        assert_eq!(c.g, 0x1A);
        assert_eq!(c.b, 0x1C);
        assert!((c.a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert!(Color::parse_hex("#fff").is_none());
        assert!(Color::parse_hex("").is_none());
        assert!(Color::parse_hex("#zzzzzz").is_none());
        assert!(Color::parse_hex("#\u{e9}\u{e9}\u{e9}").is_none()); // 6 bytes, not ASCII
        assert!(Color::parse_hex("E41A1C").is_some());
    }

    #[test]
    fn hex_falls_back_to_black() {
        assert_eq!(Color::hex("#fff"), Color::rgb(0, 0, 0));
    }

    #[test]
    fn svg_fill_opaque() {
        assert_eq!(Color::rgb(228, 26, 28).to_svg_fill(), "#e41a1c");
    }

    #[test]
    fn svg_fill_alpha() {
        let c = Color::rgb(228, 26, 28).with_alpha(0.8);
        assert_eq!(c.to_svg_fill(), "rgba(228,26,28,0.800)");
    }

    #[test]
    fn palette_lookup() {
        assert_eq!(palette_colors("brewer20").len(), 20);
        assert_eq!(palette_colors("okabe_ito").len(), 7);
        assert_eq!(palette_colors("unknown").len(), 20);
    }

    #[test]
    fn series_color_wraps() {
        let p = palette_colors("brewer20");
        assert_eq!(series_color(&p, 0), series_color(&p, 20));
        assert_eq!(series_color(&p, 3), series_color(&p, 23));
    }
}
