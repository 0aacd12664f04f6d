use std::fmt::Write as FmtWrite;

use crate::primitives::*;
use crate::text::{measure_text, TextMetrics};

/// An SVG element stored for deferred rendering.
#[derive(Debug, Clone)]
enum SvgElement {
    Rect { x: f64, y: f64, w: f64, h: f64, style: Style },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, style: LineStyle },
    Polyline { points: Vec<(f64, f64)>, style: LineStyle },
    Text { x: f64, y: f64, content: String, style: TextStyle, rotate: Option<f64> },
}

/// Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72").
///
/// Elements pushed while a clip is active are emitted inside a `<g>` that
/// references the clip path.
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    font_family: String,
    elements: Vec<(Option<String>, SvgElement)>,
    defs: Vec<String>,
    clip_stack: Vec<String>,
    next_clip_id: usize,
}

impl Canvas {
    pub fn new(width: f64, height: f64, font_family: &str) -> Self {
        Self {
            width,
            height,
            font_family: font_family.to_string(),
            elements: Vec::new(),
            defs: Vec::new(),
            clip_stack: Vec::new(),
            next_clip_id: 0,
        }
    }

    // --- Drawing primitives ---

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.push(SvgElement::Rect { x, y, w, h, style: style.clone() });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.push(SvgElement::Line { x1, y1, x2, y2, style: style.clone() });
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        self.push(SvgElement::Polyline { points: points.to_vec(), style: style.clone() });
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: None,
        });
    }

    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: Some(angle),
        });
    }

    // --- Clip paths ---

    pub fn push_clip(&mut self, x: f64, y: f64, w: f64, h: f64) -> String {
        let id = format!("clip{}", self.next_clip_id);
        self.next_clip_id += 1;
        self.defs.push(format!(
            r#"<clipPath id="{id}"><rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" /></clipPath>"#
        ));
        self.clip_stack.push(id.clone());
        id
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    // --- Text measurement ---

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_text(content, style.size)
    }

    // --- SVG output ---

    fn push(&mut self, elem: SvgElement) {
        self.elements.push((self.clip_stack.last().cloned(), elem));
    }

    pub fn finish_svg(&self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )
        .unwrap();

        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for d in &self.defs {
                out.push_str(d);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }

        // Background (white)
        writeln!(out, r#"<rect width="{}" height="{}" fill="white" />"#, self.width, self.height)
            .unwrap();

        // Elements, grouping consecutive runs under the same clip path.
        let mut open_clip: Option<&str> = None;
        for (clip, elem) in &self.elements {
            if clip.as_deref() != open_clip {
                if open_clip.is_some() {
                    out.push_str("</g>\n");
                }
                if let Some(id) = clip.as_deref() {
                    writeln!(out, r#"<g clip-path="url(#{id})">"#).unwrap();
                }
                open_clip = clip.as_deref();
            }
            self.render_element(&mut out, elem);
        }
        if open_clip.is_some() {
            out.push_str("</g>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    fn render_element(&self, out: &mut String, elem: &SvgElement) {
        match elem {
            SvgElement::Rect { x, y, w, h, style } => {
                write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#)
                    .unwrap();
                write_style_attrs(out, style);
                out.push_str(" />\n");
            }
            SvgElement::Line { x1, y1, x2, y2, style } => {
                write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#)
                    .unwrap();
                write_line_attrs(out, style);
                out.push_str(" />\n");
            }
            SvgElement::Polyline { points, style } => {
                out.push_str(r#"<polyline points=""#);
                for (i, (x, y)) in points.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    write!(out, "{x:.2},{y:.2}").unwrap();
                }
                out.push('"');
                out.push_str(r#" fill="none""#);
                write_line_attrs(out, style);
                out.push_str(" />\n");
            }
            SvgElement::Text { x, y, content, style, rotate } => {
                write!(out, r#"<text x="{x:.2}" y="{y:.2}""#).unwrap();
                write!(out, r#" font-family="{}" font-size="{:.1}""#, self.font_family, style.size)
                    .unwrap();
                write!(out, r#" fill="{}""#, style.color.to_svg_fill()).unwrap();
                write!(out, r#" text-anchor="{}""#, style.anchor.as_str()).unwrap();
                write!(out, r#" dominant-baseline="{}""#, style.baseline.as_str()).unwrap();
                if style.weight == FontWeight::Bold {
                    out.push_str(r#" font-weight="bold""#);
                }
                if let Some(angle) = rotate {
                    write!(out, r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#).unwrap();
                }
                out.push('>');
                for ch in content.chars() {
                    match ch {
                        '<' => out.push_str("&lt;"),
                        '>' => out.push_str("&gt;"),
                        '&' => out.push_str("&amp;"),
                        '"' => out.push_str("&quot;"),
                        _ => out.push(ch),
                    }
                }
                out.push_str("</text>\n");
            }
        }
    }
}

fn write_style_attrs(out: &mut String, style: &Style) {
    if let Some(fill) = &style.fill {
        write!(out, r#" fill="{}""#, fill.to_svg_fill()).unwrap();
    } else {
        out.push_str(r#" fill="none""#);
    }
    if let Some(stroke) = &style.stroke {
        write!(out, r#" stroke="{}""#, stroke.to_svg_fill()).unwrap();
        write!(out, r#" stroke-width="{:.2}""#, style.stroke_width).unwrap();
    }
}

fn write_line_attrs(out: &mut String, style: &LineStyle) {
    write!(out, r#" stroke="{}""#, style.color.to_svg_fill()).unwrap();
    write!(out, r#" stroke-width="{:.2}""#, style.width).unwrap();
    if let Some(dash) = &style.dash {
        write!(out, r#" stroke-dasharray="{dash}""#).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn empty_canvas() {
        let c = Canvas::new(100.0, 50.0, "serif");
        let svg = c.finish_svg();
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("height=\"50\""));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn rect_rendering() {
        let mut c = Canvas::new(200.0, 100.0, "serif");
        c.rect(10.0, 20.0, 50.0, 30.0, &Style::filled(Color::hex("#ff0000")));
        let svg = c.finish_svg();
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(svg.contains("width=\"50.00\""));
    }

    #[test]
    fn text_uses_configured_family() {
        let mut c = Canvas::new(200.0, 100.0, "Georgia, serif");
        c.text(10.0, 20.0, "Events", &TextStyle::default());
        let svg = c.finish_svg();
        assert!(svg.contains("Events"));
        assert!(svg.contains("font-family=\"Georgia, serif\""));
    }

    #[test]
    fn clipped_elements_are_grouped() {
        let mut c = Canvas::new(200.0, 100.0, "serif");
        let id = c.push_clip(0.0, 0.0, 100.0, 100.0);
        c.line(0.0, 0.0, 10.0, 10.0, &LineStyle::default());
        c.pop_clip();
        c.line(0.0, 0.0, 20.0, 20.0, &LineStyle::default());
        let svg = c.finish_svg();
        assert!(svg.contains(&format!("clip-path=\"url(#{id})\"")));
        assert!(svg.contains("</g>"));
    }

    #[test]
    fn text_is_xml_escaped() {
        let mut c = Canvas::new(100.0, 100.0, "serif");
        c.text(0.0, 0.0, "a < b & c", &TextStyle::default());
        let svg = c.finish_svg();
        assert!(svg.contains("a &lt; b &amp; c"));
    }
}
