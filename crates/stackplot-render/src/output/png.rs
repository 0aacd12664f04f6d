use crate::RenderError;

/// Convert an SVG string to PNG bytes at the given DPI.
///
/// Text is rasterized with whatever the system font database provides; the
/// SVG itself carries the serif family stack.
pub fn svg_to_png(svg: &str, dpi: u32) -> crate::Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Png(e.to_string()))?;

    let scale = dpi as f32 / 72.0;
    let size = tree.size();
    let w = (size.width() * scale).ceil() as u32;
    let h = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| RenderError::Png("failed to create pixmap".into()))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| RenderError::Png(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_magic_bytes() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="72" height="36"><rect width="72" height="36" fill="white"/></svg>"#;
        let bytes = svg_to_png(svg, 144).expect("png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn dpi_scales_pixel_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="72" height="72"></svg>"#;
        // 72pt at 400 dpi -> 400px; width is stored big-endian at offset 16.
        let bytes = svg_to_png(svg, 400).expect("png");
        let w = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        assert_eq!(w, 400);
    }
}
