use crate::canvas::Canvas;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::primitives::TextStyle;

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Compute auto-margins from axis tick labels and config.
    pub fn auto(
        canvas: &Canvas,
        y_axis: &Axis,
        x_axis: &Axis,
        config: &PlotConfig,
        has_title: bool,
    ) -> Self {
        let tick_style = TextStyle { size: config.font.tick_size, ..Default::default() };
        let label_style = TextStyle { size: config.font.label_size, ..Default::default() };

        // Left margin: y tick labels + rotated axis label + padding.
        let mut left = 12.0;
        let max_tick_w = y_axis
            .tick_labels
            .iter()
            .map(|l| canvas.measure_text(l, &tick_style).width)
            .fold(0.0_f64, f64::max);
        left += max_tick_w + 8.0;
        if !y_axis.label.is_empty() {
            left += label_style.size + 6.0;
        }

        // Bottom margin: x tick labels + axis label + padding.
        let mut bottom = 12.0;
        bottom += tick_style.size + 6.0;
        if !x_axis.label.is_empty() {
            bottom += label_style.size + 6.0;
        }

        // Top margin: title space.
        let top = if has_title { config.font.title_size * 1.3 + 12.0 } else { 12.0 };

        let right = 12.0;

        let width = canvas.width - left - right;
        let height = canvas.height - top - bottom;

        Self { left, top, width: width.max(50.0), height: height.max(50.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_widens_top_margin() {
        let canvas = Canvas::new(648.0, 252.0, "serif");
        let config = PlotConfig::default();
        let x = Axis::linear(0.0, 6.0, 6).with_label("x");
        let y = Axis::linear(0.0, 10.0, 5).with_label("y");
        let with_title = PlotArea::auto(&canvas, &y, &x, &config, true);
        let without = PlotArea::auto(&canvas, &y, &x, &config, false);
        assert!(with_title.top > without.top);
    }

    #[test]
    fn wide_tick_labels_widen_left_margin() {
        let canvas = Canvas::new(648.0, 252.0, "serif");
        let config = PlotConfig::default();
        let x = Axis::linear(0.0, 6.0, 6);
        let narrow = Axis::linear(0.0, 8.0, 5);
        let wide = Axis::linear(0.0, 800000.0, 5);
        let a = PlotArea::auto(&canvas, &narrow, &x, &config, false);
        let b = PlotArea::auto(&canvas, &wide, &x, &config, false);
        assert!(b.left > a.left);
    }
}
