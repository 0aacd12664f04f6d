use serde::Deserialize;

use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Immutable per-call plot configuration (YAML or programmatic).
///
/// Passed explicitly into every render; there is no process-global style
/// state.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub legend: LegendConfig,
    pub stacked: StackedConfig,
    pub palette: String,
    pub output: OutputConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        BuiltinTheme::Paper.base_config()
    }
}

impl PlotConfig {
    pub fn palette_colors(&self) -> Vec<Color> {
        crate::color::palette_colors(&self.palette)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 648.0,  // 9.0" * 72
            height: 252.0, // 3.5" * 72
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub title_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "'CMU Serif', 'Computer Modern', Georgia, serif".into(),
            size: 10.0,
            label_size: 11.0,
            tick_size: 8.5,
            title_size: 12.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub tick_length: f64,
    pub minor_tick_length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: "in".into(),
            show_top_ticks: true,
            show_right_ticks: true,
            tick_length: 4.0,
            minor_tick_length: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub minor: bool,
    pub color: Color,
    pub alpha: f64,
    pub width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, minor: true, color: Color::hex("#808080"), alpha: 0.5, width: 0.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub frame: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { frame: false }
    }
}

/// Knobs specific to the stacked-histogram plot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StackedConfig {
    pub bar_alpha: f64,
    pub show_outline: bool,
    pub outline_color: Color,
    pub outline_width: f64,
}

impl Default for StackedConfig {
    fn default() -> Self {
        Self {
            bar_alpha: 0.8,
            show_outline: true,
            outline_color: Color::rgb(0, 0, 0),
            outline_width: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: "svg".into(), dpi: 400 }
    }
}

/// Section-level overrides parsed from user YAML. Sections that are absent
/// keep the values of the resolved theme base.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlotConfigOverlay {
    theme: Option<String>,
    figure: Option<FigureConfig>,
    font: Option<FontConfig>,
    axes: Option<AxesConfig>,
    grid: Option<GridConfig>,
    legend: Option<LegendConfig>,
    stacked: Option<StackedConfig>,
    palette: Option<String>,
    output: Option<OutputConfig>,
}

/// Resolve a PlotConfig from an optional YAML string.
/// Priority: user YAML overrides → theme base config.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<PlotConfig> {
    let Some(yaml) = user_yaml else {
        return Ok(PlotConfig::default());
    };
    let overlay: PlotConfigOverlay =
        serde_yaml_ng::from_str(yaml).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    let theme = BuiltinTheme::parse(overlay.theme.as_deref().unwrap_or_default());
    let mut config = theme.base_config();
    if let Some(figure) = overlay.figure {
        config.figure = figure;
    }
    if let Some(font) = overlay.font {
        config.font = font;
    }
    if let Some(axes) = overlay.axes {
        config.axes = axes;
    }
    if let Some(grid) = overlay.grid {
        config.grid = grid;
    }
    if let Some(legend) = overlay.legend {
        config.legend = legend;
    }
    if let Some(stacked) = overlay.stacked {
        config.stacked = stacked;
    }
    if let Some(palette) = overlay.palette {
        config.palette = palette;
    }
    if let Some(output) = overlay.output {
        config.output = output;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_cosmetics() {
        let c = PlotConfig::default();
        assert_eq!(c.figure.width, 648.0);
        assert_eq!(c.figure.height, 252.0);
        assert_eq!(c.output.dpi, 400);
        assert_eq!(c.axes.tick_direction, "in");
        assert!(!c.legend.frame);
        assert!((c.stacked.bar_alpha - 0.8).abs() < 1e-12);
        assert_eq!(c.palette_colors().len(), 20);
    }

    #[test]
    fn yaml_overlay() {
        let c = resolve_config(Some("output:\n  dpi: 150\npalette: tableau10\n")).unwrap();
        assert_eq!(c.output.dpi, 150);
        assert_eq!(c.palette_colors().len(), 10);
        // Untouched sections keep their defaults.
        assert_eq!(c.figure.width, 648.0);
    }

    #[test]
    fn theme_key_selects_base_config() {
        let c = resolve_config(Some("theme: minimal\n")).unwrap();
        assert_eq!(c.theme, "minimal");
        assert!(!c.grid.show);
        assert_eq!(c.figure.width, 432.0);
    }

    #[test]
    fn overrides_apply_on_top_of_theme_base() {
        let c = resolve_config(Some("theme: minimal\noutput:\n  dpi: 96\n")).unwrap();
        assert_eq!(c.output.dpi, 96);
        // Base still comes from the minimal theme.
        assert!(!c.grid.show);
        assert_eq!(c.font.family, "Helvetica, Arial, sans-serif");
    }

    #[test]
    fn bad_yaml_is_a_config_error() {
        let err = resolve_config(Some(": not yaml")).unwrap_err();
        assert!(matches!(err, crate::RenderError::Config(_)));
    }

    #[test]
    fn short_hex_color_is_a_config_error() {
        let err = resolve_config(Some("grid:\n  color: \"#fff\"\n")).unwrap_err();
        assert!(matches!(err, crate::RenderError::Config(_)));
    }
}
