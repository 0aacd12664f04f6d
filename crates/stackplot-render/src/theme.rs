use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    /// Serif publication look: 9"x3.5" figure, inward ticks, dotted grid.
    Paper,
    /// Sans-serif, no grid, square-ish figure.
    Minimal,
}

impl BuiltinTheme {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            _ => Self::Paper,
        }
    }

    pub fn base_config(self) -> PlotConfig {
        match self {
            Self::Paper => paper(),
            Self::Minimal => minimal(),
        }
    }
}

fn paper() -> PlotConfig {
    PlotConfig {
        theme: "paper".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        legend: LegendConfig::default(),
        stacked: StackedConfig::default(),
        palette: "brewer20".into(),
        output: OutputConfig::default(),
    }
}

fn minimal() -> PlotConfig {
    PlotConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 432.0, height: 324.0 },
        font: FontConfig { family: "Helvetica, Arial, sans-serif".into(), ..FontConfig::default() },
        grid: GridConfig { show: false, ..GridConfig::default() },
        ..paper()
    }
}
