//! SVG/PNG renderer for `stackplot` artifacts.
//!
//! Consumes a [`stackplot::StackedHistArtifact`] plus an immutable
//! [`config::PlotConfig`] and produces an SVG string, raw bytes, or a file.
//! All styling is carried by the config value passed to each call; nothing
//! is process-global.

pub mod canvas;
pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use std::path::Path;

use config::PlotConfig;
use stackplot::StackedHistArtifact;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("artifact error: {0}")]
    Artifact(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render a stacked-histogram artifact to an SVG string.
pub fn render_svg(artifact: &StackedHistArtifact, config: &PlotConfig) -> Result<String> {
    plots::stacked::render(artifact, config)
}

/// Render an artifact serialized as JSON.
pub fn render_svg_json(artifact_json: &str, config: &PlotConfig) -> Result<String> {
    let artifact: StackedHistArtifact = serde_json::from_str(artifact_json)?;
    render_svg(&artifact, config)
}

/// Render an artifact to bytes in the specified format (`"svg"` or `"png"`).
pub fn render_to_bytes(
    artifact: &StackedHistArtifact,
    format: &str,
    config: &PlotConfig,
) -> Result<Vec<u8>> {
    let svg = render_svg(artifact, config)?;
    match format {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        other => Err(RenderError::UnknownFormat(other.to_string())),
    }
}

/// Render an artifact to a file, with the format inferred from the extension.
pub fn render_to_file(
    artifact: &StackedHistArtifact,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    let bytes = render_to_bytes(artifact, ext, config)?;
    log::debug!("writing {} ({} bytes)", path.display(), bytes.len());
    std::fs::write(path, bytes)?;
    Ok(())
}
