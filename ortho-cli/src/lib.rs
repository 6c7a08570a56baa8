//! # Ortho Lines CLI
//!
//! Generates a tiled orthogonal-line artwork and writes it to disk.
//!
//! ## Usage
//!
//! ```bash
//! ortho-lines --tiles 9 --paths 4 --seed 7 --output art.png --scale 4
//! ortho-lines --config settings.json --output art.svg
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliArgs::resolve_config` - JSON file values overridden by flags
//! - `run` - Orchestrate, export, write the file, report a `RunSummary`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use ortho_core::{Orchestrator, OrthoConfig, ViolationPolicy};
use ortho_renderer::{ArtworkExporter, ExportConfig, ExportFormat, StyleConfig};
use serde::Serialize;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SVG document.
    Svg,
    /// PNG image.
    Png,
    /// JSON dump of the generated geometry.
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Svg => Self::Svg,
            OutputFormat::Png => Self::Png,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Command-line arguments for ortho-lines.
#[derive(Debug, Clone, Parser)]
#[command(name = "ortho-lines")]
#[command(about = "Generate orthogonal line art on a grid of tiles")]
#[command(version)]
pub struct CliArgs {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tile width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Tile height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Border margin inside each tile
    #[arg(long)]
    pub padding: Option<u32>,

    /// Shortest step a path may take
    #[arg(long)]
    pub min_distance: Option<u32>,

    /// Maximum counted growth steps per path
    #[arg(long)]
    pub step_cap: Option<u32>,

    /// Paths per tile
    #[arg(long = "paths")]
    pub paths_per_tile: Option<usize>,

    /// Number of tiles (a perfect square)
    #[arg(long)]
    pub tiles: Option<usize>,

    /// Snap coordinates to multiples of this value
    #[arg(long)]
    pub snap: Option<u32>,

    /// Base seed for reproducible output
    #[arg(long, env = "ORTHO_SEED")]
    pub seed: Option<u64>,

    /// Abort the run when a path intersects itself instead of truncating it
    #[arg(long)]
    pub hard_fail: bool,

    /// Output file
    #[arg(long, short, default_value = "ortho-lines.svg")]
    pub output: PathBuf,

    /// Output format (inferred from the output extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Scale factor for the rendered image
    #[arg(long, default_value = "1.0")]
    pub scale: f32,

    /// Do not draw tile borders
    #[arg(long)]
    pub no_borders: bool,
}

impl CliArgs {
    /// Build the generation settings: defaults, then the config file, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or the
    /// merged settings are invalid.
    pub fn resolve_config(&self) -> anyhow::Result<OrthoConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str::<OrthoConfig>(&json)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => OrthoConfig::default(),
        };

        override_with(&mut config.width, self.width);
        override_with(&mut config.height, self.height);
        override_with(&mut config.padding, self.padding);
        override_with(&mut config.min_distance, self.min_distance);
        override_with(&mut config.step_cap, self.step_cap);
        override_with(&mut config.paths_per_tile, self.paths_per_tile);
        override_with(&mut config.tiles, self.tiles);
        if self.snap.is_some() {
            config.snap = self.snap;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.hard_fail {
            config.policy = ViolationPolicy::HardFail;
        }

        config.validate()?;
        Ok(config)
    }

    /// The export format: `--format`, else the output file's extension.
    ///
    /// # Errors
    ///
    /// Returns an error if neither names a supported format.
    pub fn resolve_format(&self) -> anyhow::Result<ExportFormat> {
        if let Some(format) = self.format {
            return Ok(format.into());
        }
        match ExportFormat::from_path(&self.output) {
            Some(format) => Ok(format),
            None => bail!(
                "cannot infer output format from {}; pass --format",
                self.output.display()
            ),
        }
    }

    /// Renderer settings for this invocation.
    #[must_use]
    pub fn export_config(&self) -> ExportConfig {
        let style = StyleConfig {
            tile_border: if self.no_borders {
                None
            } else {
                StyleConfig::default().tile_border
            },
            ..StyleConfig::default()
        };
        ExportConfig {
            scale: self.scale,
            style,
        }
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// File written.
    pub output: PathBuf,
    /// Seed the artwork was generated from.
    pub seed: u64,
    /// Tiles generated.
    pub tiles: usize,
    /// Paths generated across all tiles.
    pub paths: usize,
    /// Crossings reported across all tiles.
    pub intersections: usize,
    /// Bytes written.
    pub bytes: usize,
}

/// Generate, render and write one artwork.
///
/// # Errors
///
/// Returns an error if the settings are invalid, a path fails under
/// `--hard-fail`, rendering fails, or the output cannot be written.
pub fn run(args: &CliArgs) -> anyhow::Result<RunSummary> {
    let config = args.resolve_config()?;
    let format = args.resolve_format()?;

    if config.seed.is_none() {
        tracing::info!("No seed given; drawing a random one");
    }

    let artwork = Orchestrator::new(config)?.run()?;
    let bytes = ArtworkExporter::new(args.export_config()).export(&artwork, format)?;
    write_output(&args.output, &bytes)?;

    let summary = RunSummary {
        output: args.output.clone(),
        seed: artwork.seed,
        tiles: artwork.tiles.len(),
        paths: artwork.path_count(),
        intersections: artwork.intersection_count(),
        bytes: bytes.len(),
    };
    tracing::info!(
        output = %summary.output.display(),
        format = format.extension(),
        seed = summary.seed,
        bytes = summary.bytes,
        "Artwork written"
    );
    Ok(summary)
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let argv = std::iter::once("ortho-lines").chain(extra.iter().copied());
        CliArgs::try_parse_from(argv).expect("parse")
    }

    #[test]
    fn test_defaults_match_core_defaults() {
        let parsed = args(&[]);
        let config = parsed.resolve_config().expect("config");
        assert_eq!(
            OrthoConfig {
                seed: parsed.seed,
                ..OrthoConfig::default()
            },
            config
        );
        assert_eq!(parsed.output, PathBuf::from("ortho-lines.svg"));
        assert!((parsed.scale - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = args(&[
            "--width", "300", "--tiles", "9", "--paths", "5", "--snap", "10", "--hard-fail",
            "--seed", "4",
        ])
        .resolve_config()
        .expect("config");
        assert_eq!(config.width, 300);
        assert_eq!(config.tiles, 9);
        assert_eq!(config.paths_per_tile, 5);
        assert_eq!(config.snap, Some(10));
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.policy, ViolationPolicy::HardFail);
    }

    #[test]
    fn test_invalid_tiles_rejected() {
        let err = args(&["--tiles", "3"]).resolve_config().unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_format_inference() {
        assert_eq!(
            args(&["--output", "a.png"]).resolve_format().expect("png"),
            ExportFormat::Png
        );
        assert_eq!(
            args(&["--output", "a.png", "--format", "json"])
                .resolve_format()
                .expect("json"),
            ExportFormat::Json
        );
        assert!(args(&["--output", "a.bmp"]).resolve_format().is_err());
    }

    #[test]
    fn test_no_borders_drops_border_colour() {
        assert!(args(&["--no-borders"]).export_config().style.tile_border.is_none());
        assert!(args(&[]).export_config().style.tile_border.is_some());
    }
}
