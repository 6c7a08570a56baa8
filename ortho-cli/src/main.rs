//! # Ortho Lines
//!
//! Command-line generator for tiled orthogonal line art.

use clap::Parser;
use ortho_cli::CliArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ortho_cli=info,ortho_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    tracing::debug!(?args, "Parsed arguments");

    let summary = ortho_cli::run(&args)?;
    println!(
        "{} ({} paths, {} intersections, seed {})",
        summary.output.display(),
        summary.paths,
        summary.intersections,
        summary.seed
    );
    Ok(())
}
