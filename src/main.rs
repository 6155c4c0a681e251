use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel::AppConfig;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "Autoplaying image carousel with a countdown ring")]
struct Cli {
    /// Directory holding the slide images
    image_directory: PathBuf,

    /// Configuration file (defaults to <config dir>/carousel/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Autoplay interval in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Shuffle slides instead of sorting them by file name
    #[arg(short, long)]
    shuffle: bool,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(interval_ms) = cli.interval_ms {
        config.carousel.interval_ms = interval_ms;
    }
    if let Some(fps) = cli.fps {
        config.window.fps = fps;
    }
    config.slides.shuffle |= cli.shuffle;
    config.carousel.validate()?;

    carousel::app::run(&config, &cli.image_directory)
        .with_context(|| format!("Slideshow failed for {}", cli.image_directory.display()))
}
