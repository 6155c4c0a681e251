use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub slides: SlidesConfig,
}

/// Timing knobs of the carousel controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay cycle length in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// How long an outgoing slide keeps the `prev` role
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Stroke length of the countdown ring
    #[serde(default = "default_ring_circumference")]
    pub ring_circumference: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            transition_ms: default_transition_ms(),
            ring_circumference: default_ring_circumference(),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::Config("carousel.interval_ms must be greater than zero".into()));
        }
        if self.ring_circumference.is_nan() || self.ring_circumference <= 0.0 {
            return Err(Error::Config("carousel.ring_circumference must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fps: default_fps(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlidesConfig {
    /// Randomise slide order instead of sorting by file name
    #[serde(default)]
    pub shuffle: bool,
}

fn default_interval_ms() -> u64 {
    INTERVAL.as_millis() as u64
}

fn default_transition_ms() -> u64 {
    TRANSITION.as_millis() as u64
}

fn default_ring_circumference() -> f32 {
    TIMER_CIRCUMFERENCE
}

fn default_width() -> i32 {
    WINDOW_WIDTH
}

fn default_height() -> i32 {
    WINDOW_HEIGHT
}

fn default_fps() -> u32 {
    FPS
}

fn default_title() -> String {
    "Featured Carousel".to_string()
}

impl AppConfig {
    /// Load from `path`, or from the default location, or fall back to defaults.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.carousel.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml(&content)
    }

    /// `<config_dir>/carousel/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("carousel")
            .join("config.toml")
    }
}
