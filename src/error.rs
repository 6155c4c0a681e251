use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No image files found in directory: {}", .0.display())]
    NoImages(PathBuf),

    #[error("Failed to load image {}: {reason}", .path.display())]
    Image { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
