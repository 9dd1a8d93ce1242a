use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatermarkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid font file {path}: {reason}")]
    Font { path: PathBuf, reason: String },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    #[error("Font size {size} out of range ({min}..={max})")]
    InvalidFontSize { size: u32, min: u32, max: u32 },

    #[error("Unknown color name: {0}")]
    UnknownColor(String),

    #[error("Unknown font family: {0}")]
    UnknownFont(String),
}

pub type Result<T> = std::result::Result<T, WatermarkError>;
