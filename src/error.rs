use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("palette has no entries")]
    Empty,
    #[error("palette name '{0}' appears more than once")]
    DuplicateName(String),
    #[error("palette name '{0}' is not usable as a file name")]
    InvalidName(String),
    #[error("palette file does not have valid extension (must be .json, .ron or .yaml)")]
    ExtensionError,
    #[error("could not parse palette file\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse palette file\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not parse palette file\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("failed to read palette file\n{0}")]
    FileReadError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("base texture not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("could not decode image\n{0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to save image '{}'\n{source}", path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to prepare output directory\n{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("glow size must be greater than zero")]
    Size,
    #[error("thread count must be greater than zero")]
    Threads,
    #[error("invalid palette, {0}")]
    Palette(#[from] PaletteError),
    #[error("{0}")]
    Texture(#[from] TextureError),
    #[error("{failed} texture set(s) could not be generated")]
    Incomplete { failed: usize },
}
