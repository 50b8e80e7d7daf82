use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to create output directory: {}", .0.display())]
    DirectoryCreationFailed(PathBuf),

    #[error("Empty source file: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid keep threshold: {0}. Must be at least 0 and below 100")]
    InvalidThreshold(f64),

    #[error("Resize cap must be greater than zero")]
    InvalidMaxWidth,

    #[error("Output directory {} must not overlap the source directory {}", .0.display(), .1.display())]
    OverlappingRoots(PathBuf, PathBuf),
}

pub type Result<T> = std::result::Result<T, MirrorError>;
