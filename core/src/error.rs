use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("HEIF encoding failed for {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
