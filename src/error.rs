/// Error types shared by the content, config and asset layers.
use std::path::PathBuf;

/// Everything that can go wrong outside the UI loop
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid portfolio content: {0}")]
    Invalid(String),

    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Background task failed: {0}")]
    Task(String),
}

impl FolioError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FolioError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        FolioError::Json {
            origin: origin.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
