use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure that aborts a run. Missing cards are not errors, they are
/// only logged.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unable to fetch NRDB card data: HTTP {0}")]
    Status(StatusCode),

    #[error("NRDB card data is empty")]
    EmptyCatalog,

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error at {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Not a usable image file name: {}", .0.display())]
    InvalidFileName(PathBuf),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
