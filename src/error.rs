use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("Malformed JSON in {}: {source}\nPlease validate your GeoJSON file for syntax errors.", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid GeoJSON document: {0}")]
    InvalidDocument(String),

    #[error("Invalid feature at index {index}: {reason}")]
    InvalidFeature { index: usize, reason: String },

    #[error("Allow-list must contain at least one property key")]
    EmptyAllowList,

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TrimError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrimError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrimError>;
