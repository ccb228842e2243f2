use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode analytics event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("event store unavailable: {0}")]
    Unavailable(String),
}
