use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsreelError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}
