use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoDbError {
    #[error(transparent)]
    PostgresError(#[from] tokio_postgres::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    #[error("SQL script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("script statement {index} failed: {source}")]
    ScriptError {
        /// Zero-based position of the failing statement in the batch.
        index: usize,
        #[source]
        source: tokio_postgres::Error,
    },
}
