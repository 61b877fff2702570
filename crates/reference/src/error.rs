use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the reference datasets.
///
/// Queries against a loaded provider never fail; only loading does.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read {dataset} dataset from {path}: {source}")]
    Io {
        dataset: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {dataset} dataset: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{dataset} record stored under key {key:?} has code {code:?}")]
    KeyMismatch {
        dataset: &'static str,
        key: String,
        code: String,
    },
}
