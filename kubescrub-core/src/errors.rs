//! errors.rs - Custom error types for the kubescrub-core library.
//!
//! Per-file failures (`Decode`, `Encode`, `Io`) are recoverable: the file pass
//! reports them and moves on to the next file. `InvalidConfig` is raised while
//! loading a sanitizer configuration, before any file is touched.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by `kubescrub-core`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KubescrubError {
    #[error("{0}")]
    Decode(#[source] serde_yaml::Error),

    #[error("Failed to encode cleaned documents: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sanitizer configuration: {0}")]
    InvalidConfig(String),
}

impl KubescrubError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KubescrubError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, KubescrubError>;
