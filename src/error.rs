//! Error types for the network core and the host-side plugin loader.

use std::path::PathBuf;

/// Errors raised by network construction, inference and training.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NetworkError {
    #[error("unknown activation function: {0}")]
    UnknownActivation(String),
    #[error("invalid network configuration: {0}")]
    InvalidConfig(String),
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors raised while binding a native plugin.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("failed to load native library {}: {source}", .path.display())]
    LibraryNotFound {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("entry point `{symbol}` not found: {source}")]
    MissingEntryPoint {
        symbol: String,
        #[source]
        source: libloading::Error,
    },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
pub type PluginResult<T> = Result<T, PluginError>;
