//! Startup and serving error types.

use thiserror::Error;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The public listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The bound address of a listener could not be read.
    #[error("Failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),

    /// The public listener stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("Failed to install metrics recorder: {0}")]
    MetricsRecorder(String),
}

/// Convenience type alias for server results.
pub type Result<T> = std::result::Result<T, ServerError>;
