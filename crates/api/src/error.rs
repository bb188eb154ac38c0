//! Startup error types.

use thiserror::Error;

/// Errors that abort the process before or while the server is listening.
#[derive(Debug, Error)]
pub enum StartupError {
    /// `AUTH_TOKEN` is absent or empty.
    #[error("AUTH_TOKEN env variable not found")]
    MissingAuthToken,

    /// The settings file exists but could not be read or parsed.
    #[error("Error loading env file: {0}")]
    EnvFile(#[from] dotenv::Error),

    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type for startup operations.
pub type Result<T> = std::result::Result<T, StartupError>;
