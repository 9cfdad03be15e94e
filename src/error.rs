//! Error types for the chart pipeline

use thiserror::Error;

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a chart
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to build the HTTP client
    #[error("Client initialization failed: {0}")]
    InitializationError(String),

    /// Failed to download a source payload
    #[error("Failed to fetch {source_name} activity: {message}")]
    FetchError {
        source_name: &'static str,
        message: String,
    },

    /// A source payload did not have the expected shape
    #[error("Failed to parse {source_name} activity: {message}")]
    ParseError {
        source_name: &'static str,
        message: String,
    },

    /// Failed to render SVG or PNG output
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn fetch(source_name: &'static str, message: impl Into<String>) -> Self {
        Error::FetchError {
            source_name,
            message: message.into(),
        }
    }

    pub(crate) fn parse(source_name: &'static str, message: impl Into<String>) -> Self {
        Error::ParseError {
            source_name,
            message: message.into(),
        }
    }
}
