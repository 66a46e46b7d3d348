//! Error types for copy-as-html

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for copy-as-html operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
///
/// Rendering itself never fails; these cover loading input, configuration
/// and language definitions, and command line handling.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Bad config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Bad language definition {}: {message}", path.display())]
    Language { path: PathBuf, message: String },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid {what} '{value}': use ASCII letters, digits, '-' and '_'")]
    InvalidClassName { what: &'static str, value: String },
}
