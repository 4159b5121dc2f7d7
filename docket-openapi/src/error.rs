//! Errors raised while assembling or exporting documentation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenApiError {
    #[error("Invalid path pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid path regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    #[error("Failed to serialize spec: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, OpenApiError>;
