// Configuration errors

use crate::loader::FileFormat;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration key not found: {0}")]
    KeyNotFound(String),

    #[error("Failed to read '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Cannot detect configuration format of '{0}'")]
    UnknownFormat(String),

    #[error("Invalid {format:?} configuration: {message}")]
    Parse { format: FileFormat, message: String },

    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },

    #[error("Cannot bind '{key}': {message}")]
    Bind { key: String, message: String },

    #[error("Cannot store value: {0}")]
    Serialize(String),

    #[error("Environment variable {name}: {source}")]
    Env {
        name: String,
        source: std::env::VarError,
    },
}

impl ConfigError {
    pub(crate) fn bind(key: &str, err: impl Display) -> Self {
        ConfigError::Bind {
            key: key.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(format: FileFormat, err: impl Display) -> Self {
        ConfigError::Parse {
            format,
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
