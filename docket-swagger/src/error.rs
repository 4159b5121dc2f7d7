//! Errors raised while building dockets from properties

use docket_config::ConfigError;
use docket_openapi::OpenApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwaggerError {
    #[error("Type not found: {0}")]
    TypeNotFound(String),

    #[error("Unsupported model substitute '{entry}': {reason}")]
    UnsupportedSubstitute { entry: String, reason: String },

    #[error("Docket already registered under name '{0}'")]
    DuplicateDocket(String),

    #[error("Docket registered without a name")]
    MissingDocketName,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Documentation error: {0}")]
    OpenApi(#[from] OpenApiError),
}

impl SwaggerError {
    pub(crate) fn unsupported(entry: &str, reason: impl Into<String>) -> Self {
        SwaggerError::UnsupportedSubstitute {
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SwaggerError>;
