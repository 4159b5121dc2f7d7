// Configuration validation

use crate::{ConfigError, Result};

/// Trait for validating bound configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Configuration validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty (whitespace counts as empty)
    pub fn not_blank(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::invalid(field, "cannot be empty"));
        }
        Ok(())
    }

    /// Validate that a number is within an inclusive range
    pub fn in_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<()> {
        if value < min || value > max {
            return Err(ConfigError::invalid(
                field,
                format!("must be between {} and {}, got {}", min, max, value),
            ));
        }
        Ok(())
    }

    /// Validate that an optional number, when set, is at least `min`
    pub fn at_least(value: Option<i32>, min: i32, field: &str) -> Result<()> {
        match value {
            Some(v) if v < min => Err(ConfigError::invalid(
                field,
                format!("must be {} or greater, got {}", min, v),
            )),
            _ => Ok(()),
        }
    }
}
