// Environment variable loading

use crate::tree;
use crate::{ConfigError, Result};
use std::env;

/// Environment variable loader
///
/// Variable names map to dotted keys: the prefix and its separator are
/// stripped, the rest is lowercased and `__` marks a nesting level. With
/// prefix `APP`, `APP_SWAGGER__BEAN_NAME` becomes `swagger.bean_name`.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load matching environment variables as `(dotted key, value)` pairs
    pub fn load(&self) -> Vec<(String, String)> {
        self.collect(env::vars())
    }

    fn collect(&self, vars: impl Iterator<Item = (String, String)>) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = vars
            .filter_map(|(key, value)| {
                let name = match &self.prefix {
                    Some(prefix) => key.strip_prefix(prefix.as_str())?.strip_prefix('_')?,
                    None => key.as_str(),
                };
                if name.is_empty() {
                    return None;
                }
                Some((tree::env_key_to_path(name), value))
            })
            .collect();
        // env::vars has no stable order; keep insertion deterministic
        pairs.sort();
        pairs
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        };

        env::var(&full_key).map_err(|source| ConfigError::Env {
            name: full_key.clone(),
            source,
        })
    }

    /// Load with default value
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
