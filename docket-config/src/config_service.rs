// Configuration service assembled from ordered sources

use crate::{ConfigManager, FileFormat, Result, Validate};
use docket_log::{debug, info};
use serde::de::DeserializeOwned;

/// A loaded configuration, ready to be bound section by section
#[derive(Clone, Default)]
pub struct ConfigService {
    manager: ConfigManager,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manager(manager: ConfigManager) -> Self {
        Self { manager }
    }

    pub fn builder() -> ConfigServiceBuilder {
        ConfigServiceBuilder::new()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.manager.get(key)
    }

    pub fn get_string(&self, key: &str) -> Result<String> {
        self.manager.get_string(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.manager.has(key)
    }

    /// Bind a section with relaxed key naming
    pub fn bind<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.manager.bind(key)
    }

    /// Bind a section and run its validation rules
    pub fn bind_validated<T: DeserializeOwned + Validate>(
        &self,
        key: &str,
        verbatim: &[&str],
    ) -> Result<T> {
        self.manager.bind_validated(key, verbatim)
    }

    pub fn manager(&self) -> &ConfigManager {
        &self.manager
    }

    pub fn into_manager(self) -> ConfigManager {
        self.manager
    }
}

#[derive(Debug, Clone)]
enum Source {
    Env,
    Dotenv(Option<String>),
    File(String, Option<FileFormat>),
}

/// Builder for [`ConfigService`]
///
/// Sources apply in the order they were added. A key set by a later source
/// replaces the same key from an earlier one; tables merge key by key.
#[derive(Debug, Clone, Default)]
pub struct ConfigServiceBuilder {
    prefix: Option<String>,
    sources: Vec<Source>,
}

impl ConfigServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only read environment variables starting with `PREFIX_`
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Read the process environment
    pub fn load_env(mut self) -> Self {
        self.sources.push(Source::Env);
        self
    }

    /// Read a `.env` file into the process environment, then the
    /// environment itself. Without a path a missing `./.env` is ignored.
    pub fn load_dotenv(mut self, path: Option<String>) -> Self {
        self.sources.push(Source::Dotenv(path));
        self
    }

    pub fn add_file(mut self, path: impl Into<String>, format: FileFormat) -> Self {
        self.sources.push(Source::File(path.into(), Some(format)));
        self
    }

    /// Add a file whose format follows from its extension
    pub fn add_file_auto(mut self, path: impl Into<String>) -> Self {
        self.sources.push(Source::File(path.into(), None));
        self
    }

    pub fn build(self) -> Result<ConfigService> {
        let manager = match self.prefix {
            Some(prefix) => ConfigManager::with_prefix(prefix),
            None => ConfigManager::new(),
        };

        for source in &self.sources {
            debug!(source = ?source, "Applying configuration source");
            match source {
                Source::Env => manager.load_env()?,
                Source::Dotenv(path) => manager.load_dotenv(path.as_deref())?,
                Source::File(path, Some(format)) => manager.load_file(path, *format)?,
                Source::File(path, None) => manager.load_file_auto(path)?,
            }
        }

        info!(sources = self.sources.len(), "Configuration loaded");
        Ok(ConfigService::from_manager(manager))
    }
}
