// Configuration management for docket
//
// One nested tree per manager, filled from files, `.env` files and process
// environment, read back by dotted key or bound section by section onto
// serde structs with relaxed key naming.

pub mod config_service;
pub mod env;
pub mod error;
pub mod lenient;
pub mod loader;
pub mod tree;
pub mod validation;

pub use config_service::{ConfigService, ConfigServiceBuilder};
pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use docket_log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Main configuration manager
#[derive(Clone)]
pub struct ConfigManager {
    config: Arc<RwLock<Value>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    /// Create an empty configuration manager
    pub fn new() -> Self {
        Self::from_value(Value::Object(serde_json::Map::new()))
    }

    /// Create with environment variable prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            env_prefix: Some(prefix.into()),
            ..Self::new()
        }
    }

    /// Create from an already-built tree
    pub fn from_value(value: Value) -> Self {
        Self {
            config: Arc::new(RwLock::new(value)),
            env_prefix: None,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Value> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Value> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load configuration from environment variables
    pub fn load_env(&self) -> Result<()> {
        let loader = EnvLoader::new(self.env_prefix.clone());
        let pairs = loader.load();
        debug!(count = pairs.len(), prefix = ?self.env_prefix, "Loading environment variables");

        let mut config = self.write();
        for (key, value) in pairs {
            tree::insert(&mut config, &key, Value::String(value));
        }

        Ok(())
    }

    /// Load configuration from a `.env` file, then from the environment
    pub fn load_dotenv(&self, path: Option<&str>) -> Result<()> {
        if let Some(path) = path {
            dotenvy::from_path(path).map_err(|e| ConfigError::Read {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        } else {
            dotenvy::dotenv().ok(); // Ignore if .env doesn't exist
        }
        self.load_env()
    }

    /// Load configuration from file; later loads override earlier ones key by key
    pub fn load_file(&self, path: &str, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).load_file(path)?;
        self.merge_value(data);
        Ok(())
    }

    /// Load configuration from file, picking the format from its extension
    pub fn load_file_auto(&self, path: &str) -> Result<()> {
        let data = ConfigLoader::auto(path)?.load_file(path)?;
        self.merge_value(data);
        Ok(())
    }

    /// Load configuration from an in-memory document
    pub fn load_str(&self, content: &str, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).parse(content)?;
        self.merge_value(data);
        Ok(())
    }

    fn merge_value(&self, data: Value) {
        let mut config = self.write();
        tree::merge(&mut config, data);
    }

    /// Set a configuration value at a dotted key
    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        let mut config = self.write();
        tree::insert(&mut config, key, json_value);

        Ok(())
    }

    /// Get a configuration value at a dotted key
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let config = self.read();

        let value = tree::lookup(&config, key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        serde_json::from_value(value.clone()).map_err(|e| ConfigError::bind(key, e))
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Get a string value. Numbers and booleans are rendered as text.
    pub fn get_string(&self, key: &str) -> Result<String> {
        let config = self.read();
        match tree::lookup(&config, key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(other) => Err(ConfigError::bind(
                key,
                format!("expected a scalar, found {}", other),
            )),
            None => Err(ConfigError::KeyNotFound(key.to_string())),
        }
    }

    /// Get an integer value
    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get(key)
    }

    /// Get a boolean value
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    /// Get a float value
    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get(key)
    }

    /// Check if a dotted key exists
    pub fn has(&self, key: &str) -> bool {
        let config = self.read();
        tree::lookup(&config, key).is_some()
    }

    /// Get all top-level configuration keys
    pub fn keys(&self) -> Vec<String> {
        let config = self.read();
        match &*config {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Copy of the whole tree
    pub fn snapshot(&self) -> Value {
        self.read().clone()
    }

    /// Merge configuration from another manager; its values win
    pub fn merge(&self, other: &ConfigManager) -> Result<()> {
        let other_config = other.snapshot();
        self.merge_value(other_config);
        Ok(())
    }

    /// Bind the section at `key` onto `T` with relaxed key naming.
    ///
    /// A missing section binds as an empty table, so `T`'s defaults apply.
    pub fn bind<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.bind_with(key, &[])
    }

    /// Like [`bind`](Self::bind), keeping the keys of the listed tables verbatim.
    ///
    /// `verbatim` names tables (by canonical key) whose entries are user-chosen
    /// names rather than property names.
    pub fn bind_with<T: DeserializeOwned>(&self, key: &str, verbatim: &[&str]) -> Result<T> {
        let section = {
            let config = self.read();
            tree::lookup(&config, key)
                .cloned()
                .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
        };
        let relaxed = tree::relax_keys(section, verbatim);
        debug!(section = key, "Binding configuration section");

        serde_json::from_value(relaxed).map_err(|e| ConfigError::bind(key, e))
    }

    /// Bind a section and run its validation
    pub fn bind_validated<T: DeserializeOwned + Validate>(
        &self,
        key: &str,
        verbatim: &[&str],
    ) -> Result<T> {
        let bound: T = self.bind_with(key, verbatim)?;
        bound.validate()?;
        Ok(bound)
    }

    /// Bind the whole tree and validate it
    pub fn load_validated<T: DeserializeOwned + Validate>(&self) -> Result<T> {
        self.bind_validated("", &[])
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_set_and_get() {
        let manager = ConfigManager::new();
        manager.set("test_key", "test_value").unwrap();

        let value: String = manager.get("test_key").unwrap();
        assert_eq!(value, "test_value");
    }

    #[test]
    fn test_dotted_keys() {
        let manager = ConfigManager::new();
        manager.set("swagger.authorization.key_name", "X-TOKEN").unwrap();

        assert!(manager.has("swagger"));
        assert!(manager.has("swagger.authorization"));
        assert_eq!(
            manager.get_string("swagger.authorization.key_name").unwrap(),
            "X-TOKEN"
        );
        assert_eq!(manager.keys(), vec!["swagger".to_string()]);
    }

    #[test]
    fn test_get_or_default() {
        let manager = ConfigManager::new();

        let value: String = manager.get_or("missing_key", "default_value".to_string());
        assert_eq!(value, "default_value");
    }

    #[test]
    fn test_has_key() {
        let manager = ConfigManager::new();
        manager.set("existing_key", "value").unwrap();

        assert!(manager.has("existing_key"));
        assert!(!manager.has("missing_key"));
    }

    #[test]
    fn test_type_conversions() {
        let manager = ConfigManager::new();

        manager.set("string_key", "hello").unwrap();
        manager.set("int_key", 42i64).unwrap();
        manager.set("bool_key", true).unwrap();
        manager.set("float_key", 2.5).unwrap();

        assert_eq!(manager.get_string("string_key").unwrap(), "hello");
        assert_eq!(manager.get_int("int_key").unwrap(), 42);
        assert!(manager.get_bool("bool_key").unwrap());
        assert_eq!(manager.get_float("float_key").unwrap(), 2.5);
        assert_eq!(manager.get_string("int_key").unwrap(), "42");
    }

    #[test]
    fn test_get_string_rejects_tables() {
        let manager = ConfigManager::new();
        manager.set("swagger.title", "API").unwrap();
        assert!(manager.get_string("swagger").is_err());
        assert!(matches!(
            manager.get_string("nope"),
            Err(ConfigError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_later_loads_override() {
        let manager = ConfigManager::new();
        manager
            .load_str("swagger:\n  title: First\n  host: h1\n", FileFormat::Yaml)
            .unwrap();
        manager
            .load_str("[swagger]\ntitle = \"Second\"\n", FileFormat::Toml)
            .unwrap();

        assert_eq!(manager.get_string("swagger.title").unwrap(), "Second");
        assert_eq!(manager.get_string("swagger.host").unwrap(), "h1");
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Section {
        license_url: String,
        groups: std::collections::BTreeMap<String, Group>,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Group {
        base_package: String,
    }

    #[test]
    fn test_bind_relaxed_names() {
        let manager = ConfigManager::new();
        manager
            .load_str(
                r#"{"app": {"licenseUrl": "https://l", "groups": {"userApi": {"base-package": "users"}}}}"#,
                FileFormat::Json,
            )
            .unwrap();

        let section: Section = manager.bind_with("app", &["groups"]).unwrap();
        assert_eq!(section.license_url, "https://l");
        assert_eq!(section.groups["userApi"].base_package, "users");
    }

    #[test]
    fn test_bind_missing_section_uses_defaults() {
        let manager = ConfigManager::new();
        let section: Section = manager.bind("absent").unwrap();
        assert!(section.license_url.is_empty());
        assert!(section.groups.is_empty());
    }

    #[test]
    fn test_merge_managers() {
        let base = ConfigManager::new();
        base.set("a.b", 1).unwrap();
        let overlay = ConfigManager::new();
        overlay.set("a.c", 2).unwrap();

        base.merge(&overlay).unwrap();
        assert_eq!(base.get_int("a.b").unwrap(), 1);
        assert_eq!(base.get_int("a.c").unwrap(), 2);
    }
}
