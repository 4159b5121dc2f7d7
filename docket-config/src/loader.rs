// Configuration file loaders

use crate::tree;
use crate::{ConfigError, Result};
use docket_log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    Yaml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }
}

/// Configuration file loader
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: &str) -> Result<Self> {
        let path_obj = Path::new(path);
        let ext = path_obj
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::UnknownFormat(path.to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::UnknownFormat(path.to_string()))?;

        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Load configuration from file
    pub fn load_file(&self, path: &str) -> Result<Value> {
        debug!(path, format = ?self.format, "Reading configuration file");
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        self.parse(&content)
    }

    /// Parse configuration from string
    pub fn parse(&self, content: &str) -> Result<Value> {
        let value = match self.format {
            FileFormat::Json => self.parse_json(content)?,
            FileFormat::Toml => self.parse_toml(content)?,
            FileFormat::Yaml => self.parse_yaml(content)?,
            FileFormat::Env => self.parse_env(content),
        };

        // An empty YAML document parses to null
        match value {
            Value::Null => Ok(Value::Object(serde_json::Map::new())),
            Value::Object(_) => Ok(value),
            other => Err(ConfigError::parse(
                self.format,
                format!("root must be a table, found {}", type_name(&other)),
            )),
        }
    }

    fn parse_json(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| ConfigError::parse(FileFormat::Json, e))
    }

    fn parse_toml(&self, content: &str) -> Result<Value> {
        let toml_value: toml::Value =
            toml::from_str(content).map_err(|e| ConfigError::parse(FileFormat::Toml, e))?;

        serde_json::to_value(&toml_value).map_err(|e| ConfigError::parse(FileFormat::Toml, e))
    }

    fn parse_yaml(&self, content: &str) -> Result<Value> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::parse(FileFormat::Yaml, e))
    }

    fn parse_env(&self, content: &str) -> Value {
        let mut root = Value::Object(serde_json::Map::new());

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim().trim_matches('"').trim_matches('\'');
                tree::insert(
                    &mut root,
                    &tree::env_key_to_path(key),
                    Value::String(value.to_string()),
                );
            }
        }

        root
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
