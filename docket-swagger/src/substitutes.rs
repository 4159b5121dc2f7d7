//! Known documentation types and model substitute parsing

use crate::error::{Result, SwaggerError};
use docket_openapi::ModelSubstitute;
use std::collections::{BTreeSet, HashSet};

const ENTRY_DELIMITER: char = ',';
const PAIR_DELIMITER: char = '-';

/// Primitive names every catalog knows
const BUILTIN_TYPES: &[&str] = &[
    // Rust
    "bool", "char", "str", "String", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
    "u32", "u64", "u128", "usize", "f32", "f64",
    // documentation primitives
    "string", "boolean", "integer", "int", "long", "float", "double", "number", "byte", "date",
    "datetime", "file", "object", "uuid",
];

/// Type names that may appear in substitutes and ignored parameter types
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    types: BTreeSet<String>,
}

impl TypeCatalog {
    /// Catalog holding only the built-in primitive names
    pub fn new() -> Self {
        Self {
            types: BUILTIN_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Add application model names
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(models.into_iter().map(Into::into));
        self
    }

    pub fn register(&mut self, model: impl Into<String>) {
        self.types.insert(model.into());
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    /// Fail unless `type_name` is known
    pub fn resolve(&self, type_name: &str) -> Result<String> {
        if self.contains(type_name) {
            Ok(type_name.to_string())
        } else {
            Err(SwaggerError::TypeNotFound(type_name.to_string()))
        }
    }

    /// Resolve every ignored parameter type, trimmed
    pub fn resolve_all(&self, type_names: &[String]) -> Result<Vec<String>> {
        type_names.iter().map(|t| self.resolve(t.trim())).collect()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `"Source-Target,Source2-Target2"` into substitutes.
///
/// A blank string yields none. Each entry must split into exactly two
/// non-empty names, a source may appear once, and both names must be known
/// to `catalog`.
pub fn parse_model_substitutes(input: &str, catalog: &TypeCatalog) -> Result<Vec<ModelSubstitute>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut seen = HashSet::new();
    let mut substitutes = Vec::new();
    for entry in input.split(ENTRY_DELIMITER) {
        let entry = entry.trim();
        let mut parts = entry.split(PAIR_DELIMITER).map(str::trim);
        let (Some(original), Some(substitute), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(SwaggerError::unsupported(
                entry,
                format!("expected exactly one '{}' between two type names", PAIR_DELIMITER),
            ));
        };
        if original.is_empty() || substitute.is_empty() {
            return Err(SwaggerError::unsupported(entry, "type names cannot be empty"));
        }
        if !seen.insert(original) {
            return Err(SwaggerError::unsupported(
                entry,
                format!("'{}' is substituted more than once", original),
            ));
        }

        substitutes.push(ModelSubstitute::new(
            catalog.resolve(original)?,
            catalog.resolve(substitute)?,
        ));
    }
    Ok(substitutes)
}
