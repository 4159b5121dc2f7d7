// Named docket registry

use crate::error::{Result, SwaggerError};
use docket_log::{debug, trace};
use docket_openapi::{Docket, SwaggerResource, swagger_resources};
use std::collections::HashMap;
use std::sync::Arc;

/// Dockets registered by name, in registration order.
///
/// Filled once at startup and read-only afterwards, so no lock is needed.
#[derive(Debug, Clone, Default)]
pub struct DocketRegistry {
    dockets: Vec<(String, Arc<Docket>)>,
    index: HashMap<String, usize>,
}

impl DocketRegistry {
    pub fn new() -> Self {
        debug!("Creating new docket registry");
        Self::default()
    }

    /// Register a docket under `name`. Names must be non-blank and unique.
    pub fn register_singleton(&mut self, name: &str, docket: Docket) -> Result<Arc<Docket>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SwaggerError::MissingDocketName);
        }
        if self.index.contains_key(name) {
            debug!(bean = name, "Docket name already taken");
            return Err(SwaggerError::DuplicateDocket(name.to_string()));
        }

        let docket = Arc::new(docket);
        self.index.insert(name.to_string(), self.dockets.len());
        self.dockets.push((name.to_string(), Arc::clone(&docket)));

        debug!(bean = name, group = ?docket.group_name, "Docket registered");
        Ok(docket)
    }

    /// Resolve a docket by name
    pub fn get(&self, name: &str) -> Option<Arc<Docket>> {
        let found = self.index.get(name).map(|&i| Arc::clone(&self.dockets[i].1));
        trace!(bean = name, found = found.is_some(), "Resolved docket");
        found
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.dockets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dockets.is_empty()
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dockets.iter().map(|(name, _)| name.as_str())
    }

    /// Dockets in registration order
    pub fn dockets(&self) -> impl Iterator<Item = &Arc<Docket>> {
        self.dockets.iter().map(|(_, docket)| docket)
    }

    /// Swagger UI group listing, one entry per docket in registration order
    pub fn swagger_resources(&self) -> Vec<SwaggerResource> {
        swagger_resources(self.dockets().map(Arc::as_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_openapi::DocumentationType;

    fn docket(group: &str) -> Docket {
        Docket::new(DocumentationType::Swagger2).group_name(group)
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = DocketRegistry::new();
        registry.register_singleton("users", docket("users")).unwrap();
        registry.register_singleton("orders", docket("orders")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("users"));
        assert_eq!(
            registry.get("orders").unwrap().group_name.as_deref(),
            Some("orders")
        );
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), ["users", "orders"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = DocketRegistry::new();
        registry.register_singleton("users", docket("users")).unwrap();
        let err = registry.register_singleton("users", docket("other")).unwrap_err();
        assert!(matches!(err, SwaggerError::DuplicateDocket(ref n) if n == "users"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut registry = DocketRegistry::new();
        assert!(matches!(
            registry.register_singleton("  ", docket("x")),
            Err(SwaggerError::MissingDocketName)
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_resources_in_registration_order() {
        let mut registry = DocketRegistry::new();
        registry.register_singleton("b", docket("b")).unwrap();
        registry.register_singleton("a", docket("a")).unwrap();
        let names: Vec<String> = registry
            .swagger_resources()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["b", "a"]);
    }
}
