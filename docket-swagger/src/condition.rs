//! Startup activation checks
//!
//! The module only activates when a property is set to something non-blank.
//! The property is looked up under both its underscored and its camel-case
//! spelling, so `swagger.bean_name` and `swagger.beanName` both count.

use docket_config::{ConfigManager, tree};
use docket_log::debug;
use heck::ToLowerCamelCase;

/// Result of an activation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutcome {
    pub matched: bool,
    pub message: String,
}

impl ConditionOutcome {
    pub fn matched(message: impl Into<String>) -> Self {
        Self {
            matched: true,
            message: message.into(),
        }
    }

    pub fn no_match(message: impl Into<String>) -> Self {
        Self {
            matched: false,
            message: message.into(),
        }
    }
}

/// `swagger.beanName` → `swagger.bean_name`
pub fn underscore_name(name: &str) -> String {
    tree::canonical_key(name)
}

/// `swagger.bean_name` → `swagger.beanName`
pub fn camel_case_name(name: &str) -> String {
    tree::segments(name)
        .map(|segment| segment.to_lower_camel_case())
        .collect::<Vec<_>>()
        .join(".")
}

/// Matches when `name` holds a non-blank value in either spelling
pub fn property_not_empty(config: &ConfigManager, name: &str) -> ConditionOutcome {
    for key in [underscore_name(name), camel_case_name(name)] {
        let value = config.get_string(&key).unwrap_or_default();
        if !value.trim().is_empty() {
            debug!(property = %key, "Activation property found");
            return ConditionOutcome::matched(format!("found property '{}'", key));
        }
    }
    ConditionOutcome::no_match(format!("property '{}' is not set", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_conversions() {
        assert_eq!(underscore_name("swagger.beanName"), "swagger.bean_name");
        assert_eq!(underscore_name("swagger.bean_name"), "swagger.bean_name");
        assert_eq!(underscore_name("swagger.uiConfig.deepLinking"), "swagger.ui_config.deep_linking");
        assert_eq!(camel_case_name("swagger.bean_name"), "swagger.beanName");
        assert_eq!(camel_case_name("swagger.beanName"), "swagger.beanName");
        assert_eq!(camel_case_name("swagger.bean-name"), "swagger.beanName");
        assert_eq!(camel_case_name("swagger.ui_config.deep_linking"), "swagger.uiConfig.deepLinking");
    }

    #[test]
    fn test_either_spelling_matches() {
        let underscored = ConfigManager::from_value(json!({"swagger": {"bean_name": "api"}}));
        assert!(property_not_empty(&underscored, "swagger.beanName").matched);

        let camel = ConfigManager::from_value(json!({"swagger": {"beanName": "api"}}));
        assert!(property_not_empty(&camel, "swagger.beanName").matched);
    }

    #[test]
    fn test_absent_empty_or_blank_does_not_match() {
        for tree in [
            json!({}),
            json!({"swagger": {"bean_name": ""}}),
            json!({"swagger": {"beanName": "   "}}),
            json!({"swagger": {"bean_name": null}}),
        ] {
            let config = ConfigManager::from_value(tree);
            let outcome = property_not_empty(&config, "swagger.beanName");
            assert!(!outcome.matched);
            assert!(outcome.message.contains("swagger.beanName"));
        }
    }
}
