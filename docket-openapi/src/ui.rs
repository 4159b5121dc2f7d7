//! Swagger UI display options
//!
//! Serialized with the option names Swagger UI reads from its
//! `configuration/ui` endpoint. Unset options are omitted so the UI keeps its
//! own defaults.

use crate::error::{OpenApiError, Result};
use crate::service::HttpMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocExpansion {
    None,
    List,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRendering {
    Example,
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationsSorter {
    Alpha,
    Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagsSorter {
    Alpha,
}

/// Tag filter: on/off, or a filter expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UiFilter {
    Enabled(bool),
    Expression(String),
}

impl From<bool> for UiFilter {
    fn from(enabled: bool) -> Self {
        UiFilter::Enabled(enabled)
    }
}

impl From<String> for UiFilter {
    fn from(expression: String) -> Self {
        UiFilter::Expression(expression)
    }
}

/// Swagger UI display options
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_linking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_operation_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_models_expand_depth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model_expand_depth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model_rendering: Option<ModelRendering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_request_duration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_expansion: Option<DocExpansion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<UiFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_displayed_tags: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_sorter: Option<OperationsSorter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_sorter: Option<TagsSorter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_url: Option<String>,
    /// Lowercase HTTP methods the "Try it out" button is offered for
    pub supported_submit_methods: Vec<String>,
}

impl UiConfiguration {
    pub fn builder() -> UiConfigurationBuilder {
        UiConfigurationBuilder::default()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| OpenApiError::Serialization(e.to_string()))
    }
}

/// Builder for [`UiConfiguration`]. Every setter takes an `Option` so unset
/// properties can be passed straight through.
#[derive(Debug, Clone)]
pub struct UiConfigurationBuilder {
    config: UiConfiguration,
}

impl Default for UiConfigurationBuilder {
    fn default() -> Self {
        Self {
            config: UiConfiguration {
                supported_submit_methods: HttpMethod::ALL
                    .iter()
                    .map(|m| m.as_str().to_lowercase())
                    .collect(),
                ..UiConfiguration::default()
            },
        }
    }
}

impl UiConfigurationBuilder {
    pub fn deep_linking(mut self, value: Option<bool>) -> Self {
        self.config.deep_linking = value;
        self
    }

    pub fn display_operation_id(mut self, value: Option<bool>) -> Self {
        self.config.display_operation_id = value;
        self
    }

    pub fn default_models_expand_depth(mut self, value: Option<i32>) -> Self {
        self.config.default_models_expand_depth = value;
        self
    }

    pub fn default_model_expand_depth(mut self, value: Option<i32>) -> Self {
        self.config.default_model_expand_depth = value;
        self
    }

    pub fn default_model_rendering(mut self, value: Option<ModelRendering>) -> Self {
        self.config.default_model_rendering = value;
        self
    }

    pub fn display_request_duration(mut self, value: Option<bool>) -> Self {
        self.config.display_request_duration = value;
        self
    }

    pub fn doc_expansion(mut self, value: Option<DocExpansion>) -> Self {
        self.config.doc_expansion = value;
        self
    }

    pub fn filter(mut self, value: Option<UiFilter>) -> Self {
        self.config.filter = value;
        self
    }

    pub fn max_displayed_tags(mut self, value: Option<i32>) -> Self {
        self.config.max_displayed_tags = value;
        self
    }

    pub fn operations_sorter(mut self, value: Option<OperationsSorter>) -> Self {
        self.config.operations_sorter = value;
        self
    }

    pub fn show_extensions(mut self, value: Option<bool>) -> Self {
        self.config.show_extensions = value;
        self
    }

    pub fn tags_sorter(mut self, value: Option<TagsSorter>) -> Self {
        self.config.tags_sorter = value;
        self
    }

    pub fn validator_url(mut self, value: Option<String>) -> Self {
        self.config.validator_url = value;
        self
    }

    pub fn supported_submit_methods(mut self, methods: Vec<HttpMethod>) -> Self {
        self.config.supported_submit_methods = methods
            .iter()
            .map(|m| m.as_str().to_lowercase())
            .collect();
        self
    }

    pub fn build(self) -> UiConfiguration {
        self.config
    }
}
