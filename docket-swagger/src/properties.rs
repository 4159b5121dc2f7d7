//! The `swagger` property schema
//!
//! Bound from the configuration tree with relaxed key naming: `license-url`,
//! `licenseUrl` and `license_url` all land on [`DocketInfo::license_url`].
//! Every field has a default, so an empty section binds cleanly.

use docket_config::{ConfigValidator, Validate, lenient};
use docket_openapi::{
    DocExpansion, HttpMethod, ModelRendering, OperationsSorter, ParameterType, TagsSorter,
    UiFilter,
};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Root key of the property tree
pub const PREFIX: &str = "swagger";

/// Tables whose keys are user-chosen names rather than property names
pub const VERBATIM_TABLES: &[&str] = &["docket"];

/// Contact details of a documentation group
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
}

/// Metadata and selection rules of one documentation group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocketInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub version: String,
    #[serde(deserialize_with = "lenient::string")]
    pub license: String,
    #[serde(deserialize_with = "lenient::string")]
    pub license_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub terms_of_service_url: String,
    #[serde(deserialize_with = "or_default")]
    pub contact: Contact,

    /// Module path handlers must live under; blank documents every handler
    #[serde(deserialize_with = "lenient::string")]
    pub base_package: String,
    /// Ant patterns of documented paths; empty means `/**`
    #[serde(deserialize_with = "lenient::string_list")]
    pub base_path: Vec<String>,
    /// Ant patterns removed from the documented paths
    #[serde(deserialize_with = "lenient::string_list")]
    pub exclude_path: Vec<String>,

    /// Unset and empty both mean "inherit the global list"
    pub global_operation_parameters: Option<Vec<GlobalOperationParameter>>,

    #[serde(deserialize_with = "lenient::string_list")]
    pub ignored_parameter_types: Vec<String>,
    /// Prefix prepended to documented paths
    #[serde(deserialize_with = "lenient::string")]
    pub path_mapping: String,
    /// `Source-Target` pairs separated by commas
    #[serde(deserialize_with = "lenient::string")]
    pub direct_model_substitutes: String,
}

/// A parameter added to every operation, matched across scopes by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlobalOperationParameter {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    /// Documented type name
    #[serde(deserialize_with = "lenient::string")]
    pub model_ref: String,
    #[serde(deserialize_with = "parameter_type")]
    pub parameter_type: Option<ParameterType>,
    /// Only a case-insensitive `"true"` (or boolean `true`) is true
    #[serde(deserialize_with = "lenient::truthy")]
    pub required: bool,
}

/// A response documented for every operation of one HTTP method
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlobalResponseMessageBody {
    #[serde(deserialize_with = "lenient::number")]
    pub code: u16,
    #[serde(deserialize_with = "lenient::string")]
    pub message: String,
    /// Documented response body type; blank means none
    #[serde(deserialize_with = "lenient::string")]
    pub model_ref: String,
}

/// Response messages per HTTP method
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlobalResponseMessage {
    #[serde(deserialize_with = "or_default")]
    pub post: Vec<GlobalResponseMessageBody>,
    #[serde(deserialize_with = "or_default")]
    pub get: Vec<GlobalResponseMessageBody>,
    #[serde(deserialize_with = "or_default")]
    pub put: Vec<GlobalResponseMessageBody>,
    #[serde(deserialize_with = "or_default")]
    pub patch: Vec<GlobalResponseMessageBody>,
    #[serde(deserialize_with = "or_default")]
    pub delete: Vec<GlobalResponseMessageBody>,
    #[serde(deserialize_with = "or_default")]
    pub head: Vec<GlobalResponseMessageBody>,
    #[serde(deserialize_with = "or_default")]
    pub options: Vec<GlobalResponseMessageBody>,
    #[serde(deserialize_with = "or_default")]
    pub trace: Vec<GlobalResponseMessageBody>,
}

impl GlobalResponseMessage {
    pub fn bucket(&self, method: HttpMethod) -> &[GlobalResponseMessageBody] {
        match method {
            HttpMethod::Post => &self.post,
            HttpMethod::Get => &self.get,
            HttpMethod::Put => &self.put,
            HttpMethod::Patch => &self.patch,
            HttpMethod::Delete => &self.delete,
            HttpMethod::Head => &self.head,
            HttpMethod::Options => &self.options,
            HttpMethod::Trace => &self.trace,
        }
    }
}

/// API-key authorization applied to matching paths
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Authorization {
    /// Security scheme identifier, also used as the security reference
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    /// Header carrying the key
    #[serde(deserialize_with = "lenient::string")]
    pub key_name: String,
    /// Paths the security context applies to
    #[serde(deserialize_with = "lenient::string")]
    pub auth_regex: String,
}

impl Default for Authorization {
    fn default() -> Self {
        Self {
            name: "Authorization".to_string(),
            key_name: "TOKEN".to_string(),
            auth_regex: "^.*$".to_string(),
        }
    }
}

/// Swagger UI display settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(deserialize_with = "lenient::string")]
    pub api_sorter: String,
    #[serde(deserialize_with = "lenient::bool")]
    pub json_editor: bool,
    #[serde(deserialize_with = "lenient::bool")]
    pub show_request_headers: bool,
    /// Comma-separated HTTP methods offered for "Try it out"
    #[serde(deserialize_with = "lenient::string")]
    pub submit_methods: String,
    /// Milliseconds
    #[serde(deserialize_with = "lenient::number")]
    pub request_timeout: u64,

    #[serde(deserialize_with = "lenient::option_bool")]
    pub deep_linking: Option<bool>,
    #[serde(deserialize_with = "lenient::option_bool")]
    pub display_operation_id: Option<bool>,
    #[serde(deserialize_with = "lenient::option_number")]
    pub default_models_expand_depth: Option<i32>,
    #[serde(deserialize_with = "lenient::option_number")]
    pub default_model_expand_depth: Option<i32>,
    #[serde(deserialize_with = "lenient::option_keyword")]
    pub default_model_rendering: Option<ModelRendering>,
    #[serde(deserialize_with = "lenient::bool")]
    pub display_request_duration: bool,
    #[serde(deserialize_with = "lenient::option_keyword")]
    pub doc_expansion: Option<DocExpansion>,
    #[serde(deserialize_with = "lenient::option_switch_or_text")]
    pub filter: Option<UiFilter>,
    #[serde(deserialize_with = "lenient::option_number")]
    pub max_displayed_tags: Option<i32>,
    #[serde(deserialize_with = "lenient::option_keyword")]
    pub operations_sorter: Option<OperationsSorter>,
    #[serde(deserialize_with = "lenient::option_bool")]
    pub show_extensions: Option<bool>,
    #[serde(deserialize_with = "lenient::option_keyword")]
    pub tags_sorter: Option<TagsSorter>,
    pub validator_url: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_sorter: "alpha".to_string(),
            json_editor: false,
            show_request_headers: true,
            submit_methods: "get,post,put,delete,patch".to_string(),
            request_timeout: 10_000,
            deep_linking: None,
            display_operation_id: None,
            default_models_expand_depth: None,
            default_model_expand_depth: None,
            default_model_rendering: None,
            display_request_duration: true,
            doc_expansion: None,
            filter: None,
            max_displayed_tags: None,
            operations_sorter: None,
            show_extensions: None,
            tags_sorter: None,
            validator_url: None,
        }
    }
}

impl UiConfig {
    /// Methods listed in `submit_methods`, in the order given. Unknown names
    /// are errors; blank entries are skipped.
    pub fn submit_methods(&self) -> docket_openapi::Result<Vec<HttpMethod>> {
        self.submit_methods
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

/// Named documentation groups in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocketGroups(Vec<(String, DocketInfo)>);

impl DocketGroups {
    pub fn new(groups: Vec<(String, DocketInfo)>) -> Self {
        Self(groups)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&DocketInfo> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, info)| info)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocketInfo)> {
        self.0.iter().map(|(name, info)| (name.as_str(), info))
    }
}

impl<'de> Deserialize<'de> for DocketGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = DocketGroups;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of documentation groups")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(DocketGroups::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(DocketGroups::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut groups: Vec<(String, DocketInfo)> = Vec::new();
                while let Some((name, info)) = map.next_entry::<String, DocketInfo>()? {
                    if groups.iter().any(|(existing, _)| *existing == name) {
                        return Err(de::Error::custom(format!(
                            "duplicate documentation group '{}'",
                            name
                        )));
                    }
                    groups.push((name, info));
                }
                Ok(DocketGroups(groups))
            }
        }

        deserializer.deserialize_any(GroupsVisitor)
    }
}

/// Everything under the `swagger` key
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwaggerProperties {
    /// The default group, read from the root of the section
    #[serde(flatten)]
    pub info: DocketInfo,

    /// Registry name of the docket when no groups are declared
    #[serde(deserialize_with = "lenient::string")]
    pub bean_name: String,
    #[serde(deserialize_with = "lenient::option_bool")]
    pub enabled: Option<bool>,
    pub docket: DocketGroups,
    #[serde(deserialize_with = "lenient::string")]
    pub host: String,
    #[serde(deserialize_with = "or_default")]
    pub ui_config: UiConfig,
    #[serde(deserialize_with = "lenient::bool")]
    pub apply_default_response_messages: bool,
    #[serde(deserialize_with = "or_default")]
    pub global_response_message: GlobalResponseMessage,
    #[serde(deserialize_with = "or_default")]
    pub authorization: Authorization,
}

impl Default for SwaggerProperties {
    fn default() -> Self {
        Self {
            info: DocketInfo::default(),
            bean_name: String::new(),
            enabled: None,
            docket: DocketGroups::default(),
            host: String::new(),
            ui_config: UiConfig::default(),
            apply_default_response_messages: true,
            global_response_message: GlobalResponseMessage::default(),
            authorization: Authorization::default(),
        }
    }
}

impl SwaggerProperties {
    /// Global parameter list, shared by every group
    pub fn global_operation_parameters(&self) -> &[GlobalOperationParameter] {
        self.info.global_operation_parameters.as_deref().unwrap_or(&[])
    }
}

impl Validate for SwaggerProperties {
    fn validate(&self) -> docket_config::Result<()> {
        for method in HttpMethod::ALL {
            for (index, body) in self.global_response_message.bucket(method).iter().enumerate() {
                let field = format!(
                    "global-response-message.{}[{}].code",
                    method.as_str().to_lowercase(),
                    index
                );
                ConfigValidator::in_range(body.code, 100, 599, &field)?;
            }
        }

        ConfigValidator::not_blank(&self.authorization.name, "authorization.name")?;
        ConfigValidator::not_blank(&self.authorization.key_name, "authorization.key-name")?;

        let ui = &self.ui_config;
        ConfigValidator::at_least(
            ui.default_models_expand_depth,
            -1,
            "ui-config.default-models-expand-depth",
        )?;
        ConfigValidator::at_least(
            ui.default_model_expand_depth,
            -1,
            "ui-config.default-model-expand-depth",
        )?;
        ConfigValidator::at_least(ui.max_displayed_tags, 0, "ui-config.max-displayed-tags")?;
        Ok(())
    }
}

/// `null` binds as the type's default
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parameter location, case-insensitive; blank is unset
fn parameter_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ParameterType>, D::Error> {
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match text.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "header" => Ok(Some(ParameterType::Header)),
        "query" => Ok(Some(ParameterType::Query)),
        "path" => Ok(Some(ParameterType::Path)),
        "body" => Ok(Some(ParameterType::Body)),
        "form" => Ok(Some(ParameterType::Form)),
        other => Err(de::Error::unknown_variant(
            other,
            &["header", "query", "path", "body", "form"],
        )),
    }
}
