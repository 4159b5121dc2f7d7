//! Swagger UI integration: documentation group listing and spec export

use crate::docket::Docket;
use crate::error::{OpenApiError, Result};
use crate::spec::OpenApiSpec;
use serde::Serialize;

/// Path the generated documents are served under
pub const DEFAULT_DOCS_PATH: &str = "/v2/api-docs";

/// Group name shown for a docket registered without one
pub const DEFAULT_GROUP_NAME: &str = "default";

/// One entry of the group selector shown by Swagger UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerResource {
    pub name: String,
    pub url: String,
    pub swagger_version: String,
    pub location: String,
}

impl SwaggerResource {
    /// Resource for a docket, pointing at its document under `docs_path`
    pub fn for_docket(docket: &Docket, docs_path: &str) -> Self {
        let url = match &docket.group_name {
            Some(group) => format!("{docs_path}?group={group}"),
            None => docs_path.to_string(),
        };
        Self {
            name: docket
                .group_name
                .clone()
                .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string()),
            location: url.clone(),
            url,
            swagger_version: docket.documentation_type.version().to_string(),
        }
    }
}

/// Resources for every docket, in the order given
pub fn swagger_resources<'a>(dockets: impl IntoIterator<Item = &'a Docket>) -> Vec<SwaggerResource> {
    dockets
        .into_iter()
        .map(|docket| SwaggerResource::for_docket(docket, DEFAULT_DOCS_PATH))
        .collect()
}

/// Get the OpenAPI spec as JSON
pub fn spec_json(spec: &OpenApiSpec) -> Result<String> {
    serde_json::to_string_pretty(spec).map_err(|e| OpenApiError::Serialization(e.to_string()))
}

/// Get the OpenAPI spec as YAML
pub fn spec_yaml(spec: &OpenApiSpec) -> Result<String> {
    serde_yaml::to_string(spec).map_err(|e| OpenApiError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::OpenApiBuilder;
    use crate::docket::DocumentationType;

    #[test]
    fn test_resources_follow_docket_order() {
        let dockets = vec![
            Docket::new(DocumentationType::Swagger2).group_name("users"),
            Docket::new(DocumentationType::Swagger2).group_name("orders"),
        ];

        let resources = swagger_resources(&dockets);
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "users");
        assert_eq!(resources[0].url, "/v2/api-docs?group=users");
        assert_eq!(resources[1].name, "orders");
        assert_eq!(resources[1].swagger_version, "2.0");
    }

    #[test]
    fn test_ungrouped_docket_resource() {
        let docket = Docket::new(DocumentationType::Swagger2);
        let resource = SwaggerResource::for_docket(&docket, DEFAULT_DOCS_PATH);
        assert_eq!(resource.name, DEFAULT_GROUP_NAME);
        assert_eq!(resource.url, DEFAULT_DOCS_PATH);
        assert_eq!(resource.location, resource.url);
    }

    #[test]
    fn test_resource_json_names() {
        let docket = Docket::new(DocumentationType::Swagger2).group_name("users");
        let json = serde_json::to_value(SwaggerResource::for_docket(&docket, "/docs")).unwrap();
        assert_eq!(json["swaggerVersion"], "2.0");
        assert_eq!(json["url"], "/docs?group=users");
    }

    #[test]
    fn test_spec_json() {
        let spec = OpenApiBuilder::new("Test API", "1.0.0")
            .description("A test API")
            .build();

        let json = spec_json(&spec).unwrap();
        assert!(json.contains("Test API"));
        assert!(json.contains("1.0.0"));
    }

    #[test]
    fn test_spec_yaml() {
        let spec = OpenApiBuilder::new("Test API", "1.0.0")
            .description("A test API")
            .build();

        let yaml = spec_yaml(&spec).unwrap();
        assert!(yaml.contains("Test API"));
        assert!(yaml.contains("1.0.0"));
    }
}
