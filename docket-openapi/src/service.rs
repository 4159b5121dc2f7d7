//! Documentation descriptors: the values a docket carries about the API surface

use crate::error::{OpenApiError, Result};
use crate::paths::PathSelector;
use crate::spec::{ApiKeyLocation, ParameterLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP methods that can carry global response messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
    Get,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Post,
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = OpenApiError;

    fn from_str(s: &str) -> Result<Self> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OpenApiError::UnknownMethod(s.to_string()))
    }
}

/// Reference to a documented type by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelRef {
    pub type_name: String,
}

impl ModelRef {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

/// Where an operation parameter travels in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Header,
    Query,
    Path,
    Body,
    Form,
}

impl ParameterType {
    /// OpenAPI 3 parameter location. Body and form values travel in the
    /// request body and have none.
    pub fn location(&self) -> Option<ParameterLocation> {
        match self {
            ParameterType::Header => Some(ParameterLocation::Header),
            ParameterType::Query => Some(ParameterLocation::Query),
            ParameterType::Path => Some(ParameterLocation::Path),
            ParameterType::Body | ParameterType::Form => None,
        }
    }
}

/// A parameter added to every documented operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_ref: Option<ModelRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<ParameterType>,
    pub required: bool,
}

/// A response documented for every operation of one HTTP method
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_model: Option<ModelRef>,
}

impl ResponseMessage {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            response_model: None,
        }
    }

    pub fn with_model(mut self, model: ModelRef) -> Self {
        self.response_model = Some(model);
        self
    }
}

/// Built-in response messages documented when defaults are in use
pub fn default_response_messages(method: HttpMethod) -> Vec<ResponseMessage> {
    let codes: &[(u16, &str)] = match method {
        HttpMethod::Get => &[
            (200, "OK"),
            (401, "Unauthorized"),
            (403, "Forbidden"),
            (404, "Not Found"),
        ],
        HttpMethod::Post | HttpMethod::Put => &[
            (200, "OK"),
            (201, "Created"),
            (401, "Unauthorized"),
            (403, "Forbidden"),
            (404, "Not Found"),
        ],
        HttpMethod::Patch | HttpMethod::Delete => &[
            (200, "OK"),
            (204, "No Content"),
            (401, "Unauthorized"),
            (403, "Forbidden"),
        ],
        HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace => &[
            (200, "OK"),
            (204, "No Content"),
            (401, "Unauthorized"),
            (403, "Forbidden"),
        ],
    };
    codes
        .iter()
        .map(|(code, message)| ResponseMessage::new(*code, *message))
        .collect()
}

/// Contact details shown with the API metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub url: String,
    pub email: String,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty() && self.email.is_empty()
    }
}

/// Descriptive metadata of one documented API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub terms_of_service_url: String,
    pub contact: Contact,
    pub license: String,
    pub license_url: String,
}

/// API-key authentication scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// Scheme identifier referenced by security references
    pub name: String,
    /// Header (or query parameter) carrying the key
    pub key_name: String,
    pub pass_as: ApiKeyLocation,
}

impl ApiKey {
    pub fn header(name: impl Into<String>, key_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_name: key_name.into(),
            pass_as: ApiKeyLocation::Header,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationScope {
    pub scope: String,
    pub description: String,
}

impl AuthorizationScope {
    pub fn new(scope: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            description: description.into(),
        }
    }
}

/// Points an operation at a security scheme by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityReference {
    pub reference: String,
    pub scopes: Vec<AuthorizationScope>,
}

/// Security references and the request paths they apply to
#[derive(Debug, Clone)]
pub struct SecurityContext {
    pub references: Vec<SecurityReference>,
    pub selector: PathSelector,
}

impl SecurityContext {
    pub fn new(references: Vec<SecurityReference>, selector: PathSelector) -> Self {
        Self {
            references,
            selector,
        }
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.selector.matches(path)
    }
}

/// Document every occurrence of `original` as `substitute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSubstitute {
    pub original: String,
    pub substitute: String,
}

impl ModelSubstitute {
    pub fn new(original: impl Into<String>, substitute: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            substitute: substitute.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_order_and_names() {
        let names: Vec<&str> = HttpMethod::ALL.iter().map(HttpMethod::as_str).collect();
        assert_eq!(
            names,
            ["POST", "GET", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS", "TRACE"]
        );
        assert!(HttpMethod::Post < HttpMethod::Trace);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!(" Options ".parse::<HttpMethod>().unwrap(), HttpMethod::Options);
        assert!("CONNECT".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_default_messages_per_method() {
        let get = default_response_messages(HttpMethod::Get);
        assert!(get.iter().any(|m| m.code == 404));
        assert!(!get.iter().any(|m| m.code == 201));

        let post = default_response_messages(HttpMethod::Post);
        assert!(post.iter().any(|m| m.code == 201 && m.message == "Created"));
    }

    #[test]
    fn test_response_message_with_model() {
        let message = ResponseMessage::new(400, "Bad Request").with_model(ModelRef::new("Error"));
        assert_eq!(message.response_model, Some(ModelRef::new("Error")));
    }

    #[test]
    fn test_security_context_applies_by_regex() {
        let context = SecurityContext::new(
            vec![SecurityReference {
                reference: "Authorization".to_string(),
                scopes: vec![AuthorizationScope::new("global", "accessEverything")],
            }],
            PathSelector::regex("/api/.*").unwrap(),
        );
        assert!(context.applies_to("/api/users"));
        assert!(!context.applies_to("/public/ping"));
    }

    #[test]
    fn test_parameter_type_location() {
        assert_eq!(ParameterType::Header.location(), Some(ParameterLocation::Header));
        assert_eq!(ParameterType::Body.location(), None);
        assert_eq!(ParameterType::Form.location(), None);
    }

    #[test]
    fn test_contact_is_empty() {
        assert!(Contact::default().is_empty());
        let contact = Contact {
            email: "ops@example.com".to_string(),
            ..Contact::default()
        };
        assert!(!contact.is_empty());
    }
}
