//! The per-group documentation descriptor and its OpenAPI rendering
//!
//! A [`Docket`] describes one documentation group: its metadata, which
//! handlers and paths it covers, and the parameters, responses and security
//! applied to every documented operation.
//!
//! ```
//! use docket_openapi::{Docket, DocumentationType, PathSelector, RequestHandlerSelector};
//!
//! let docket = Docket::new(DocumentationType::Swagger2)
//!     .group_name("users")
//!     .select()
//!     .apis(RequestHandlerSelector::base_package("app::users"))
//!     .paths(PathSelector::ant("/users/**").unwrap())
//!     .build();
//!
//! assert!(docket.is_documented("app::users::handlers", "/users/42"));
//! assert!(!docket.is_documented("app::orders", "/users/42"));
//! ```

use crate::builder::{OpenApiBuilder, body_content, schema_for_type, string_schema};
use crate::paths::PathSelector;
use crate::service::{
    ApiInfo, ApiKey, HttpMethod, ModelSubstitute, Parameter, ResponseMessage, SecurityContext,
    default_response_messages,
};
use crate::spec::{self, OpenApiSpec, Operation, PathItem, Response, Schema};
use docket_log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_TITLE: &str = "Api Documentation";
const DEFAULT_VERSION: &str = "1.0";

/// Documentation format a docket is published as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentationType {
    #[default]
    #[serde(rename = "swagger_2")]
    Swagger2,
    #[serde(rename = "openapi_3_0")]
    OpenApi30,
}

impl DocumentationType {
    pub fn version(&self) -> &'static str {
        match self {
            DocumentationType::Swagger2 => "2.0",
            DocumentationType::OpenApi30 => "3.0.3",
        }
    }
}

/// Restricts documentation to handlers living under a module path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHandlerSelector {
    base_package: Option<String>,
}

impl RequestHandlerSelector {
    pub fn any() -> Self {
        Self::default()
    }

    /// Handlers whose module path starts with `base_package`, segment by
    /// segment. Both `::` and `.` separate segments. Blank matches any.
    pub fn base_package(base_package: impl Into<String>) -> Self {
        let base_package = base_package.into();
        let trimmed = base_package.trim();
        Self {
            base_package: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn matches(&self, handler: &str) -> bool {
        let Some(base) = &self.base_package else {
            return true;
        };
        let mut handler_segments = module_segments(handler);
        module_segments(base).all(|segment| handler_segments.next() == Some(segment))
    }
}

fn module_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split("::")
        .flat_map(|part| part.split('.'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// A route known to the host framework, with whatever the framework already
/// documented about it
#[derive(Debug, Clone)]
pub struct ApiRoute {
    pub method: HttpMethod,
    pub path: String,
    /// Module path of the handler, matched by [`RequestHandlerSelector`]
    pub handler: String,
    pub operation: Operation,
}

impl ApiRoute {
    pub fn new(method: HttpMethod, path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            handler: handler.into(),
            operation: Operation::default(),
        }
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }
}

/// Documentation descriptor for one group of operations
#[derive(Debug, Clone)]
pub struct Docket {
    pub documentation_type: DocumentationType,
    pub group_name: Option<String>,
    pub host: String,
    pub api_info: ApiInfo,
    pub handler_selector: RequestHandlerSelector,
    pub path_selector: PathSelector,
    pub path_mapping: String,
    pub ignored_parameter_types: Vec<String>,
    pub model_substitutes: Vec<ModelSubstitute>,
    pub global_operation_parameters: Vec<Parameter>,
    pub use_default_response_messages: bool,
    pub global_response_messages: BTreeMap<HttpMethod, Vec<ResponseMessage>>,
    pub security_schemes: Vec<ApiKey>,
    pub security_contexts: Vec<SecurityContext>,
}

impl Docket {
    pub fn new(documentation_type: DocumentationType) -> Self {
        Self {
            documentation_type,
            group_name: None,
            host: String::new(),
            api_info: ApiInfo::default(),
            handler_selector: RequestHandlerSelector::any(),
            path_selector: PathSelector::any(),
            path_mapping: String::new(),
            ignored_parameter_types: Vec::new(),
            model_substitutes: Vec::new(),
            global_operation_parameters: Vec::new(),
            use_default_response_messages: true,
            global_response_messages: BTreeMap::new(),
            security_schemes: Vec::new(),
            security_contexts: Vec::new(),
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn api_info(mut self, api_info: ApiInfo) -> Self {
        self.api_info = api_info;
        self
    }

    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    pub fn security_schemes(mut self, schemes: Vec<ApiKey>) -> Self {
        self.security_schemes = schemes;
        self
    }

    pub fn security_contexts(mut self, contexts: Vec<SecurityContext>) -> Self {
        self.security_contexts = contexts;
        self
    }

    pub fn global_operation_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.global_operation_parameters = parameters;
        self
    }

    pub fn use_default_response_messages(mut self, enabled: bool) -> Self {
        self.use_default_response_messages = enabled;
        self
    }

    /// Replace the response messages documented for one HTTP method
    pub fn global_response_message(
        mut self,
        method: HttpMethod,
        messages: Vec<ResponseMessage>,
    ) -> Self {
        self.global_response_messages.insert(method, messages);
        self
    }

    pub fn path_mapping(mut self, path_mapping: impl Into<String>) -> Self {
        self.path_mapping = path_mapping.into();
        self
    }

    pub fn ignored_parameter_types(mut self, types: Vec<String>) -> Self {
        self.ignored_parameter_types = types;
        self
    }

    pub fn direct_model_substitute(
        mut self,
        original: impl Into<String>,
        substitute: impl Into<String>,
    ) -> Self {
        self.model_substitutes
            .push(ModelSubstitute::new(original, substitute));
        self
    }

    /// Start choosing which handlers and paths this docket documents
    pub fn select(self) -> ApiSelectorBuilder {
        ApiSelectorBuilder {
            handler_selector: self.handler_selector.clone(),
            path_selector: self.path_selector.clone(),
            docket: self,
        }
    }

    pub fn is_documented(&self, handler: &str, path: &str) -> bool {
        self.handler_selector.matches(handler) && self.path_selector.matches(path)
    }

    /// Response messages attached to every operation of `method`.
    ///
    /// With defaults disabled this is exactly the configured bucket. With
    /// defaults enabled the built-in messages come first and configured
    /// messages replace those with the same code.
    pub fn response_messages_for(&self, method: HttpMethod) -> Vec<ResponseMessage> {
        let configured = self
            .global_response_messages
            .get(&method)
            .cloned()
            .unwrap_or_default();
        if !self.use_default_response_messages {
            return configured;
        }

        let mut messages = default_response_messages(method);
        for message in configured {
            match messages.iter_mut().find(|m| m.code == message.code) {
                Some(existing) => *existing = message,
                None => messages.push(message),
            }
        }
        messages
    }

    /// Document skeleton without any routes
    pub fn to_openapi(&self) -> OpenApiSpec {
        self.render(&[])
    }

    /// Render the docket and the routes it covers as an OpenAPI document
    pub fn render(&self, routes: &[ApiRoute]) -> OpenApiSpec {
        let mut builder = self.info_builder();

        if let Some(url) = self.server_url() {
            builder = builder.server(url, None);
        }

        for scheme in &self.security_schemes {
            builder = builder.api_key_auth(&scheme.name, &scheme.key_name, scheme.pass_as);
        }

        for parameter in &self.global_operation_parameters {
            if let Some(documented) = self.openapi_parameter(parameter) {
                builder = builder.parameter(parameter.name.clone(), documented);
            }
        }

        let mut paths: BTreeMap<&str, PathItem> = BTreeMap::new();
        for route in routes {
            if !self.is_documented(&route.handler, &route.path) {
                trace!(
                    path = %route.path,
                    handler = %route.handler,
                    "Route not documented by docket"
                );
                continue;
            }
            let operation = self.document_operation(route);
            let item = paths.entry(route.path.as_str()).or_default();
            *item.slot_mut(route.method) = Some(operation);
        }

        debug!(
            group = self.group_name.as_deref().unwrap_or("default"),
            paths = paths.len(),
            "Rendered docket"
        );

        for (path, item) in paths {
            builder = builder.path(path, item);
        }
        builder.build()
    }

    fn info_builder(&self) -> OpenApiBuilder {
        let info = &self.api_info;
        let title = non_empty(&info.title).unwrap_or(DEFAULT_TITLE);
        let version = non_empty(&info.version).unwrap_or(DEFAULT_VERSION);
        let mut builder = OpenApiBuilder::new(title, version);

        if let Some(description) = non_empty(&info.description) {
            builder = builder.description(description);
        }
        if let Some(terms) = non_empty(&info.terms_of_service_url) {
            builder = builder.terms_of_service(terms);
        }
        if !info.contact.is_empty() {
            builder = builder.contact(
                non_empty(&info.contact.name).map(str::to_string),
                non_empty(&info.contact.url).map(str::to_string),
                non_empty(&info.contact.email).map(str::to_string),
            );
        }
        if let Some(license) = non_empty(&info.license) {
            builder = builder.license(license, non_empty(&info.license_url).map(str::to_string));
        }
        builder
    }

    fn server_url(&self) -> Option<String> {
        let host = self.host.trim().trim_end_matches('/');
        let mapping = self.path_mapping.trim();
        if host.is_empty() && mapping.is_empty() {
            return None;
        }

        let mut url = if host.is_empty() || host.contains("://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };
        if !mapping.is_empty() {
            if !mapping.starts_with('/') {
                url.push('/');
            }
            url.push_str(mapping.trim_end_matches('/'));
        }
        Some(url)
    }

    fn document_operation(&self, route: &ApiRoute) -> Operation {
        let mut operation = route.operation.clone();

        for parameter in &self.global_operation_parameters {
            if operation.parameters.iter().any(|p| p.name == parameter.name) {
                continue;
            }
            if let Some(documented) = self.openapi_parameter(parameter) {
                operation.parameters.push(documented);
            }
        }

        operation.parameters.retain(|p| {
            let ignored = p
                .schema
                .as_ref()
                .and_then(Schema::type_name)
                .is_some_and(|name| self.is_ignored(name));
            !ignored
        });
        for parameter in &mut operation.parameters {
            if let Some(schema) = parameter.schema.as_mut() {
                self.substitute(schema);
            }
        }

        for message in self.response_messages_for(route.method) {
            operation
                .responses
                .entry(message.code.to_string())
                .or_insert_with(|| Response {
                    description: message.message.clone(),
                    content: message
                        .response_model
                        .as_ref()
                        .map(|model| body_content(schema_for_type(&model.type_name))),
                });
        }
        for response in operation.responses.values_mut() {
            for media in response.content.iter_mut().flat_map(|c| c.values_mut()) {
                if let Some(schema) = media.schema.as_mut() {
                    self.substitute(schema);
                }
            }
        }

        for context in &self.security_contexts {
            if !context.applies_to(&route.path) {
                continue;
            }
            for reference in &context.references {
                let scopes = reference.scopes.iter().map(|s| s.scope.clone()).collect();
                operation
                    .security
                    .push(BTreeMap::from([(reference.reference.clone(), scopes)]));
            }
        }

        operation
    }

    fn openapi_parameter(&self, parameter: &Parameter) -> Option<spec::Parameter> {
        let location = parameter.parameter_type?.location()?;
        let type_name = parameter.model_ref.as_ref().map(|m| m.type_name.as_str());
        if type_name.is_some_and(|name| self.is_ignored(name)) {
            return None;
        }

        let mut schema = type_name.map_or_else(string_schema, schema_for_type);
        self.substitute(&mut schema);
        Some(spec::Parameter {
            name: parameter.name.clone(),
            location,
            description: parameter.description.clone(),
            required: Some(parameter.required),
            schema: Some(schema),
        })
    }

    fn is_ignored(&self, type_name: &str) -> bool {
        self.ignored_parameter_types.iter().any(|t| t == type_name)
    }

    fn substitute(&self, schema: &mut Schema) {
        if let Some(items) = schema.items.as_mut() {
            self.substitute(items);
        }
        let Some(name) = schema.type_name() else {
            return;
        };
        if let Some(found) = self.model_substitutes.iter().find(|s| s.original == name) {
            *schema = schema_for_type(&found.substitute);
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Chooses the handlers and paths a docket documents
#[derive(Debug)]
pub struct ApiSelectorBuilder {
    docket: Docket,
    handler_selector: RequestHandlerSelector,
    path_selector: PathSelector,
}

impl ApiSelectorBuilder {
    pub fn apis(mut self, selector: RequestHandlerSelector) -> Self {
        self.handler_selector = selector;
        self
    }

    pub fn paths(mut self, selector: PathSelector) -> Self {
        self.path_selector = selector;
        self
    }

    pub fn build(self) -> Docket {
        Docket {
            handler_selector: self.handler_selector,
            path_selector: self.path_selector,
            ..self.docket
        }
    }
}
