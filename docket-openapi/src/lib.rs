//! Documentation dockets, path selectors and OpenAPI rendering for docket
//!
//! This crate holds the documentation model the auto-configuration produces:
//! one [`Docket`] per documentation group, the descriptors it carries, and
//! the code that turns it into an OpenAPI 3.0 document.
//!
//! ## Features
//!
//! - 📝 **Docket builder** - Group metadata, selectors, parameters and responses
//! - 🧭 **Path selectors** - Ant patterns and regexes, composable with and/or/not
//! - 🔐 **API-key security** - Schemes and path-scoped security contexts
//! - 📤 **JSON/YAML Export** - OpenAPI 3.0 documents and Swagger UI resources
//!
//! ## Quick Start - Basic API Spec
//!
//! ```
//! use docket_openapi::OpenApiBuilder;
//!
//! let spec = OpenApiBuilder::new("My API", "1.0.0")
//!     .description("A wonderful API")
//!     .server("http://localhost:3000", None)
//!     .build();
//!
//! assert_eq!(spec.info.title, "My API");
//! assert_eq!(spec.info.version, "1.0.0");
//! assert_eq!(spec.servers.len(), 1);
//! ```
//!
//! ## Documenting a Group
//!
//! ```
//! use docket_openapi::{
//!     ApiInfo, ApiKey, Docket, DocumentationType, HttpMethod, PathSelector, ResponseMessage,
//! };
//!
//! let docket = Docket::new(DocumentationType::Swagger2)
//!     .group_name("users")
//!     .api_info(ApiInfo {
//!         title: "User API".to_string(),
//!         version: "2.1".to_string(),
//!         ..ApiInfo::default()
//!     })
//!     .security_schemes(vec![ApiKey::header("Authorization", "TOKEN")])
//!     .use_default_response_messages(false)
//!     .global_response_message(HttpMethod::Get, vec![ResponseMessage::new(404, "Not Found")])
//!     .select()
//!     .paths(PathSelector::ant("/users/**").unwrap())
//!     .build();
//!
//! let spec = docket.to_openapi();
//! assert_eq!(spec.info.title, "User API");
//! assert!(spec.components.unwrap().security_schemes.contains_key("Authorization"));
//! assert_eq!(docket.response_messages_for(HttpMethod::Get).len(), 1);
//! ```
//!
//! ## Swagger UI Resources
//!
//! ```
//! use docket_openapi::{Docket, DocumentationType, swagger_resources};
//!
//! let dockets = vec![Docket::new(DocumentationType::Swagger2).group_name("users")];
//! let resources = swagger_resources(&dockets);
//!
//! assert_eq!(resources[0].url, "/v2/api-docs?group=users");
//! ```

pub mod builder;
pub mod docket;
pub mod error;
pub mod paths;
pub mod service;
pub mod spec;
pub mod swagger;
pub mod ui;

pub use builder::*;
pub use docket::{ApiRoute, ApiSelectorBuilder, Docket, DocumentationType, RequestHandlerSelector};
pub use error::{OpenApiError, Result};
pub use paths::{AntPattern, PathSelector};
pub use service::{
    ApiInfo, ApiKey, AuthorizationScope, HttpMethod, ModelRef, ModelSubstitute, ParameterType,
    ResponseMessage, SecurityContext, SecurityReference, default_response_messages,
};
pub use spec::*;
pub use swagger::*;
pub use ui::*;
