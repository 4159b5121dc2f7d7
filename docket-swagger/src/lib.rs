//! Property-driven Swagger docket auto-configuration
//!
//! Reads the `swagger` section of the configuration tree and builds one
//! [`Docket`](docket_openapi::Docket) per documentation group, registered by
//! name. Nothing happens unless `swagger.beanName` (or `swagger.bean_name`)
//! holds a non-blank value.
//!
//! ## Quick Start
//!
//! ```
//! use docket_config::{ConfigManager, FileFormat};
//! use docket_swagger::configure;
//!
//! let config = ConfigManager::new();
//! config
//!     .load_str(
//!         r#"
//! swagger:
//!   beanName: api
//!   title: Shop API
//!   docket:
//!     users:
//!       title: Users
//!       base-path: ["/users/**"]
//!     orders:
//!       base-path: ["/orders/**"]
//! "#,
//!         FileFormat::Yaml,
//!     )
//!     .unwrap();
//!
//! let context = configure(&config).unwrap().expect("bean name is set");
//! let names: Vec<&str> = context.registry.names().collect();
//! assert_eq!(names, ["users", "orders"]);
//! assert_eq!(context.docket("orders").unwrap().api_info.title, "Shop API");
//! ```
//!
//! ## Parameter Overrides
//!
//! Group parameters replace global parameters with the same name:
//!
//! ```
//! use docket_swagger::{GlobalOperationParameter, merge_parameters};
//!
//! let param = |name: &str, description: &str| GlobalOperationParameter {
//!     name: name.to_string(),
//!     description: description.to_string(),
//!     ..Default::default()
//! };
//!
//! let global = vec![param("X-Tenant", "global"), param("X-Trace", "global")];
//! let group = vec![param("X-Tenant", "group")];
//!
//! let merged = merge_parameters(&global, Some(group.as_slice()));
//! assert_eq!(merged[0].name, "X-Trace");
//! assert_eq!(merged[1].description, "group");
//! ```

pub mod autoconfig;
pub mod condition;
pub mod error;
pub mod merge;
pub mod properties;
pub mod registry;
pub mod selection;
pub mod substitutes;

pub use autoconfig::{SwaggerAutoConfiguration, SwaggerContext, configure};
pub use condition::{ConditionOutcome, property_not_empty};
pub use error::{Result, SwaggerError};
pub use merge::{
    assemble_operation_parameters, build_operation_parameters, build_response_message_buckets,
    merge_parameters, resolve_group_metadata,
};
pub use properties::{
    Authorization, DocketGroups, DocketInfo, GlobalOperationParameter, GlobalResponseMessage,
    GlobalResponseMessageBody, SwaggerProperties, UiConfig,
};
pub use registry::DocketRegistry;
pub use selection::assemble_path_selector;
pub use substitutes::{TypeCatalog, parse_model_substitutes};
