// Docket - property-driven API documentation for Rust services
//
// This library wires layered configuration into grouped Swagger dockets:
// one documentation group per configured entry, each with its own metadata,
// path selection, operation parameters and response messages.

// Re-export the documentation model
pub use docket_openapi::*;

// Re-export member crates
pub use docket_config;
pub use docket_log;
pub use docket_openapi;

#[cfg(feature = "swagger")]
pub use docket_swagger;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ApiInfo, ApiKey, ApiRoute, Docket, DocumentationType, HttpMethod, OpenApiSpec,
        PathSelector, RequestHandlerSelector, ResponseMessage, SecurityContext, SwaggerResource,
        UiConfiguration,
    };
    pub use docket_config::{ConfigManager, ConfigServiceBuilder, FileFormat};
    pub use docket_log::{LogConfig, LogFormat, LogLevel};

    #[cfg(feature = "swagger")]
    pub use docket_swagger::{
        DocketRegistry, SwaggerAutoConfiguration, SwaggerContext, SwaggerError,
        SwaggerProperties, TypeCatalog, configure,
    };
}
