//! Turns the `swagger` properties into registered dockets

use crate::condition::property_not_empty;
use crate::error::Result;
use crate::merge::{
    assemble_operation_parameters, build_operation_parameters, build_response_message_buckets,
    resolve_group_metadata,
};
use crate::properties::{DocketInfo, PREFIX, SwaggerProperties, VERBATIM_TABLES};
use crate::registry::DocketRegistry;
use crate::selection::assemble_path_selector;
use crate::substitutes::{TypeCatalog, parse_model_substitutes};
use docket_config::ConfigManager;
use docket_log::{debug, info};
use docket_openapi::{
    ApiKey, AuthorizationScope, Docket, DocumentationType, PathSelector, RequestHandlerSelector,
    SecurityContext, SecurityReference, UiConfiguration,
};
use std::sync::Arc;

/// Property whose presence switches the module on
pub const ACTIVATION_PROPERTY: &str = "swagger.beanName";

/// Scope granted by the default security reference
pub const GLOBAL_SCOPE: &str = "global";
pub const GLOBAL_SCOPE_DESCRIPTION: &str = "accessEverything";

/// Everything the module produces once active
#[derive(Debug, Clone)]
pub struct SwaggerContext {
    pub properties: SwaggerProperties,
    pub ui_configuration: UiConfiguration,
    pub registry: DocketRegistry,
}

impl SwaggerContext {
    pub fn docket(&self, name: &str) -> Option<Arc<Docket>> {
        self.registry.get(name)
    }
}

/// Builds dockets from configuration
#[derive(Debug, Clone, Default)]
pub struct SwaggerAutoConfiguration {
    catalog: TypeCatalog,
}

impl SwaggerAutoConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `catalog` to resolve model substitutes and ignored parameter types
    pub fn with_catalog(catalog: TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Bind, validate and build. Returns `None` when the module is inactive:
    /// no non-blank `swagger.beanName`, or `swagger.enabled` set to false.
    pub fn from_config(&self, config: &ConfigManager) -> Result<Option<SwaggerContext>> {
        let outcome = property_not_empty(config, ACTIVATION_PROPERTY);
        if !outcome.matched {
            info!(reason = %outcome.message, "Swagger documentation disabled");
            return Ok(None);
        }

        let properties: SwaggerProperties = config.bind_validated(PREFIX, VERBATIM_TABLES)?;
        if properties.enabled == Some(false) {
            info!("Swagger documentation disabled by swagger.enabled");
            return Ok(None);
        }

        let ui_configuration = self.ui_configuration(&properties)?;
        let registry = self.create_dockets(&properties)?;
        info!(dockets = registry.len(), "Swagger documentation configured");

        Ok(Some(SwaggerContext {
            properties,
            ui_configuration,
            registry,
        }))
    }

    /// Swagger UI options from `ui-config`
    pub fn ui_configuration(&self, properties: &SwaggerProperties) -> Result<UiConfiguration> {
        let ui = &properties.ui_config;
        Ok(UiConfiguration::builder()
            .deep_linking(ui.deep_linking)
            .default_model_expand_depth(ui.default_model_expand_depth)
            .default_model_rendering(ui.default_model_rendering)
            .default_models_expand_depth(ui.default_models_expand_depth)
            .display_operation_id(ui.display_operation_id)
            .display_request_duration(Some(ui.display_request_duration))
            .doc_expansion(ui.doc_expansion)
            .filter(ui.filter.clone())
            .max_displayed_tags(ui.max_displayed_tags)
            .operations_sorter(ui.operations_sorter)
            .show_extensions(ui.show_extensions)
            .tags_sorter(ui.tags_sorter)
            .validator_url(ui.validator_url.clone())
            .supported_submit_methods(ui.submit_methods()?)
            .build())
    }

    /// One docket per declared group, or a single docket under the bean name
    pub fn create_dockets(&self, properties: &SwaggerProperties) -> Result<DocketRegistry> {
        let mut registry = DocketRegistry::new();

        if properties.docket.is_empty() {
            let docket = self.build_docket(properties, None)?;
            registry.register_singleton(&properties.bean_name, docket)?;
            return Ok(registry);
        }

        for (name, group) in properties.docket.iter() {
            let docket = self.build_docket(properties, Some((name, group)))?;
            registry.register_singleton(name, docket)?;
        }
        Ok(registry)
    }

    fn build_docket(
        &self,
        properties: &SwaggerProperties,
        group: Option<(&str, &DocketInfo)>,
    ) -> Result<Docket> {
        let group_info = group.map(|(_, info)| info);
        let info = group_info.unwrap_or(&properties.info);
        debug!(group = ?group.map(|(name, _)| name), "Building docket");

        let parameters = match group_info {
            Some(info) => assemble_operation_parameters(
                properties.global_operation_parameters(),
                info.global_operation_parameters.as_deref(),
            ),
            None => build_operation_parameters(properties.global_operation_parameters()),
        };

        let mut docket = Docket::new(DocumentationType::Swagger2)
            .host(properties.host.clone())
            .api_info(resolve_group_metadata(&properties.info, group_info))
            .security_schemes(vec![api_key(properties)])
            .security_contexts(vec![security_context(properties)?])
            .global_operation_parameters(parameters)
            .use_default_response_messages(properties.apply_default_response_messages);

        if !properties.apply_default_response_messages {
            for (method, messages) in
                build_response_message_buckets(&properties.global_response_message)
            {
                docket = docket.global_response_message(method, messages);
            }
        }

        if let Some((name, _)) = group {
            docket = docket.group_name(name);
        }

        let mut docket = docket
            .select()
            .apis(RequestHandlerSelector::base_package(info.base_package.clone()))
            .paths(assemble_path_selector(&info.base_path, &info.exclude_path)?)
            .build()
            .path_mapping(info.path_mapping.clone())
            .ignored_parameter_types(self.catalog.resolve_all(&info.ignored_parameter_types)?);

        for substitute in parse_model_substitutes(&info.direct_model_substitutes, &self.catalog)? {
            docket = docket.direct_model_substitute(substitute.original, substitute.substitute);
        }
        Ok(docket)
    }
}

/// Bind and build with the built-in type catalog
pub fn configure(config: &ConfigManager) -> Result<Option<SwaggerContext>> {
    SwaggerAutoConfiguration::new().from_config(config)
}

fn api_key(properties: &SwaggerProperties) -> ApiKey {
    ApiKey::header(
        properties.authorization.name.clone(),
        properties.authorization.key_name.clone(),
    )
}

fn security_context(properties: &SwaggerProperties) -> Result<SecurityContext> {
    let authorization = &properties.authorization;
    Ok(SecurityContext::new(
        vec![SecurityReference {
            reference: authorization.name.clone(),
            scopes: vec![AuthorizationScope::new(GLOBAL_SCOPE, GLOBAL_SCOPE_DESCRIPTION)],
        }],
        PathSelector::regex(&authorization.auth_regex)?,
    ))
}
