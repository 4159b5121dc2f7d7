//! Integration tests for docket-swagger

use docket_config::{ConfigManager, ConfigServiceBuilder, FileFormat};
use docket_openapi::{ApiRoute, HttpMethod, ParameterLocation, ResponseMessage};
use docket_swagger::*;
use std::io::Write;

const SHOP_YAML: &str = r#"
swagger:
  beanName: shopApi
  title: Shop API
  description: Everything the shop exposes
  version: 2.0.0
  license: Apache-2.0
  contact:
    name: Shop team
    email: shop@example.com
  host: shop.example.com
  global-operation-parameters:
    - name: X-Tenant
      description: Tenant id
      model-ref: string
      parameter-type: header
      required: "true"
    - name: X-Trace
      model-ref: string
      parameter-type: header
      required: false
  authorization:
    key-name: X-Api-Key
    auth-regex: "^/(users|orders)/.*$"
  docket:
    users:
      title: Users
      base-package: shop::users
      base-path:
        - /users/**
      global-operation-parameters:
        - name: X-Trace
          description: Users trace id
          model-ref: string
          parameter-type: header
          required: TRUE
    orders:
      base-path:
        - /orders/**
      exclude-path:
        - /orders/internal/**
"#;

fn shop_config() -> ConfigManager {
    let config = ConfigManager::new();
    config.load_str(SHOP_YAML, FileFormat::Yaml).unwrap();
    config
}

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_groups_from_yaml() {
    let context = configure(&shop_config()).unwrap().unwrap();

    let names: Vec<&str> = context.registry.names().collect();
    assert_eq!(names, ["users", "orders"]);

    let users = context.docket("users").unwrap();
    assert_eq!(users.api_info.title, "Users");
    assert_eq!(users.api_info.version, "2.0.0");
    assert_eq!(users.api_info.contact.email, "shop@example.com");
    assert!(users.handler_selector.matches("shop::users::api"));
    assert!(!users.handler_selector.matches("shop::orders"));

    let orders = context.docket("orders").unwrap();
    assert_eq!(orders.api_info.title, "Shop API");
    assert!(orders.is_documented("shop::orders::list", "/orders/7"));
    assert!(!orders.is_documented("shop::orders::stats", "/orders/internal/stats"));
}

#[test]
fn test_group_parameters_override_global() {
    let context = configure(&shop_config()).unwrap().unwrap();

    let users = context.docket("users").unwrap();
    let names: Vec<&str> = users
        .global_operation_parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["X-Tenant", "X-Trace"]);
    assert_eq!(
        users.global_operation_parameters[1].description.as_deref(),
        Some("Users trace id")
    );
    assert!(users.global_operation_parameters[0].required);
    assert!(users.global_operation_parameters[1].required);

    let orders = context.docket("orders").unwrap();
    assert!(!orders.global_operation_parameters[1].required);
    assert_eq!(orders.global_operation_parameters[1].description, None);
}

#[test]
fn test_security_from_authorization() {
    let context = configure(&shop_config()).unwrap().unwrap();
    let users = context.docket("users").unwrap();

    assert_eq!(users.security_schemes[0].name, "Authorization");
    assert_eq!(users.security_schemes[0].key_name, "X-Api-Key");
    let security = &users.security_contexts[0];
    assert_eq!(security.references[0].reference, "Authorization");
    assert_eq!(security.references[0].scopes[0].scope, "global");
    assert!(security.applies_to("/users/1"));
    assert!(!security.applies_to("/health"));
}

#[test]
fn test_rendered_group_document() {
    let context = configure(&shop_config()).unwrap().unwrap();
    let users = context.docket("users").unwrap();

    let spec = users.render(&[
        ApiRoute::new(HttpMethod::Get, "/users/{id}", "shop::users::get"),
        ApiRoute::new(HttpMethod::Get, "/orders/{id}", "shop::orders::get"),
    ]);

    assert_eq!(spec.info.title, "Users");
    assert_eq!(spec.servers[0].url, "http://shop.example.com");
    assert_eq!(spec.paths.len(), 1);
    let get = spec.paths["/users/{id}"].get.as_ref().unwrap();
    assert_eq!(get.parameters.len(), 2);
    assert_eq!(get.parameters[0].location, ParameterLocation::Header);
    assert_eq!(get.security[0]["Authorization"], ["global".to_string()]);

    let resources = context.registry.swagger_resources();
    assert_eq!(resources[0].url, "/v2/api-docs?group=users");
    assert_eq!(resources[1].url, "/v2/api-docs?group=orders");
}

#[test]
fn test_bean_name_required() {
    for yaml in [
        "swagger:\n  title: API\n",
        "swagger:\n  beanName: \"\"\n",
        "swagger:\n  bean_name: \"   \"\n",
    ] {
        let config = ConfigManager::new();
        config.load_str(yaml, FileFormat::Yaml).unwrap();
        assert!(configure(&config).unwrap().is_none(), "{yaml}");
    }
}

#[test]
fn test_default_messages_disabled_applies_global_bucket_to_every_group() {
    let config = shop_config();
    config
        .load_str(
            r#"
swagger:
  apply-default-response-messages: false
  global-response-message:
    get:
      - code: 400
        message: Bad Request
"#,
            FileFormat::Yaml,
        )
        .unwrap();

    let context = configure(&config).unwrap().unwrap();
    assert_eq!(context.registry.len(), 2);
    for docket in context.registry.dockets() {
        assert_eq!(
            docket.global_response_messages[&HttpMethod::Get],
            [ResponseMessage::new(400, "Bad Request")]
        );
        assert!(docket.global_response_messages[&HttpMethod::Delete].is_empty());
    }
}

#[test]
fn test_invalid_response_code_fails_startup() {
    let config = ConfigManager::new();
    config
        .load_str(
            "swagger:\n  beanName: api\n  global-response-message:\n    post:\n      - code: 1000\n        message: nope\n",
            FileFormat::Yaml,
        )
        .unwrap();

    assert!(matches!(configure(&config), Err(SwaggerError::Config(_))));
}

#[test]
fn test_service_builder_with_toml_and_dotenv() {
    let toml = write_temp(
        ".toml",
        r#"
[swagger]
bean_name = "api"
title = "From TOML"
ignored-parameter-types = ["Session"]
"#,
    );
    let dotenv = write_temp(".env", "DOCKETSWTEST_SWAGGER__HOST=env.example.com\n");

    let service = ConfigServiceBuilder::new()
        .with_prefix("DOCKETSWTEST")
        .add_file_auto(toml.path().to_str().unwrap())
        .load_dotenv(Some(dotenv.path().to_str().unwrap().to_string()))
        .build()
        .unwrap();

    let catalog = TypeCatalog::new().with_models(["Session"]);
    let context = SwaggerAutoConfiguration::with_catalog(catalog)
        .from_config(service.manager())
        .unwrap()
        .unwrap();

    let docket = context.docket("api").unwrap();
    assert_eq!(docket.api_info.title, "From TOML");
    assert_eq!(docket.host, "env.example.com");
    assert_eq!(docket.ignored_parameter_types, ["Session"]);
    assert_eq!(context.ui_configuration.supported_submit_methods.len(), 5);
}

#[test]
fn test_duplicate_bean_and_group_names_are_isolated() {
    let config = ConfigManager::new();
    config
        .load_str(
            "swagger:\n  beanName: users\n  docket:\n    users: {}\n",
            FileFormat::Yaml,
        )
        .unwrap();

    let context = configure(&config).unwrap().unwrap();
    assert_eq!(context.registry.len(), 1);
    assert_eq!(
        context.docket("users").unwrap().group_name.as_deref(),
        Some("users")
    );
}
