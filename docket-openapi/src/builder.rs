//! Programmatic construction of OpenAPI documents and schemas

use crate::spec::*;
use std::collections::BTreeMap;

/// Builder for OpenAPI documents
#[derive(Debug, Clone)]
pub struct OpenApiBuilder {
    spec: OpenApiSpec,
    components: Components,
}

impl OpenApiBuilder {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            spec: OpenApiSpec {
                openapi: OPENAPI_VERSION.to_string(),
                info: Info::new(title, version),
                servers: Vec::new(),
                paths: BTreeMap::new(),
                components: None,
            },
            components: Components::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.info.description = Some(description.into());
        self
    }

    pub fn terms_of_service(mut self, terms: impl Into<String>) -> Self {
        self.spec.info.terms_of_service = Some(terms.into());
        self
    }

    pub fn contact(
        mut self,
        name: Option<String>,
        url: Option<String>,
        email: Option<String>,
    ) -> Self {
        self.spec.info.contact = Some(Contact { name, url, email });
        self
    }

    pub fn license(mut self, name: impl Into<String>, url: Option<String>) -> Self {
        self.spec.info.license = Some(License {
            name: name.into(),
            url,
        });
        self
    }

    pub fn server(mut self, url: impl Into<String>, description: Option<String>) -> Self {
        self.spec.servers.push(Server {
            url: url.into(),
            description,
        });
        self
    }

    /// Add a path, replacing any item already registered under it
    pub fn path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.spec.paths.insert(path.into(), item);
        self
    }

    /// Add a reusable parameter component
    pub fn parameter(mut self, name: impl Into<String>, parameter: Parameter) -> Self {
        self.components.parameters.insert(name.into(), parameter);
        self
    }

    pub fn security_scheme(mut self, name: impl Into<String>, scheme: SecurityScheme) -> Self {
        self.components.security_schemes.insert(name.into(), scheme);
        self
    }

    /// Register an API key scheme under `name`, read from `key_name`
    pub fn api_key_auth(
        self,
        name: impl Into<String>,
        key_name: impl Into<String>,
        location: ApiKeyLocation,
    ) -> Self {
        self.security_scheme(
            name,
            SecurityScheme::ApiKey {
                name: key_name.into(),
                location,
            },
        )
    }

    /// Finish the document. Components are only emitted when something was
    /// registered.
    pub fn build(mut self) -> OpenApiSpec {
        if !self.components.is_empty() {
            self.spec.components = Some(self.components);
        }
        self.spec
    }
}

/// Builder for operations
#[derive(Debug, Clone, Default)]
pub struct OperationBuilder {
    operation: Operation,
}

impl OperationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.operation.summary = Some(summary.into());
        self
    }

    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation.operation_id = Some(id.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.operation.tags.push(tag.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.operation.parameters.push(parameter);
        self
    }

    /// Document a response without a body
    pub fn response(mut self, status: impl Into<String>, description: impl Into<String>) -> Self {
        self.operation.responses.insert(
            status.into(),
            Response {
                description: description.into(),
                content: None,
            },
        );
        self
    }

    /// Document a response whose body is `schema`
    pub fn response_with_schema(
        mut self,
        status: impl Into<String>,
        description: impl Into<String>,
        schema: Schema,
    ) -> Self {
        self.operation.responses.insert(
            status.into(),
            Response {
                description: description.into(),
                content: Some(body_content(schema)),
            },
        );
        self
    }

    pub fn build(self) -> Operation {
        self.operation
    }
}

/// Media type used for response bodies whose type is only known by name
pub const ANY_MEDIA_TYPE: &str = "*/*";

/// Content map holding `schema` under the wildcard media type
pub fn body_content(schema: Schema) -> BTreeMap<String, MediaType> {
    BTreeMap::from([(
        ANY_MEDIA_TYPE.to_string(),
        MediaType {
            schema: Some(schema),
        },
    )])
}

fn primitive(schema_type: &str, format: Option<&str>) -> Schema {
    Schema {
        schema_type: Some(schema_type.to_string()),
        format: format.map(str::to_string),
        ..Schema::default()
    }
}

pub fn string_schema() -> Schema {
    primitive("string", None)
}

pub fn integer_schema(format: &str) -> Schema {
    primitive("integer", Some(format))
}

pub fn number_schema(format: &str) -> Schema {
    primitive("number", Some(format))
}

pub fn boolean_schema() -> Schema {
    primitive("boolean", None)
}

pub fn array_schema(items: Schema) -> Schema {
    Schema {
        items: Some(Box::new(items)),
        ..primitive("array", None)
    }
}

pub fn ref_schema(reference: impl Into<String>) -> Schema {
    Schema {
        reference: Some(format!("#/components/schemas/{}", reference.into())),
        ..Schema::default()
    }
}

/// Schema for a model reference name: primitives map to typed schemas
/// (`int`, `long`, `double`, `date-time`, ...), anything else to a `$ref`.
pub fn schema_for_type(type_name: &str) -> Schema {
    let type_name = type_name.trim();
    match type_name.to_lowercase().as_str() {
        "string" | "str" | "char" => string_schema(),
        "int" | "integer" | "int32" | "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => {
            integer_schema("int32")
        }
        "long" | "int64" | "i64" | "i128" | "isize" | "u64" | "u128" | "usize" => {
            integer_schema("int64")
        }
        "float" | "f32" => number_schema("float"),
        "double" | "number" | "f64" => number_schema("double"),
        "boolean" | "bool" => boolean_schema(),
        "byte" => primitive("string", Some("byte")),
        "uuid" => primitive("string", Some("uuid")),
        "date" => primitive("string", Some("date")),
        "date-time" | "datetime" => primitive("string", Some("date-time")),
        "file" => primitive("string", Some("binary")),
        "object" => primitive("object", None),
        _ => ref_schema(type_name),
    }
}
