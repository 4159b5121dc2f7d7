//! Resolution of group settings against the global defaults
//!
//! Parameters merge by name with the group winning. Metadata falls back field
//! by field. Response messages are never merged; they pass through per
//! method.

use crate::properties::{DocketInfo, GlobalOperationParameter, GlobalResponseMessage};
use docket_openapi::service::{Contact, Parameter};
use docket_openapi::{ApiInfo, HttpMethod, ModelRef, ResponseMessage};
use std::collections::{BTreeMap, HashSet};

/// Combine the global parameter list with a group's own list.
///
/// Without group parameters the global list is returned as is. Otherwise
/// global entries whose name the group redefines are dropped and the group's
/// entries follow the remaining global ones, both in their original order.
pub fn merge_parameters(
    global: &[GlobalOperationParameter],
    group: Option<&[GlobalOperationParameter]>,
) -> Vec<GlobalOperationParameter> {
    let group = match group {
        Some(group) if !group.is_empty() => group,
        _ => return global.to_vec(),
    };

    let overridden: HashSet<&str> = group.iter().map(|p| p.name.as_str()).collect();
    global
        .iter()
        .filter(|p| !overridden.contains(p.name.as_str()))
        .chain(group)
        .cloned()
        .collect()
}

/// Translate parameter properties into documentation parameters
pub fn build_operation_parameters(parameters: &[GlobalOperationParameter]) -> Vec<Parameter> {
    parameters
        .iter()
        .map(|p| Parameter {
            name: p.name.clone(),
            description: non_empty(&p.description).map(str::to_string),
            model_ref: non_empty(&p.model_ref).map(ModelRef::new),
            parameter_type: p.parameter_type,
            required: p.required,
        })
        .collect()
}

/// [`merge_parameters`] followed by [`build_operation_parameters`]
pub fn assemble_operation_parameters(
    global: &[GlobalOperationParameter],
    group: Option<&[GlobalOperationParameter]>,
) -> Vec<Parameter> {
    build_operation_parameters(&merge_parameters(global, group))
}

/// Group metadata with empty fields taken from the default group
pub fn resolve_group_metadata(default: &DocketInfo, group: Option<&DocketInfo>) -> ApiInfo {
    let info = group.unwrap_or(default);
    let pick = |own: &String, fallback: &String| {
        if own.is_empty() {
            fallback.clone()
        } else {
            own.clone()
        }
    };

    ApiInfo {
        title: pick(&info.title, &default.title),
        description: pick(&info.description, &default.description),
        version: pick(&info.version, &default.version),
        terms_of_service_url: pick(&info.terms_of_service_url, &default.terms_of_service_url),
        contact: Contact {
            name: pick(&info.contact.name, &default.contact.name),
            url: pick(&info.contact.url, &default.contact.url),
            email: pick(&info.contact.email, &default.contact.email),
        },
        license: pick(&info.license, &default.license),
        license_url: pick(&info.license_url, &default.license_url),
    }
}

/// Response messages per method, translated as configured
pub fn build_response_message_buckets(
    global: &GlobalResponseMessage,
) -> BTreeMap<HttpMethod, Vec<ResponseMessage>> {
    HttpMethod::ALL
        .into_iter()
        .map(|method| {
            let messages = global
                .bucket(method)
                .iter()
                .map(|body| {
                    let message = ResponseMessage::new(body.code, body.message.clone());
                    match non_empty(&body.model_ref) {
                        Some(model) => message.with_model(ModelRef::new(model)),
                        None => message,
                    }
                })
                .collect();
            (method, messages)
        })
        .collect()
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Contact as ContactProperties, GlobalResponseMessageBody};
    use docket_openapi::ParameterType;

    fn param(name: &str, description: &str) -> GlobalOperationParameter {
        GlobalOperationParameter {
            name: name.to_string(),
            description: description.to_string(),
            model_ref: "string".to_string(),
            parameter_type: Some(ParameterType::Header),
            required: false,
        }
    }

    fn names(params: &[GlobalOperationParameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_group_parameters_keeps_global() {
        let global = vec![param("a", "1"), param("b", "2"), param("a", "3")];
        assert_eq!(merge_parameters(&global, None), global);
        assert_eq!(merge_parameters(&global, Some(&[][..])), global);
    }

    #[test]
    fn test_group_overrides_by_name() {
        let global = vec![param("a", "global a"), param("b", "global b"), param("c", "global c")];
        let group = vec![param("b", "group b"), param("d", "group d")];

        let merged = merge_parameters(&global, Some(group.as_slice()));
        assert_eq!(names(&merged), ["a", "c", "b", "d"]);
        assert_eq!(merged[2].description, "group b");
    }

    #[test]
    fn test_group_only() {
        let group = vec![param("x", "")];
        assert_eq!(merge_parameters(&[], Some(group.as_slice())), group);
    }

    #[test]
    fn test_build_operation_parameters() {
        let mut p = param("X-Tenant", "");
        p.model_ref = String::new();
        p.required = true;

        let built = build_operation_parameters(&[p, param("X-Trace", "trace id")]);
        assert_eq!(built[0].description, None);
        assert_eq!(built[0].model_ref, None);
        assert!(built[0].required);
        assert_eq!(built[1].description.as_deref(), Some("trace id"));
        assert_eq!(built[1].model_ref, Some(ModelRef::new("string")));
        assert_eq!(built[1].parameter_type, Some(ParameterType::Header));
    }

    #[test]
    fn test_metadata_falls_back_per_field() {
        let default = DocketInfo {
            title: "Default".to_string(),
            version: "1.0".to_string(),
            license: "MIT".to_string(),
            contact: ContactProperties {
                name: "Ops".to_string(),
                email: "ops@example.com".to_string(),
                ..ContactProperties::default()
            },
            ..DocketInfo::default()
        };
        let group = DocketInfo {
            title: "Users".to_string(),
            contact: ContactProperties {
                email: "users@example.com".to_string(),
                ..ContactProperties::default()
            },
            ..DocketInfo::default()
        };

        let info = resolve_group_metadata(&default, Some(&group));
        assert_eq!(info.title, "Users");
        assert_eq!(info.version, "1.0");
        assert_eq!(info.license, "MIT");
        assert_eq!(info.contact.name, "Ops");
        assert_eq!(info.contact.email, "users@example.com");
        assert_eq!(info.description, "");

        let untitled = DocketInfo::default();
        assert_eq!(resolve_group_metadata(&default, Some(&untitled)).title, "Default");
        assert_eq!(resolve_group_metadata(&default, None).title, "Default");
    }

    #[test]
    fn test_response_buckets_pass_through() {
        let global = GlobalResponseMessage {
            get: vec![
                GlobalResponseMessageBody {
                    code: 400,
                    message: "Bad Request".to_string(),
                    model_ref: String::new(),
                },
                GlobalResponseMessageBody {
                    code: 500,
                    message: "Server Error".to_string(),
                    model_ref: "ErrorBody".to_string(),
                },
            ],
            ..GlobalResponseMessage::default()
        };

        let buckets = build_response_message_buckets(&global);
        assert_eq!(buckets.len(), 8);
        let get = &buckets[&HttpMethod::Get];
        assert_eq!(get[0], ResponseMessage::new(400, "Bad Request"));
        assert_eq!(get[1].response_model, Some(ModelRef::new("ErrorBody")));
        assert!(buckets[&HttpMethod::Post].is_empty());
    }
}
