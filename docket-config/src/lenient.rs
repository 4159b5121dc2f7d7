//! Field deserializers that accept a typed value or its string spelling.
//!
//! Environment variables and `.env` files only carry strings, while YAML and
//! TOML carry real booleans and numbers. Use these with
//! `#[serde(deserialize_with = "...")]` on fields that can come from either.

use serde::de::{Deserialize, DeserializeOwned, Deserializer, Error, IntoDeserializer};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Flex<T> {
    Value(T),
    Text(String),
}

fn convert_bool<E: Error>(text: &str) -> Result<bool, E> {
    match text.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(E::custom(format!("invalid boolean value '{}'", other))),
    }
}

fn convert_number<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: Error,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| E::custom(format!("invalid number '{}': {}", text, e)))
}

/// Boolean from `true`/`false` or one of `true|on|yes|1`, `false|off|no|0`.
pub fn bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Flex::<bool>::deserialize(deserializer)? {
        Flex::Value(value) => Ok(value),
        Flex::Text(text) => convert_bool(&text),
    }
}

/// Optional variant of [`bool`]; `null` stays unset.
pub fn option_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    match Option::<Flex<bool>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flex::Value(value)) => Ok(Some(value)),
        Some(Flex::Text(text)) => convert_bool(&text).map(Some),
    }
}

/// Permissive boolean: only a case-insensitive `"true"` is true and any other
/// string is false. Never fails on strings.
pub fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Option::<Flex<bool>>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flex::Value(value)) => Ok(value),
        Some(Flex::Text(text)) => Ok(text.trim().eq_ignore_ascii_case("true")),
    }
}

/// Number from a numeric value or a numeric string.
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Flex::<T>::deserialize(deserializer)? {
        Flex::Value(value) => Ok(value),
        Flex::Text(text) => convert_number(&text),
    }
}

/// Optional variant of [`number`]; `null` stays unset.
pub fn option_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<Flex<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flex::Value(value)) => Ok(Some(value)),
        Some(Flex::Text(text)) => convert_number(&text).map(Some),
    }
}

/// String from a string, number or boolean. `null` becomes the empty string.
///
/// Numbers keep their written form, so `1.0` binds as `"1.0"`.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected a scalar, found {}", other))),
    }
}

/// Optional keyword enum, matched case-insensitively against its lowercase
/// variant names. `null` and blank strings stay unset.
pub fn option_keyword<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let keyword = text.trim().to_lowercase();
    if keyword.is_empty() {
        return Ok(None);
    }
    T::deserialize(<&str as IntoDeserializer<'_, D::Error>>::into_deserializer(&keyword)).map(Some)
}

/// Optional value that is either a switch or free text. A boolean, or the
/// strings `true`/`false` in any case, give the switch; other text is kept.
pub fn option_switch_or_text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<bool> + From<String>,
{
    Ok(match Option::<Flex<bool>>::deserialize(deserializer)? {
        None => None,
        Some(Flex::Value(value)) => Some(T::from(value)),
        Some(Flex::Text(text)) => match text.trim().to_lowercase().as_str() {
            "true" => Some(T::from(true)),
            "false" => Some(T::from(false)),
            _ => Some(T::from(text)),
        },
    })
}

/// List of strings from a sequence or from one comma-separated string.
/// `null` and blank strings give an empty list; entries are trimmed.
pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<Flex<Vec<String>>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Flex::Value(items)) => items,
        Some(Flex::Text(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::bool")]
        flag: bool,
        #[serde(default, deserialize_with = "super::option_bool")]
        maybe: Option<bool>,
        #[serde(default, deserialize_with = "super::truthy")]
        required: bool,
        #[serde(default, deserialize_with = "super::number")]
        code: u16,
        #[serde(default, deserialize_with = "super::option_number")]
        depth: Option<i32>,
        #[serde(default, deserialize_with = "super::string")]
        version: String,
        #[serde(default, deserialize_with = "super::string_list")]
        paths: Vec<String>,
    }

    fn fields(value: serde_json::Value) -> Result<Fields, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_typed_values() {
        let p = fields(json!({
            "flag": true, "maybe": false, "required": true,
            "code": 404, "depth": -1, "version": "1.0"
        }))
        .unwrap();
        assert!(p.flag);
        assert_eq!(p.maybe, Some(false));
        assert!(p.required);
        assert_eq!(p.code, 404);
        assert_eq!(p.depth, Some(-1));
        assert_eq!(p.version, "1.0");
    }

    #[test]
    fn test_string_spellings() {
        let p = fields(json!({
            "flag": "yes", "maybe": "OFF", "required": "TRUE",
            "code": " 500 ", "depth": "3", "version": 2
        }))
        .unwrap();
        assert!(p.flag);
        assert_eq!(p.maybe, Some(false));
        assert!(p.required);
        assert_eq!(p.code, 500);
        assert_eq!(p.depth, Some(3));
        assert_eq!(p.version, "2");
    }

    #[test]
    fn test_string_keeps_number_text() {
        let p = fields(json!({"version": 1.0})).unwrap();
        assert_eq!(p.version, "1.0");
        let p = fields(json!({"version": 2.5})).unwrap();
        assert_eq!(p.version, "2.5");
        let p = fields(json!({"version": true})).unwrap();
        assert_eq!(p.version, "true");
        assert!(fields(json!({"version": ["1"]})).is_err());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Expansion {
        None,
        List,
    }

    #[derive(Debug, PartialEq)]
    enum Filter {
        On(bool),
        Text(String),
    }

    impl From<bool> for Filter {
        fn from(value: bool) -> Self {
            Filter::On(value)
        }
    }

    impl From<String> for Filter {
        fn from(value: String) -> Self {
            Filter::Text(value)
        }
    }

    #[derive(Debug, Deserialize)]
    struct UiFields {
        #[serde(default, deserialize_with = "super::option_keyword")]
        expansion: Option<Expansion>,
        #[serde(default, deserialize_with = "super::option_switch_or_text")]
        filter: Option<Filter>,
    }

    #[test]
    fn test_keyword_ignores_case() {
        let d: UiFields = serde_json::from_value(json!({"expansion": " LIST "})).unwrap();
        assert_eq!(d.expansion, Some(Expansion::List));
        let d: UiFields = serde_json::from_value(json!({"expansion": "none"})).unwrap();
        assert_eq!(d.expansion, Some(Expansion::None));
        let d: UiFields = serde_json::from_value(json!({"expansion": ""})).unwrap();
        assert_eq!(d.expansion, None);
        assert!(serde_json::from_value::<UiFields>(json!({"expansion": "sideways"})).is_err());
    }

    #[test]
    fn test_switch_or_text() {
        let d: UiFields = serde_json::from_value(json!({"filter": "TRUE"})).unwrap();
        assert_eq!(d.filter, Some(Filter::On(true)));
        let d: UiFields = serde_json::from_value(json!({"filter": false})).unwrap();
        assert_eq!(d.filter, Some(Filter::On(false)));
        let d: UiFields = serde_json::from_value(json!({"filter": "pets"})).unwrap();
        assert_eq!(d.filter, Some(Filter::Text("pets".to_string())));
        let d: UiFields = serde_json::from_value(json!({})).unwrap();
        assert_eq!(d.filter, None);
    }

    #[test]
    fn test_truthy_never_fails() {
        let p = fields(json!({"required": "maybe"})).unwrap();
        assert!(!p.required);
        let p = fields(json!({"required": null})).unwrap();
        assert!(!p.required);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let p = fields(json!({})).unwrap();
        assert!(!p.flag);
        assert_eq!(p.maybe, None);
        assert_eq!(p.code, 0);
        assert_eq!(p.depth, None);
        assert_eq!(p.version, "");
    }

    #[test]
    fn test_invalid_strings_rejected() {
        assert!(fields(json!({"flag": "sometimes"})).is_err());
        assert!(fields(json!({"code": "four hundred"})).is_err());
        assert!(fields(json!({"depth": "deep"})).is_err());
    }

    #[test]
    fn test_string_list_forms() {
        let p = fields(json!({"paths": ["/api/**", "/v2/**"]})).unwrap();
        assert_eq!(p.paths, ["/api/**", "/v2/**"]);
        let p = fields(json!({"paths": " /api/** , /v2/**,"})).unwrap();
        assert_eq!(p.paths, ["/api/**", "/v2/**"]);
        let p = fields(json!({"paths": null})).unwrap();
        assert!(p.paths.is_empty());
    }
}
