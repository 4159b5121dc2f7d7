//! Dotted-key access into a configuration tree and relaxed key naming.
//!
//! Configuration is held as one nested [`Value`]. A key such as
//! `swagger.ui_config.deep_linking` walks one object level per segment.
//!
//! Relaxed naming makes `licenseUrl`, `license-url` and `license_url` the same
//! property: [`relax_keys`] rewrites every object key to its snake_case form
//! before binding, except the keys of maps whose entries are user-chosen names.

use heck::ToSnakeCase;
use serde_json::{Map, Value};

/// Split a dotted key into its non-empty segments.
pub fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('.').map(str::trim).filter(|s| !s.is_empty())
}

/// Find the value at a dotted key. The empty key addresses the root.
pub fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    segments(key).try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        _ => None,
    })
}

/// Insert `value` at a dotted key, creating intermediate tables.
///
/// A scalar sitting where a table is needed is replaced by the table.
pub fn insert(root: &mut Value, key: &str, value: Value) {
    let parts: Vec<&str> = segments(key).collect();
    let Some((last, parents)) = parts.split_last() else {
        *root = value;
        return;
    };

    let mut node = root;
    for part in parents {
        node = ensure_object(node)
            .entry((*part).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(node).insert((*last).to_string(), value);
}

fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced by an object"),
    }
}

/// Deep-merge `overlay` into `base`. Tables merge key by key; anything else
/// in the overlay replaces what was there.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Canonical (snake_case) spelling of a single key segment.
pub fn canonical_segment(segment: &str) -> String {
    segment.to_snake_case()
}

/// Canonical spelling of a dotted key.
pub fn canonical_key(key: &str) -> String {
    segments(key)
        .map(canonical_segment)
        .collect::<Vec<_>>()
        .join(".")
}

/// Rewrite object keys to their canonical spelling, recursively.
///
/// Entries of a table whose canonical key appears in `verbatim` keep their own
/// keys (e.g. user-named groups); their values are still relaxed. When two
/// spellings collapse to the same key the later one is merged over the
/// earlier one.
pub fn relax_keys(value: Value, verbatim: &[&str]) -> Value {
    relax(value, verbatim, false)
}

fn relax(value: Value, verbatim: &[&str], keep_keys: bool) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, child) in map {
                let canonical = canonical_segment(&key);
                let child_keeps = !keep_keys && verbatim.contains(&canonical.as_str());
                let relaxed = relax(child, verbatim, child_keeps);
                let name = if keep_keys { key } else { canonical };
                match out.get_mut(&name) {
                    Some(existing) => merge(existing, relaxed),
                    None => {
                        out.insert(name, relaxed);
                    }
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| relax(item, verbatim, false))
                .collect(),
        ),
        other => other,
    }
}

/// Map an environment variable name to a dotted key: lowercase, with `__`
/// separating nesting levels (`SWAGGER__BEAN_NAME` → `swagger.bean_name`).
pub fn env_key_to_path(key: &str) -> String {
    key.trim().to_lowercase().replace("__", ".")
}
