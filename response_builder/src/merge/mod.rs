//! Recursive configuration merging and priority ordering.
//!
//! [`merge_config`] overlays one configuration node onto another without
//! touching either input, refusing to change the structural [`Category`] of
//! an existing key. [`sort_by_pri`] orders sibling entries by their optional
//! `pri` field so pluggable entries can declare precedence.

use std::cmp::Reverse;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::kind::{Category, Inspect};
use crate::{BuilderError, BuilderResult, validator};

/// Field holding the priority of an entry.
pub const PRIORITY_KEY: &str = "pri";

/// Merges `merging` into a copy of `original`.
///
/// Behaviour per key of `merging`:
/// - absent from `original`: appended as-is;
/// - both mappings: merged recursively;
/// - both lists: merged position by position, extra items appended;
/// - a list and a mapping: the list is read as a mapping keyed by position
///   (`"0"`, `"1"`, ...) and the two are merged recursively into a mapping;
/// - a container and a scalar: [`BuilderError::ConfigTypeConflict`];
/// - both scalars: the merging value wins, whatever its kind.
///
/// Keys of `original` keep their position in the result.
///
/// # Errors
///
/// Returns [`BuilderError::ConfigTypeConflict`] naming the dotted path of the
/// first key whose categories differ.
///
/// # Examples
///
/// ```rust
/// use response_builder::merge::merge_config;
/// use serde_json::json;
///
/// let original = json!({"a": 1, "b": {"x": 1}});
/// let merging = json!({"b": {"y": 2}, "c": 3});
/// let merged = merge_config(
///     original.as_object().expect("object"),
///     merging.as_object().expect("object"),
/// )?;
/// assert_eq!(
///     serde_json::Value::Object(merged),
///     json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3})
/// );
/// # Ok::<_, std::sync::Arc<response_builder::BuilderError>>(())
/// ```
pub fn merge_config(
    original: &Map<String, Value>,
    merging: &Map<String, Value>,
) -> BuilderResult<Map<String, Value>> {
    merge_mapping(original, merging, "")
}

fn merge_mapping(
    original: &Map<String, Value>,
    merging: &Map<String, Value>,
    path: &str,
) -> BuilderResult<Map<String, Value>> {
    let mut merged = original.clone();
    for (key, incoming) in merging {
        let value = match original.get(key) {
            Some(existing) => merge_entry(existing, incoming, &child_path(path, key))?,
            None => incoming.clone(),
        };
        merged.insert(key.clone(), value);
    }
    Ok(merged)
}

fn merge_list(original: &[Value], merging: &[Value], path: &str) -> BuilderResult<Vec<Value>> {
    let mut merged = Vec::with_capacity(original.len().max(merging.len()));
    for (index, existing) in original.iter().enumerate() {
        let value = match merging.get(index) {
            Some(incoming) => merge_entry(existing, incoming, &child_path(path, &index.to_string()))?,
            None => existing.clone(),
        };
        merged.push(value);
    }
    merged.extend(merging.iter().skip(original.len()).cloned());
    Ok(merged)
}

fn merge_entry(existing: &Value, incoming: &Value, path: &str) -> BuilderResult<Value> {
    let original = Category::of(existing);
    let merging = Category::of(incoming);
    if original != merging {
        tracing::trace!(key = path, %original, %merging, "configuration type conflict");
        return Err(Arc::new(BuilderError::type_conflict(path, original, merging)));
    }
    match (existing, incoming) {
        (Value::Object(base), Value::Object(layer)) => {
            merge_mapping(base, layer, path).map(Value::Object)
        }
        (Value::Array(base), Value::Array(layer)) => merge_list(base, layer, path).map(Value::Array),
        (Value::Object(base), Value::Array(layer)) => {
            merge_mapping(base, &indexed(layer), path).map(Value::Object)
        }
        (Value::Array(base), Value::Object(layer)) => {
            merge_mapping(&indexed(base), layer, path).map(Value::Object)
        }
        _ => Ok(incoming.clone()),
    }
}

fn indexed(list: &[Value]) -> Map<String, Value> {
    list.iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item.clone()))
        .collect()
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

/// Reorders `map` by descending `pri`, keeping ties in their original order.
///
/// Entries that are not mappings, or carry no `pri` (or a `null` one), rank
/// as priority 0. Only the top level of `map` is reordered.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidType`] naming `<key>.pri` when a priority
/// is present but not an integer; `map` is left untouched in that case.
///
/// # Examples
///
/// ```rust
/// use response_builder::merge::sort_by_pri;
/// use serde_json::json;
///
/// let mut converters = json!({
///     "plain": {"handler": "to_array"},
///     "model": {"handler": "to_array", "pri": 10},
///     "legacy": {"handler": "to_array", "pri": -5},
/// });
/// let map = converters.as_object_mut().expect("object");
/// sort_by_pri(map)?;
/// let order: Vec<&str> = map.keys().map(String::as_str).collect();
/// assert_eq!(order, ["model", "plain", "legacy"]);
/// # Ok::<_, std::sync::Arc<response_builder::BuilderError>>(())
/// ```
pub fn sort_by_pri(map: &mut Map<String, Value>) -> BuilderResult<()> {
    let priorities = map
        .iter()
        .map(|(key, entry)| priority_of(key, entry))
        .collect::<BuilderResult<Vec<_>>>()?;
    let mut ranked: Vec<(i128, (String, Value))> = priorities
        .into_iter()
        .zip(std::mem::take(map))
        .collect();
    ranked.sort_by_key(|(pri, _)| Reverse(*pri));
    *map = ranked.into_iter().map(|(_, entry)| entry).collect();
    Ok(())
}

fn priority_of(key: &str, entry: &Value) -> BuilderResult<i128> {
    let Some(pri) = entry.as_object().and_then(|node| node.get(PRIORITY_KEY)) else {
        return Ok(0);
    };
    if pri.is_null() {
        return Ok(0);
    }
    validator::assert_is_int(&child_path(key, PRIORITY_KEY), pri)?;
    Ok(pri.as_integer().unwrap_or_default())
}
