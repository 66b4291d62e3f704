//! Deep merge of JSON content documents
//!
//! A page stored as a base document with dependency documents is composed by
//! folding each dependency onto the base. Merging never mutates its inputs.

use serde_json::{Map, Value};

/// Merge `source` onto `target`, returning a new value.
///
/// - Values of different kinds are not merged: the result is `target`.
/// - Strings: the result is `source`.
/// - Arrays: `target`'s elements followed by `source`'s elements.
/// - Objects: fields present on both sides are merged recursively, fields
///   present on one side only are copied as they are.
/// - Other kinds (numbers, booleans, null): the result is `target`.
///
/// # Examples
///
/// ```
/// use cms_api::merge::merge;
/// use serde_json::json;
///
/// let merged = merge(&json!({"A": [1, 2]}), &json!({"A": [3, 4]}));
/// assert_eq!(merged, json!({"A": [3, 4, 1, 2]}));
/// ```
pub fn merge(source: &Value, target: &Value) -> Value {
    match (source, target) {
        (Value::String(_), Value::String(_)) => source.clone(),
        (Value::Array(source_items), Value::Array(target_items)) => Value::Array(
            target_items
                .iter()
                .chain(source_items)
                .cloned()
                .collect(),
        ),
        (Value::Object(source_map), Value::Object(target_map)) => {
            Value::Object(merge_objects(source_map, target_map))
        }
        _ => target.clone(),
    }
}

fn merge_objects(source: &Map<String, Value>, target: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::new();
    for (key, target_value) in target {
        let value = match source.get(key) {
            Some(source_value) => merge(source_value, target_value),
            None => target_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    for (key, source_value) in source {
        if !target.contains_key(key) {
            merged.insert(key.clone(), source_value.clone());
        }
    }
    merged
}

/// Fold `overrides` onto `base` in order.
///
/// Each override is merged as the source onto the accumulated result, so a
/// later override wins over earlier ones and over the base wherever the
/// per-kind rules of [`merge`] let the source win.
pub fn compose<'a, I>(base: &Value, overrides: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    overrides
        .into_iter()
        .fold(base.clone(), |acc, override_doc| merge(override_doc, &acc))
}
