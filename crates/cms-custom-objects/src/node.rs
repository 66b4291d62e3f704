//! ContentNode view of plain JSON documents

use cms_api::{ContentNode, FieldKind, FieldTypeDescriptor, FieldValue};
use serde_json::Value;

/// Link kind reported for object-valued fields.
const NODE_LINK: &str = "Entry";

/// A JSON object seen as a content node.
///
/// Field types are inferred from the values. Nothing is localized, so every
/// field has a single representation.
#[derive(Debug, Clone, Copy)]
pub struct JsonNode<'a>(&'a Value);

impl<'a> JsonNode<'a> {
    /// Wrap `value` when it is an object.
    pub fn new(value: &'a Value) -> Option<Self> {
        value.is_object().then_some(Self(value))
    }

    pub fn value(&self) -> &'a Value {
        self.0
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }
}

/// Type of a JSON value as a field.
pub fn infer_field_type(value: &Value) -> Option<FieldTypeDescriptor> {
    match value {
        Value::Null => None,
        Value::Bool(_) => Some(FieldTypeDescriptor::scalar(FieldKind::Boolean)),
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            Some(FieldTypeDescriptor::scalar(FieldKind::Integer))
        }
        Value::Number(_) => Some(FieldTypeDescriptor::scalar(FieldKind::Number)),
        Value::String(_) => Some(FieldTypeDescriptor::scalar(FieldKind::Text)),
        Value::Array(_) => Some(FieldTypeDescriptor::array_of(FieldKind::Text)),
        Value::Object(_) => Some(FieldTypeDescriptor::link(NODE_LINK)),
    }
}

impl<'a> ContentNode for JsonNode<'a> {
    type Value = JsonValue<'a>;

    fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn child(&self, name: &str) -> Option<Self> {
        JsonNode::new(self.get(name)?)
    }

    fn child_at(&self, name: &str, index: usize) -> Option<Self> {
        JsonNode::new(self.get(name)?.as_array()?.get(index)?)
    }

    fn field_type(&self, name: &str) -> Option<FieldTypeDescriptor> {
        infer_field_type(self.get(name)?)
    }

    fn field_locales(&self, _name: &str) -> Option<Vec<String>> {
        None
    }

    fn field_value(&self, name: &str, _locale: Option<&str>) -> Option<JsonValue<'a>> {
        self.get(name).map(JsonValue)
    }
}

/// A raw JSON field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonValue<'a>(pub &'a Value);

impl FieldValue for JsonValue<'_> {
    fn is_array(&self) -> bool {
        self.0.is_array()
    }

    fn element(&self, index: usize) -> Option<Self> {
        self.0.as_array()?.get(index).map(JsonValue)
    }

    fn text(&self) -> Option<String> {
        match self.0 {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn asset_url(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(true), Some(FieldKind::Boolean))]
    #[case(json!(13), Some(FieldKind::Integer))]
    #[case(json!(3.5), Some(FieldKind::Number))]
    #[case(json!("text"), Some(FieldKind::Text))]
    #[case(json!(["a"]), Some(FieldKind::Array))]
    #[case(json!({"a": 1}), Some(FieldKind::Link))]
    #[case(json!(null), None)]
    fn test_infer_field_type(#[case] value: Value, #[case] expected: Option<FieldKind>) {
        assert_eq!(infer_field_type(&value).map(|d| d.kind), expected);
    }

    #[test]
    fn test_navigation() {
        let document = json!({
            "header": { "title": "Welcome" },
            "teasers": [{ "name": "t0" }, "not a node"],
            "empty": null
        });
        let root = JsonNode::new(&document).unwrap();

        assert!(root.has_field("header"));
        assert!(!root.has_field("empty"));
        assert!(!root.has_field("missing"));
        assert_eq!(
            root.child("header").unwrap().value(),
            &json!({ "title": "Welcome" })
        );
        assert!(root.child_at("teasers", 0).is_some());
        assert!(root.child_at("teasers", 1).is_none());
        assert!(root.child_at("teasers", 2).is_none());
        assert!(root.child_at("header", 0).is_none());
        assert!(root.field_locales("header").is_none());
    }

    #[test]
    fn test_non_object_is_not_a_node() {
        assert!(JsonNode::new(&json!([1, 2])).is_none());
        assert!(JsonNode::new(&json!("x")).is_none());
    }

    #[rstest]
    #[case(json!("Hello"), Some("Hello"))]
    #[case(json!(false), Some("false"))]
    #[case(json!(42), Some("42"))]
    #[case(json!(2.5), Some("2.5"))]
    #[case(json!({"a": 1}), None)]
    #[case(json!([1]), None)]
    fn test_value_text(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(JsonValue(&value).text().as_deref(), expected);
    }
}
