//! JSON Schema helpers for MCP tool input validation.

use serde_json::{Map, Value};
use thiserror::Error;

/// Schema validation errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The input does not match the expected schema.
    #[error("schema validation failed: {message}")]
    ValidationFailed { message: String },
    /// The schema itself is malformed.
    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },
}

/// A single property of an object schema.
#[derive(Debug, Clone, Copy)]
pub struct SchemaProperty {
    /// Property name.
    pub name: &'static str,
    /// JSON type name (`string`, `number`, ...).
    pub json_type: &'static str,
    /// Property description.
    pub description: &'static str,
    /// Whether the property is required.
    pub required: bool,
}

/// Builds an `{"type":"object"}` JSON Schema from a property list.
pub fn object_schema(properties: &[SchemaProperty]) -> Value {
    let mut props = Map::new();
    let mut required = Vec::new();

    for p in properties {
        let mut prop = Map::new();
        prop.insert("type".to_string(), Value::String(p.json_type.to_string()));
        prop.insert(
            "description".to_string(),
            Value::String(p.description.to_string()),
        );
        props.insert(p.name.to_string(), Value::Object(prop));
        if p.required {
            required.push(Value::String(p.name.to_string()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(props));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(schema)
}

/// Checks that a JSON value contains required properties from a schema.
///
/// This is a minimal validator: required fields only, no type checks.
pub fn validate_required_fields(schema: &Value, input: &Value) -> Result<(), SchemaError> {
    let required = match schema.get("required") {
        Some(Value::Array(arr)) => arr,
        _ => return Ok(()),
    };

    let input_obj = input
        .as_object()
        .ok_or_else(|| SchemaError::ValidationFailed {
            message: "input must be an object".to_string(),
        })?;

    for field in required {
        let field_name = field.as_str().ok_or_else(|| SchemaError::InvalidSchema {
            message: "required field names must be strings".to_string(),
        })?;
        if !input_obj.contains_key(field_name) {
            return Err(SchemaError::ValidationFailed {
                message: format!("missing required field: {field_name}"),
            });
        }
    }

    Ok(())
}

/// Extracts a string field from an object input.
pub fn string_field<'a>(input: &'a Value, field: &str) -> Result<&'a str, SchemaError> {
    match input.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(SchemaError::ValidationFailed {
            message: format!("field '{field}' must be a string, got {}", type_name(other)),
        }),
        None => Err(SchemaError::ValidationFailed {
            message: format!("missing required field: {field}"),
        }),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEXT: SchemaProperty = SchemaProperty {
        name: "text",
        json_type: "string",
        description: "Input text",
        required: true,
    };

    #[test]
    fn object_schema_lists_required() {
        let schema = object_schema(&[TEXT]);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["text"]["type"], "string");
        assert_eq!(schema["required"][0], "text");
    }

    #[test]
    fn object_schema_without_properties() {
        let schema = object_schema(&[]);
        assert!(schema["properties"].as_object().expect("obj").is_empty());
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn validates_required_fields() {
        let schema = object_schema(&[TEXT]);
        assert!(validate_required_fields(&schema, &json!({"text": "a b"})).is_ok());
    }

    #[test]
    fn rejects_missing_required_field() {
        let schema = object_schema(&[TEXT]);
        let err = validate_required_fields(&schema, &json!({})).expect_err("missing");
        assert!(err.to_string().contains("missing required field: text"));
    }

    #[test]
    fn non_object_input_rejected() {
        let schema = json!({"required": ["a"]});
        assert!(validate_required_fields(&schema, &json!(42)).is_err());
    }

    #[test]
    fn no_required_array_passes() {
        let schema = json!({"properties": {"x": {"type": "string"}}});
        assert!(validate_required_fields(&schema, &json!({})).is_ok());
    }

    #[test]
    fn string_field_extracts_value() {
        let input = json!({"text": "hello"});
        assert_eq!(string_field(&input, "text").expect("str"), "hello");
    }

    #[test]
    fn string_field_rejects_wrong_type() {
        let input = json!({"text": 12});
        let err = string_field(&input, "text").expect_err("type");
        assert!(err.to_string().contains("got number"));
    }

    #[test]
    fn string_field_accepts_empty_string() {
        let input = json!({"text": ""});
        assert_eq!(string_field(&input, "text").expect("str"), "");
    }
}
