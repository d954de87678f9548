//! JSON Schema helpers for MCP tool input validation.

use serde_json::Value;
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

/// Checks tool arguments against an object schema.
///
/// This is a minimal validator: required properties must be present, and
/// properties declared as `"type": "string"` must hold strings. A `null`
/// input is treated as an empty object so that argument-less tools can be
/// called without `arguments`.
pub fn validate_arguments(schema: &Value, input: &Value) -> Result<(), SchemaError> {
    let empty = serde_json::Map::new();
    let input_obj = match input {
        Value::Object(obj) => obj,
        Value::Null => &empty,
        _ => {
            return Err(SchemaError::ValidationFailed {
                message: "arguments must be an object".to_string(),
            })
        }
    };

    if let Some(Value::Array(required)) = schema.get("required") {
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
    }

    if let Some(Value::Object(properties)) = schema.get("properties") {
        for (name, prop) in properties {
            let declared_string = prop.get("type").and_then(Value::as_str) == Some("string");
            match input_obj.get(name) {
                Some(value) if declared_string && !value.is_string() => {
                    return Err(SchemaError::ValidationFailed {
                        message: format!("field {name} must be a string"),
                    });
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Reads a string argument that [`validate_arguments`] has already checked.
pub fn string_arg<'a>(input: &'a Value, name: &str) -> Option<&'a str> {
    input.get(name).and_then(Value::as_str)
}
