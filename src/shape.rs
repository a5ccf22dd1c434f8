//! Expected output shapes
//!
//! A shape is the caller's declaration of the fields a structured generation
//! must return. Producers emit a JSON object; [`ExpectedShape::project`] keeps
//! only the requested fields and checks each value against its declared type.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Result of a structured generation: the populated subset of the shape
pub type SynthesisResult = Map<String, Value>;

/// Declared type of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Enum { values: Vec<String> },
    Array { items: Box<FieldType> },
    Object { fields: Vec<FieldSpec> },
}

impl FieldType {
    pub fn string_list() -> Self {
        FieldType::Array {
            items: Box::new(FieldType::String),
        }
    }

    pub fn enumeration(values: &[&str]) -> Self {
        FieldType::Enum {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn object_list(fields: Vec<FieldSpec>) -> Self {
        FieldType::Array {
            items: Box::new(FieldType::Object { fields }),
        }
    }

    fn describe(&self) -> String {
        match self {
            FieldType::String => "string".to_string(),
            FieldType::Number => "number".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::Enum { values } => format!("one of [{}]", values.join(", ")),
            FieldType::Array { items } => format!("array of {}", items.describe()),
            FieldType::Object { .. } => "object".to_string(),
        }
    }

    fn json_schema(&self) -> Value {
        match self {
            FieldType::String => json!({ "type": "string" }),
            FieldType::Number => json!({ "type": "number" }),
            FieldType::Boolean => json!({ "type": "boolean" }),
            FieldType::Enum { values } => json!({ "type": "string", "enum": values }),
            FieldType::Array { items } => json!({ "type": "array", "items": items.json_schema() }),
            FieldType::Object { fields } => object_schema(fields),
        }
    }
}

/// A named field in a shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(flatten)]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl FieldSpec {
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            optional: true,
        }
    }
}

/// Caller-declared output shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedShape {
    pub fields: Vec<FieldSpec>,
}

impl ExpectedShape {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Check the shape is usable: non-empty, unique names, non-empty enums and objects.
    pub fn validate(&self) -> Result<(), BridgeError> {
        validate_fields(&self.fields, "")
    }

    /// JSON Schema rendition, sent to remote backends.
    pub fn to_json_schema(&self) -> Value {
        object_schema(&self.fields)
    }

    /// Project a produced object onto this shape.
    ///
    /// Unrequested fields are dropped and optional fields without a producer are
    /// omitted. A required field without a producer fails with
    /// [`BridgeError::UnproducibleField`].
    pub fn project(&self, produced: &Map<String, Value>) -> Result<SynthesisResult, BridgeError> {
        project_fields(&self.fields, produced, "")
    }
}

fn object_schema(fields: &[FieldSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in fields {
        properties.insert(field.name.clone(), field.field_type.json_schema());
        if !field.optional {
            required.push(Value::String(field.name.clone()));
        }
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn validate_fields(fields: &[FieldSpec], prefix: &str) -> Result<(), BridgeError> {
    if fields.is_empty() {
        let location = if prefix.is_empty() { "shape" } else { prefix };
        return Err(BridgeError::InvalidShape(format!(
            "{} must declare at least one field",
            location
        )));
    }

    let mut seen = HashSet::new();
    for field in fields {
        let path = field_path(prefix, &field.name);
        if field.name.trim().is_empty() {
            return Err(BridgeError::InvalidShape(format!(
                "empty field name in {}",
                if prefix.is_empty() { "shape" } else { prefix }
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(BridgeError::InvalidShape(format!(
                "duplicate field '{}'",
                path
            )));
        }
        validate_type(&field.field_type, &path)?;
    }
    Ok(())
}

fn validate_type(field_type: &FieldType, path: &str) -> Result<(), BridgeError> {
    match field_type {
        FieldType::Enum { values } if values.is_empty() => Err(BridgeError::InvalidShape(
            format!("enum field '{}' has no allowed values", path),
        )),
        FieldType::Array { items } => validate_type(items, &format!("{}[]", path)),
        FieldType::Object { fields } => validate_fields(fields, path),
        _ => Ok(()),
    }
}

fn project_fields(
    fields: &[FieldSpec],
    produced: &Map<String, Value>,
    prefix: &str,
) -> Result<SynthesisResult, BridgeError> {
    let mut result = Map::new();
    for field in fields {
        let path = field_path(prefix, &field.name);
        match produced.get(&field.name) {
            None | Some(Value::Null) => {
                if !field.optional {
                    return Err(BridgeError::UnproducibleField(path));
                }
            }
            Some(value) => {
                let projected = project_value(&field.field_type, value, &path)?;
                result.insert(field.name.clone(), projected);
            }
        }
    }
    Ok(result)
}

fn project_value(field_type: &FieldType, value: &Value, path: &str) -> Result<Value, BridgeError> {
    let mismatch = || BridgeError::ShapeMismatch {
        field: path.to_string(),
        expected: field_type.describe(),
        actual: value_kind(value).to_string(),
    };

    match (field_type, value) {
        (FieldType::String, Value::String(_))
        | (FieldType::Number, Value::Number(_))
        | (FieldType::Boolean, Value::Bool(_)) => Ok(value.clone()),
        (FieldType::Enum { values }, Value::String(s)) => {
            if values.iter().any(|allowed| allowed == s) {
                Ok(value.clone())
            } else {
                Err(BridgeError::ShapeMismatch {
                    field: path.to_string(),
                    expected: field_type.describe(),
                    actual: format!("\"{}\"", s),
                })
            }
        }
        (FieldType::Array { items }, Value::Array(elements)) => elements
            .iter()
            .enumerate()
            .map(|(i, element)| project_value(items, element, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (FieldType::Object { fields }, Value::Object(map)) => {
            project_fields(fields, map, path).map(Value::Object)
        }
        _ => Err(mismatch()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
