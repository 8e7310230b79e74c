//! JSON Schema generation from payload type descriptors.

use serde_json::{json, Map, Value};

use asyncapi_spec::{PayloadType, RecordType};

use crate::document::to_camel_case;
use crate::error::CompileError;

/// Default nesting limit for payload types.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Converts [`PayloadType`] descriptors into JSON Schema fragments.
#[derive(Debug, Clone, Copy)]
pub struct SchemaGenerator {
    max_depth: usize,
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl SchemaGenerator {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Generate the schema for `payload`.
    pub fn to_schema(&self, payload: &PayloadType) -> Result<Value, CompileError> {
        self.to_schema_at(payload, "payload")
    }

    /// Generate the schema for `payload`, reporting errors against `location`
    /// (the document path the schema is written to).
    pub fn to_schema_at(
        &self,
        payload: &PayloadType,
        location: &str,
    ) -> Result<Value, CompileError> {
        self.generate(payload, location, 0)
    }

    fn generate(
        &self,
        ty: &PayloadType,
        location: &str,
        depth: usize,
    ) -> Result<Value, CompileError> {
        if depth > self.max_depth {
            return Err(CompileError::Structural {
                location: location.to_string(),
                limit: self.max_depth,
            });
        }

        let schema = match ty {
            PayloadType::String => json!({ "type": "string" }),
            PayloadType::Integer => json!({ "type": "integer" }),
            PayloadType::Number => json!({ "type": "number" }),
            PayloadType::Boolean => json!({ "type": "boolean" }),
            PayloadType::Null => json!({ "type": "null" }),
            PayloadType::Any => json!({}),
            PayloadType::Date => json!({ "type": "string", "format": "date" }),
            PayloadType::DateTime => json!({ "type": "string", "format": "date-time" }),
            PayloadType::Uuid => json!({ "type": "string", "format": "uuid" }),
            PayloadType::Bytes => json!({ "type": "string", "contentEncoding": "base64" }),
            PayloadType::Array(item) => {
                let items = self.generate(item, &format!("{}.items", location), depth + 1)?;
                json!({ "type": "array", "items": items })
            }
            PayloadType::Set(item) => {
                let items = self.generate(item, &format!("{}.items", location), depth + 1)?;
                json!({ "type": "array", "items": items, "uniqueItems": true })
            }
            PayloadType::Map(value) => {
                let values = self.generate(
                    value,
                    &format!("{}.additionalProperties", location),
                    depth + 1,
                )?;
                json!({ "type": "object", "additionalProperties": values })
            }
            PayloadType::Optional(inner) => {
                let inner = self.generate(inner, &format!("{}.anyOf[0]", location), depth + 1)?;
                json!({ "anyOf": [inner, { "type": "null" }] })
            }
            PayloadType::Union(variants) => {
                if variants.is_empty() {
                    return Err(unsupported(location, format!("empty {}", ty.type_name())));
                }
                let mut any_of = Vec::with_capacity(variants.len());
                for (idx, variant) in variants.iter().enumerate() {
                    any_of.push(self.generate(
                        variant,
                        &format!("{}.anyOf[{}]", location, idx),
                        depth + 1,
                    )?);
                }
                json!({ "anyOf": any_of })
            }
            PayloadType::Enum(values) => {
                if values.is_empty() {
                    return Err(unsupported(location, format!("empty {}", ty.type_name())));
                }
                enum_schema(values)
            }
            PayloadType::Record(record) => self.record(record, location, depth)?,
            PayloadType::Opaque(_) => return Err(unsupported(location, ty.type_name())),
        };

        Ok(schema)
    }

    /// Object schema for a record. Fields are required unless nullable.
    ///
    /// An optional field publishes the schema of its inner type; other
    /// nullable fields keep their own schema.
    fn record(
        &self,
        record: &RecordType,
        location: &str,
        depth: usize,
    ) -> Result<Value, CompileError> {
        let mut properties = Map::with_capacity(record.fields.len());
        let mut required = Vec::new();

        for (field, ty) in &record.fields {
            let name = to_camel_case(field);
            let field_location = format!("{}.properties.{}", location, name);
            if properties.contains_key(&name) {
                return Err(unsupported(
                    &field_location,
                    format!(
                        "{} (field '{}' duplicates property '{}')",
                        record.name, field, name
                    ),
                ));
            }

            let published = match ty {
                PayloadType::Optional(inner) => inner.as_ref(),
                other => other,
            };
            let schema = self.generate(published, &field_location, depth + 1)?;
            if !ty.is_nullable() {
                required.push(Value::String(name.clone()));
            }
            properties.insert(name, schema);
        }

        let mut schema = Map::new();
        schema.insert("type".into(), Value::String("object".into()));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        Ok(Value::Object(schema))
    }
}

/// Generate the schema for `payload` with default limits.
pub fn to_schema(payload: &PayloadType) -> Result<Value, CompileError> {
    SchemaGenerator::default().to_schema(payload)
}

fn unsupported(location: &str, type_name: impl Into<String>) -> CompileError {
    CompileError::SchemaGeneration {
        location: location.to_string(),
        type_name: type_name.into(),
    }
}

/// `enum` schema, typed when every literal shares one JSON type.
fn enum_schema(values: &[Value]) -> Value {
    let mut schema = Map::new();
    if let Some(ty) = common_type(values) {
        schema.insert("type".into(), Value::String(ty.into()));
    }
    schema.insert("enum".into(), Value::Array(values.to_vec()));
    Value::Object(schema)
}

fn common_type(values: &[Value]) -> Option<&'static str> {
    let type_of = |v: &Value| match v {
        Value::String(_) => Some("string"),
        Value::Bool(_) => Some("boolean"),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some("integer"),
        Value::Number(_) => Some("number"),
        _ => None,
    };

    let first = type_of(values.first()?)?;
    let mut common = first;
    for value in &values[1..] {
        match (common, type_of(value)?) {
            (a, b) if a == b => {}
            ("integer", "number") | ("number", "integer") => common = "number",
            _ => return None,
        }
    }
    Some(common)
}
