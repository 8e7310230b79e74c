//! Generic serialization of typed values into document values.
//!
//! Every node kind of the specification model has one [`ToDocument`] impl:
//! records go through [`Record`], which applies the omission law (a field
//! whose value serializes to `null` or `""` is left out), mappings keep their
//! keys verbatim and in insertion order, sequences keep iteration order,
//! enumerants emit their underlying value and scalars pass through.
//!
//! Nodes whose output depends on the message registry (channels, operations,
//! messages, components) are written by the assembler on top of these
//! primitives.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use asyncapi_spec::{Contact, Info, License, ProtocolType, Server, ServerVariable};

use crate::fields::{self, FieldName};

/// Conversion of a typed node into a document value.
pub trait ToDocument {
    fn to_document(&self) -> Value;
}

/// Convert a snake_case field name to camelCase.
///
/// The first segment is kept as-is, each later segment gets its first
/// character upper-cased, and underscores are dropped. Names without
/// underscores (including ones already in camelCase) are returned unchanged.
pub fn to_camel_case(name: &str) -> String {
    let mut segments = name.split('_');
    let mut out = String::with_capacity(name.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Whether a serialized field value is dropped from its record.
pub fn is_omitted(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Builder for a record's document mapping.
#[derive(Debug, Default)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `value` and add it under the field's published name.
    pub fn field<T: ToDocument + ?Sized>(self, name: FieldName, value: &T) -> Self {
        self.value(name, value.to_document())
    }

    /// Add an already serialized value under the field's published name.
    pub fn value(mut self, name: FieldName, value: Value) -> Self {
        if !is_omitted(&value) {
            self.fields.insert(name.output.to_string(), value);
        }
        self
    }

    /// Add an optional, already serialized value.
    pub fn value_opt(self, name: FieldName, value: Option<Value>) -> Self {
        match value {
            Some(value) => self.value(name, value),
            None => self,
        }
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Serialize each map value, keeping keys verbatim.
pub fn mapping<T, F>(entries: &IndexMap<String, T>, mut f: F) -> Value
where
    F: FnMut(&T) -> Value,
{
    Value::Object(entries.iter().map(|(k, v)| (k.clone(), f(v))).collect())
}

/// Fallible form of [`mapping`]. `f` also receives the entry key.
pub fn try_mapping<T, E, F>(entries: &IndexMap<String, T>, mut f: F) -> Result<Value, E>
where
    F: FnMut(&str, &T) -> Result<Value, E>,
{
    let mut out = Map::with_capacity(entries.len());
    for (key, value) in entries {
        out.insert(key.clone(), f(key, value)?);
    }
    Ok(Value::Object(out))
}

impl ToDocument for str {
    fn to_document(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToDocument for String {
    fn to_document(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToDocument for bool {
    fn to_document(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToDocument for i64 {
    fn to_document(&self) -> Value {
        Value::from(*self)
    }
}

impl ToDocument for u64 {
    fn to_document(&self) -> Value {
        Value::from(*self)
    }
}

impl ToDocument for f64 {
    /// Non-finite numbers have no JSON form and serialize to `null`.
    fn to_document(&self) -> Value {
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl ToDocument for Value {
    fn to_document(&self) -> Value {
        self.clone()
    }
}

impl<T: ToDocument> ToDocument for Option<T> {
    fn to_document(&self) -> Value {
        match self {
            Some(value) => value.to_document(),
            None => Value::Null,
        }
    }
}

impl<T: ToDocument> ToDocument for [T] {
    fn to_document(&self) -> Value {
        Value::Array(self.iter().map(ToDocument::to_document).collect())
    }
}

impl<T: ToDocument> ToDocument for Vec<T> {
    fn to_document(&self) -> Value {
        self.as_slice().to_document()
    }
}

impl<T: ToDocument> ToDocument for IndexMap<String, T> {
    fn to_document(&self) -> Value {
        mapping(self, ToDocument::to_document)
    }
}

impl ToDocument for ProtocolType {
    fn to_document(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

impl ToDocument for Info {
    fn to_document(&self) -> Value {
        use fields::info::*;
        Record::new()
            .field(TITLE, &self.title)
            .field(VERSION, &self.version)
            .field(DESCRIPTION, &self.description)
            .field(TERMS_OF_SERVICE, &self.terms_of_service)
            .field(CONTACT, &self.contact)
            .field(LICENSE, &self.license)
            .build()
    }
}

impl ToDocument for Contact {
    fn to_document(&self) -> Value {
        use fields::contact::*;
        Record::new()
            .field(NAME, &self.name)
            .field(URL, &self.url)
            .field(EMAIL, &self.email)
            .build()
    }
}

impl ToDocument for License {
    fn to_document(&self) -> Value {
        use fields::license::*;
        Record::new()
            .field(NAME, &self.name)
            .field(URL, &self.url)
            .build()
    }
}

impl ToDocument for Server {
    fn to_document(&self) -> Value {
        use fields::server::*;
        Record::new()
            .field(NAME, &self.name)
            .field(URL, &self.url)
            .field(PROTOCOL, &self.protocol)
            .field(PROTOCOL_VERSION, &self.protocol_version)
            .field(DESCRIPTION, &self.description)
            .field(VARIABLES, &self.variables)
            .build()
    }
}

impl ToDocument for ServerVariable {
    fn to_document(&self) -> Value {
        use fields::server_variable::*;
        Record::new()
            .field(DEFAULT, &self.default)
            .field(DESCRIPTION, &self.description)
            .field(ENUM_VALUES, &self.enum_values)
            .build()
    }
}
