//! Payload type descriptors.
//!
//! A [`PayloadType`] describes the structural shape of a message body. It is
//! opaque to the specification itself and only consumed by schema generation.
//!
//! In source files scalars are written as plain strings (`string`,
//! `date-time`, ...) and composites as single-key mappings:
//!
//! ```yaml
//! payload:
//!   record:
//!     name: OrderCreated
//!     fields:
//!       order_id: string
//!       tags: { array: string }
//!       note: { optional: string }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadType {
    String,
    Integer,
    Number,
    Boolean,
    Null,
    /// Any JSON value.
    Any,
    Date,
    DateTime,
    Uuid,
    Bytes,
    /// Ordered sequence of `T`.
    Array(Box<PayloadType>),
    /// Sequence of unique `T`.
    Set(Box<PayloadType>),
    /// String-keyed mapping with `T` values.
    Map(Box<PayloadType>),
    /// `T` or null.
    Optional(Box<PayloadType>),
    /// Exactly one of the listed types.
    Union(Vec<PayloadType>),
    /// One of a fixed set of literal values.
    Enum(Vec<serde_json::Value>),
    Record(RecordType),
    /// A type the builder could not describe structurally, by type name.
    Opaque(String),
}

impl PayloadType {
    pub fn array(item: PayloadType) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn set(item: PayloadType) -> Self {
        Self::Set(Box::new(item))
    }

    pub fn map(value: PayloadType) -> Self {
        Self::Map(Box::new(value))
    }

    pub fn optional(inner: PayloadType) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Record type with fields in declaration order.
    pub fn record<N, F>(name: impl Into<String>, fields: F) -> Self
    where
        N: Into<String>,
        F: IntoIterator<Item = (N, PayloadType)>,
    {
        Self::Record(RecordType {
            name: name.into(),
            fields: fields.into_iter().map(|(n, t)| (n.into(), t)).collect(),
        })
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Whether `null` is a valid value of this type.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Null | Self::Any | Self::Optional(_) => true,
            Self::Union(variants) => variants.iter().any(PayloadType::is_nullable),
            Self::Enum(values) => values.iter().any(serde_json::Value::is_null),
            _ => false,
        }
    }

    /// Short human-readable name used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::String => "string".into(),
            Self::Integer => "integer".into(),
            Self::Number => "number".into(),
            Self::Boolean => "boolean".into(),
            Self::Null => "null".into(),
            Self::Any => "any".into(),
            Self::Date => "date".into(),
            Self::DateTime => "date-time".into(),
            Self::Uuid => "uuid".into(),
            Self::Bytes => "bytes".into(),
            Self::Array(item) => format!("array<{}>", item.type_name()),
            Self::Set(item) => format!("set<{}>", item.type_name()),
            Self::Map(value) => format!("map<{}>", value.type_name()),
            Self::Optional(inner) => format!("optional<{}>", inner.type_name()),
            Self::Union(_) => "union".into(),
            Self::Enum(_) => "enum".into(),
            Self::Record(record) => record.name.clone(),
            Self::Opaque(name) => name.clone(),
        }
    }
}

/// A structured type with named fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordType {
    pub name: String,
    /// Field name (snake_case as declared) to field type.
    #[serde(default)]
    pub fields: IndexMap<String, PayloadType>,
}
