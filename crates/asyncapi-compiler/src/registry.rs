//! Shared message lookup for `$ref` substitution.

use indexmap::IndexMap;
use serde_json::Value;

use asyncapi_spec::{Message, Operation};

use crate::error::CompileError;
use crate::schema::SchemaGenerator;

/// Prefix of every message reference written to the document.
pub const MESSAGE_REF_PREFIX: &str = "#/components/messages/";

/// Reference pointer for a components/messages key.
pub fn message_ref(key: &str) -> String {
    format!("{}{}", MESSAGE_REF_PREFIX, key)
}

/// How an operation's message is published.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedMessage {
    /// The message is a shared component; publish `{"$ref": path}`.
    Reference(String),
    /// No shared component matches; publish the message with this payload schema.
    InlinePayload(Value),
    /// Nothing to substitute; publish the message as serialized.
    Absent,
}

/// Index of declared message names to their components/messages keys.
#[derive(Debug, Clone, Default)]
pub struct MessageRegistry {
    by_name: IndexMap<String, String>,
}

impl MessageRegistry {
    /// Build the index from the components/messages table.
    ///
    /// Entries without a declared name are not addressable by name and are
    /// skipped. Two entries declaring the same name make resolution
    /// ambiguous and fail the build.
    pub fn build(messages: Option<&IndexMap<String, Message>>) -> Result<Self, CompileError> {
        let mut by_name: IndexMap<String, String> = IndexMap::new();

        for (key, message) in messages.into_iter().flatten() {
            let Some(name) = message.declared_name() else {
                continue;
            };
            if let Some(first) = by_name.get(name) {
                return Err(CompileError::DuplicateMessageName {
                    name: name.to_string(),
                    first: first.clone(),
                    second: key.clone(),
                });
            }
            by_name.insert(name.to_string(), key.clone());
        }

        tracing::debug!(shared_messages = by_name.len(), "message registry built");
        Ok(Self { by_name })
    }

    /// The components/messages key registered for a declared name.
    pub fn key_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Decide how an operation's message is published.
    ///
    /// A resolvable name wins over a payload: the components entry is the
    /// single source of truth for shared message shapes.
    pub fn resolve(
        &self,
        operation: Option<&Operation>,
        schemas: &SchemaGenerator,
        location: &str,
    ) -> Result<ResolvedMessage, CompileError> {
        let Some(message) = operation.and_then(|op| op.message.as_ref()) else {
            return Ok(ResolvedMessage::Absent);
        };

        if let Some(key) = message.declared_name().and_then(|name| self.key_for(name)) {
            return Ok(ResolvedMessage::Reference(message_ref(key)));
        }

        match &message.payload {
            Some(payload) => {
                let payload_location = format!("{}.payload", location);
                let schema = schemas.to_schema_at(payload, &payload_location)?;
                Ok(ResolvedMessage::InlinePayload(schema))
            }
            None => Ok(ResolvedMessage::Absent),
        }
    }
}
