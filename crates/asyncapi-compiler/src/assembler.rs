//! Compilation of a [`Specification`] into its published document.
//!
//! The document is built in one traversal of the typed tree, with the
//! [`MessageRegistry`] as read-only context:
//!
//! - component message payloads and component schemas are expanded into
//!   JSON Schema;
//! - servers and channels lose their internal `name`;
//! - operation messages lose `contentType` and are replaced by a `$ref`
//!   when they name a shared component, or get an inline payload schema
//!   otherwise.

use serde_json::{json, Value};

use asyncapi_spec::{Channel, Components, Message, Operation, Server, Specification};

use crate::document::{mapping, try_mapping, Record, ToDocument};
use crate::error::CompileError;
use crate::fields;
use crate::registry::{MessageRegistry, ResolvedMessage};
use crate::schema::{SchemaGenerator, DEFAULT_MAX_DEPTH};

/// Options for compilation.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Maximum payload type nesting depth (default: 64).
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Compile a specification with default options.
pub fn compile(spec: &Specification) -> Result<Value, CompileError> {
    compile_with_options(spec, &CompileOptions::default())
}

/// Compile a specification.
///
/// Either the complete document is returned or the first error; there is no
/// partial output.
pub fn compile_with_options(
    spec: &Specification,
    options: &CompileOptions,
) -> Result<Value, CompileError> {
    let assembler = DocumentAssembler::new(spec, options)?;
    let document = assembler.assemble();
    match &document {
        Ok(_) => tracing::debug!(
            title = %spec.info.title,
            servers = spec.servers.len(),
            channels = spec.channels.len(),
            shared_messages = assembler.registry.len(),
            "specification compiled"
        ),
        Err(e) => tracing::debug!(title = %spec.info.title, error = %e, "compilation failed"),
    }
    document
}

/// Builds the published document for one specification.
pub struct DocumentAssembler<'a> {
    spec: &'a Specification,
    registry: MessageRegistry,
    schemas: SchemaGenerator,
}

impl<'a> DocumentAssembler<'a> {
    /// Prepare an assembler. Fails if the shared message table is ambiguous.
    pub fn new(spec: &'a Specification, options: &CompileOptions) -> Result<Self, CompileError> {
        let registry = MessageRegistry::build(spec.component_messages())?;
        Ok(Self {
            spec,
            registry,
            schemas: SchemaGenerator::new(options.max_depth),
        })
    }

    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }

    pub fn assemble(&self) -> Result<Value, CompileError> {
        use fields::specification::*;

        let spec = self.spec;
        let channels = try_mapping(&spec.channels, |id, channel| {
            self.channel(&format!("channels.{}", id), channel)
        })?;
        let components = spec
            .components
            .as_ref()
            .map(|c| self.components(c))
            .transpose()?;

        Ok(Record::new()
            .field(ASYNCAPI, &spec.asyncapi)
            .field(ID, &spec.id)
            .field(DEFAULT_CONTENT_TYPE, &spec.default_content_type)
            .field(INFO, &spec.info)
            .value(SERVERS, mapping(&spec.servers, server))
            .value(CHANNELS, channels)
            .value_opt(COMPONENTS, components)
            .build())
    }

    fn channel(&self, location: &str, channel: &Channel) -> Result<Value, CompileError> {
        use fields::channel::*;

        let subscribe = channel
            .subscribe
            .as_ref()
            .map(|op| self.operation(&format!("{}.subscribe", location), op))
            .transpose()?;
        let publish = channel
            .publish
            .as_ref()
            .map(|op| self.operation(&format!("{}.publish", location), op))
            .transpose()?;

        // `name` is internal and never published.
        Ok(Record::new()
            .field(DESCRIPTION, &channel.description)
            .value_opt(SUBSCRIBE, subscribe)
            .value_opt(PUBLISH, publish)
            .build())
    }

    fn operation(&self, location: &str, operation: &Operation) -> Result<Value, CompileError> {
        use fields::operation::*;

        let message_location = format!("{}.message", location);
        let message = match (
            self.registry
                .resolve(Some(operation), &self.schemas, &message_location)?,
            &operation.message,
        ) {
            (ResolvedMessage::Reference(path), _) => Some(json!({ "$ref": path })),
            (ResolvedMessage::InlinePayload(schema), Some(message)) => {
                Some(operation_message(message, Some(schema)))
            }
            (_, Some(message)) => Some(operation_message(message, None)),
            (_, None) => None,
        };

        Ok(Record::new()
            .field(OPERATION_ID, &operation.operation_id)
            .field(SUMMARY, &operation.summary)
            .field(DESCRIPTION, &operation.description)
            .value_opt(MESSAGE, message)
            .build())
    }

    fn components(&self, components: &Components) -> Result<Value, CompileError> {
        use fields::components::*;

        let messages = components
            .messages
            .as_ref()
            .map(|messages| {
                try_mapping(messages, |key, message| {
                    self.component_message(&format!("components.messages.{}", key), message)
                })
            })
            .transpose()?;
        let schemas = components
            .schemas
            .as_ref()
            .map(|schemas| {
                try_mapping(schemas, |key, payload| {
                    self.schemas
                        .to_schema_at(payload, &format!("components.schemas.{}", key))
                })
            })
            .transpose()?;

        Ok(Record::new()
            .value_opt(MESSAGES, messages)
            .value_opt(SCHEMAS, schemas)
            .build())
    }

    /// Shared messages keep their content type and publish an expanded payload.
    fn component_message(&self, location: &str, message: &Message) -> Result<Value, CompileError> {
        let payload_location = format!("{}.payload", location);
        let payload = message
            .payload
            .as_ref()
            .map(|p| self.schemas.to_schema_at(p, &payload_location))
            .transpose()?;
        Ok(message_record(message, payload, true))
    }
}

/// A server as published: every field except its internal name.
fn server(server: &Server) -> Value {
    match server.to_document() {
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .filter(|(key, _)| key != fields::server::NAME.output)
                .collect(),
        ),
        other => other,
    }
}

/// Operation messages never publish their content type.
fn operation_message(message: &Message, payload: Option<Value>) -> Value {
    message_record(message, payload, false)
}

fn message_record(message: &Message, payload: Option<Value>, with_content_type: bool) -> Value {
    use fields::message::*;

    let record = Record::new()
        .field(NAME, &message.name)
        .field(TITLE, &message.title)
        .field(SUMMARY, &message.summary)
        .field(DESCRIPTION, &message.description);
    let record = if with_content_type {
        record.field(CONTENT_TYPE, &message.content_type)
    } else {
        record
    };
    record.value_opt(PAYLOAD, payload).build()
}
