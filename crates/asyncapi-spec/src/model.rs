use indexmap::IndexMap;
use serde::Deserialize;

use crate::payload::PayloadType;

/// AsyncAPI version emitted when the source does not declare one.
pub const DEFAULT_ASYNCAPI_VERSION: &str = "2.0.0";

fn default_asyncapi_version() -> String {
    DEFAULT_ASYNCAPI_VERSION.to_string()
}

/// Root of an asynchronous API contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    /// The AsyncAPI version string (e.g. "2.0.0").
    #[serde(default = "default_asyncapi_version")]
    pub asyncapi: String,
    /// Application identifier (URI).
    #[serde(default)]
    pub id: Option<String>,
    /// Content type applied to messages that do not declare one.
    #[serde(default)]
    pub default_content_type: Option<String>,
    pub info: Info,
    /// Servers by id. The map key is the published name.
    #[serde(default)]
    pub servers: IndexMap<String, Server>,
    /// Channels by id. The map key is the published name.
    #[serde(default)]
    pub channels: IndexMap<String, Channel>,
    #[serde(default)]
    pub components: Option<Components>,
}

impl Specification {
    pub fn new(info: Info) -> Self {
        Self {
            asyncapi: default_asyncapi_version(),
            id: None,
            default_content_type: None,
            info,
            servers: IndexMap::new(),
            channels: IndexMap::new(),
            components: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_default_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.default_content_type = Some(content_type.into());
        self
    }

    pub fn with_server(mut self, id: impl Into<String>, server: Server) -> Self {
        self.servers.insert(id.into(), server);
        self
    }

    pub fn with_channel(mut self, id: impl Into<String>, channel: Channel) -> Self {
        self.channels.insert(id.into(), channel);
        self
    }

    pub fn with_components(mut self, components: Components) -> Self {
        self.components = Some(components);
        self
    }

    /// The shared message table, if the specification declares one.
    pub fn component_messages(&self) -> Option<&IndexMap<String, Message>> {
        self.components.as_ref().and_then(|c| c.messages.as_ref())
    }
}

/// General information about the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub terms_of_service: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub license: Option<License>,
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
            terms_of_service: None,
            contact: None,
            license: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Transport protocol spoken by a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolType {
    Amqp,
    Amqps,
    Http,
    Https,
    Jms,
    Kafka,
    KafkaSecure,
    Mqtt,
    SecureMqtt,
    Stomp,
    Stomps,
    Ws,
    Wss,
    Redis,
}

impl ProtocolType {
    /// The protocol name as written in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amqp => "amqp",
            Self::Amqps => "amqps",
            Self::Http => "http",
            Self::Https => "https",
            Self::Jms => "jms",
            Self::Kafka => "kafka",
            Self::KafkaSecure => "kafka-secure",
            Self::Mqtt => "mqtt",
            Self::SecureMqtt => "secure-mqtt",
            Self::Stomp => "stomp",
            Self::Stomps => "stomps",
            Self::Ws => "ws",
            Self::Wss => "wss",
            Self::Redis => "redis",
        }
    }
}

/// A message broker or endpoint the API is reachable on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Internal name used while building the specification. Never published;
    /// the servers map key is authoritative.
    #[serde(default)]
    pub name: String,
    pub url: String,
    pub protocol: ProtocolType,
    #[serde(default)]
    pub protocol_version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: Option<IndexMap<String, ServerVariable>>,
}

impl Server {
    pub fn new(name: impl Into<String>, url: impl Into<String>, protocol: ProtocolType) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            protocol,
            protocol_version: None,
            description: None,
            variables: None,
        }
    }

    pub fn with_protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), variable);
        self
    }
}

/// Substitution variable for a templated server URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerVariable {
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "enum")]
    pub enum_values: Option<Vec<String>>,
}

/// An addressable topic/queue with its operations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Channel {
    /// Internal name, stripped from the published document like [`Server::name`].
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subscribe: Option<Operation>,
    #[serde(default)]
    pub publish: Option<Operation>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            subscribe: None,
            publish: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_subscribe(mut self, operation: Operation) -> Self {
        self.subscribe = Some(operation);
        self
    }

    pub fn with_publish(mut self, operation: Operation) -> Self {
        self.publish = Some(operation);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operation carrying `message`.
    pub fn with_message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// A message exchanged on a channel.
///
/// Two messages denote the same shared message only when both declare a
/// non-empty `name` that matches a components entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Used only when composing the message; never published on operations.
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub payload: Option<PayloadType>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_payload(mut self, payload: PayloadType) -> Self {
        self.payload = Some(payload);
        self
    }

    /// The declared name, treating an empty string as undeclared.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Reusable definitions addressable by `$ref`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub messages: Option<IndexMap<String, Message>>,
    #[serde(default)]
    pub schemas: Option<IndexMap<String, PayloadType>>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, key: impl Into<String>, message: Message) -> Self {
        self.messages
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), message);
        self
    }

    pub fn with_schema(mut self, key: impl Into<String>, schema: PayloadType) -> Self {
        self.schemas
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), schema);
        self
    }
}
