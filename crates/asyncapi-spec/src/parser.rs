use serde_json::Value;

use crate::error::LoadError;
use crate::model::Specification;

/// Build a specification from a YAML/JSON source description.
pub fn parse_source(input: &str) -> Result<Specification, LoadError> {
    // Parse YAML (also handles JSON since JSON is valid YAML)
    let root: Value = serde_yaml::from_str(input).map_err(|e| LoadError::Parse(e.to_string()))?;

    if !root.is_object() {
        return Err(LoadError::InvalidSource(
            "source root must be an object".into(),
        ));
    }

    let mut spec: Specification = serde_path_to_error::deserialize(root).map_err(|e| {
        let path = e.path().to_string();
        LoadError::InvalidSource(format!("{}: {}", path, e.into_inner()))
    })?;

    apply_default_names(&mut spec);

    tracing::debug!(
        title = %spec.info.title,
        servers = spec.servers.len(),
        channels = spec.channels.len(),
        "specification source decoded"
    );

    Ok(spec)
}

/// Build a specification from a source file.
pub fn parse_source_file(path: &std::path::Path) -> Result<Specification, LoadError> {
    let content = std::fs::read_to_string(path)?;
    parse_source(&content)
}

/// Servers and channels without an internal name take their map key.
fn apply_default_names(spec: &mut Specification) {
    for (id, server) in spec.servers.iter_mut() {
        if server.name.is_empty() {
            server.name = id.clone();
        }
    }
    for (id, channel) in spec.channels.iter_mut() {
        if channel.name.is_empty() {
            channel.name = id.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProtocolType;
    use crate::payload::PayloadType;
    use std::io::Write;

    const ORDERS: &str = r#"
asyncapi: "2.0.0"
info:
  title: Orders API
  version: "1.2.0"
  termsOfService: https://example.com/terms
servers:
  production:
    url: broker.example.com:9092
    protocol: kafka
    protocolVersion: "2.8"
  staging:
    name: staging-internal
    url: staging.example.com:9092
    protocol: kafka-secure
channels:
  orders:
    description: Order lifecycle events
    publish:
      operationId: publishOrder
      message:
        name: OrderCreated
        contentType: application/json
        payload:
          record:
            name: OrderCreated
            fields:
              order_id: string
components:
  messages:
    order-created:
      name: OrderCreated
      payload:
        record:
          name: OrderCreated
          fields:
            order_id: string
"#;

    #[test]
    fn parse_full_source() {
        let spec = parse_source(ORDERS).unwrap();
        assert_eq!(spec.asyncapi, "2.0.0");
        assert_eq!(spec.info.title, "Orders API");
        assert_eq!(
            spec.info.terms_of_service.as_deref(),
            Some("https://example.com/terms")
        );

        let production = &spec.servers["production"];
        assert_eq!(production.protocol, ProtocolType::Kafka);
        assert_eq!(production.protocol_version.as_deref(), Some("2.8"));

        let channel = &spec.channels["orders"];
        let publish = channel.publish.as_ref().unwrap();
        assert_eq!(publish.operation_id.as_deref(), Some("publishOrder"));
        let message = publish.message.as_ref().unwrap();
        assert_eq!(message.content_type.as_deref(), Some("application/json"));
        assert!(matches!(message.payload, Some(PayloadType::Record(_))));

        let messages = spec.component_messages().unwrap();
        assert_eq!(messages["order-created"].declared_name(), Some("OrderCreated"));
    }

    #[test]
    fn names_default_to_map_keys() {
        let spec = parse_source(ORDERS).unwrap();
        assert_eq!(spec.servers["production"].name, "production");
        assert_eq!(spec.servers["staging"].name, "staging-internal");
        assert_eq!(spec.channels["orders"].name, "orders");
    }

    #[test]
    fn parse_json_source() {
        let json = r#"{
  "info": { "title": "Ping", "version": "0.1.0" },
  "channels": { "ping": { "subscribe": { "message": { "payload": "string" } } } }
}"#;
        let spec = parse_source(json).unwrap();
        assert_eq!(spec.asyncapi, "2.0.0");
        assert!(spec.servers.is_empty());
        let message = spec.channels["ping"]
            .subscribe
            .as_ref()
            .and_then(|op| op.message.as_ref())
            .unwrap();
        assert_eq!(message.payload, Some(PayloadType::String));
    }

    #[test]
    fn preserves_source_order() {
        let yaml = r#"
info: { title: T, version: "1" }
channels:
  zeta: {}
  alpha: {}
  mid: {}
"#;
        let spec = parse_source(yaml).unwrap();
        let ids: Vec<&str> = spec.channels.keys().map(String::as_str).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn reject_unparsable_source() {
        let err = parse_source("info: [unclosed").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("E1001"));
    }

    #[test]
    fn reject_non_object_root() {
        let err = parse_source("- just\n- a list\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidSource(_)));
    }

    #[test]
    fn invalid_source_reports_path() {
        let yaml = r#"
info: { title: T, version: "1" }
servers:
  main:
    url: localhost
    protocol: carrier-pigeon
"#;
        let err = parse_source(yaml).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("E1002"), "{}", message);
        assert!(message.contains("servers.main.protocol"), "{}", message);
    }

    #[test]
    fn server_variables_are_strings() {
        let quoted = r#"
info: { title: T, version: "1" }
servers:
  main:
    url: "broker:{port}"
    protocol: mqtt
    variables:
      port: { default: "1883", enum: ["1883", "8883"] }
"#;
        let spec = parse_source(quoted).unwrap();
        let variables = spec.servers["main"].variables.as_ref().unwrap();
        assert_eq!(variables["port"].default.as_deref(), Some("1883"));

        let unquoted = r#"
info: { title: T, version: "1" }
servers:
  main:
    url: "broker:{port}"
    protocol: mqtt
    variables:
      port: { default: 1883 }
"#;
        let err = parse_source(unquoted).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("E1002"), "{}", message);
        assert!(message.contains("servers.main.variables.port.default"), "{}", message);
    }

    #[test]
    fn missing_info_is_invalid() {
        let err = parse_source("channels: {}\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidSource(_)));
    }

    #[test]
    fn parse_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("asyncapi.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(ORDERS.as_bytes()).unwrap();

        let spec = parse_source_file(&path).unwrap();
        assert_eq!(spec.channels.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_source_file(std::path::Path::new("does-not-exist.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
