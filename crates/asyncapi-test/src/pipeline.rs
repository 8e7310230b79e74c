//! End-to-end tests: fixture source → typed specification → document.

use serde_json::{json, Value};

use asyncapi_compiler::{compile, render, CompileError, OutputFormat};

use crate::fixtures::load_fixture;

fn compile_fixture(name: &str) -> Result<Value, CompileError> {
    let spec = load_fixture(name).expect("fixture should load");
    compile(&spec)
}

#[test]
fn orders_fixture_references_shared_message() {
    let doc = compile_fixture("orders.yaml").unwrap();

    assert_eq!(
        doc["channels"]["orders"]["publish"],
        json!({
            "operationId": "publishOrderCreated",
            "message": { "$ref": "#/components/messages/order-created" }
        })
    );
    assert_eq!(
        doc["components"]["messages"]["order-created"]["payload"],
        json!({
            "type": "object",
            "properties": { "orderId": { "type": "string" } },
            "required": ["orderId"]
        })
    );
}

#[test]
fn orders_fixture_inlines_unshared_payload() {
    let doc = compile_fixture("orders.yaml").unwrap();
    let message = &doc["channels"]["order-notes"]["subscribe"]["message"];

    assert!(message.get("$ref").is_none());
    assert!(message.get("contentType").is_none());
    assert_eq!(
        message["payload"],
        json!({
            "type": "object",
            "properties": {
                "orderId": { "type": "string" },
                "noteText": { "type": "string" }
            },
            "required": ["orderId"]
        })
    );
}

#[test]
fn orders_fixture_strips_internal_names() {
    let doc = compile_fixture("orders.yaml").unwrap();
    assert_eq!(
        doc["servers"]["production"],
        json!({ "url": "kafka.example.com:9092", "protocol": "kafka" })
    );
    for channel in doc["channels"].as_object().unwrap().values() {
        assert!(channel.get("name").is_none());
    }
}

#[test]
fn orders_fixture_keeps_source_order() {
    let doc = compile_fixture("orders.yaml").unwrap();
    let top: Vec<&String> = doc.as_object().unwrap().keys().collect();
    assert_eq!(top, ["asyncapi", "info", "servers", "channels", "components"]);

    let channels: Vec<&String> = doc["channels"].as_object().unwrap().keys().collect();
    assert_eq!(channels, ["orders", "order-notes"]);
}

#[test]
fn orders_fixture_renders_identically_twice() {
    let first = render(&compile_fixture("orders.yaml").unwrap(), OutputFormat::Json).unwrap();
    let second = render(&compile_fixture("orders.yaml").unwrap(), OutputFormat::Json).unwrap();
    assert_eq!(first, second);
}

#[test]
fn yaml_rendering_matches_json_document() {
    let doc = compile_fixture("orders.yaml").unwrap();
    let yaml = render(&doc, OutputFormat::Yaml).unwrap();
    let back: Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn duplicate_fixture_fails() {
    let err = compile_fixture("duplicate-message-names.yaml").unwrap_err();
    assert!(matches!(err, CompileError::DuplicateMessageName { .. }));
}

#[test]
fn unsupported_payload_fixture_fails() {
    let err = compile_fixture("unsupported-payload.yaml").unwrap_err();
    assert_eq!(err.code(), Some("E1101"));
    assert!(err.to_string().contains("decimal.Decimal"));
}
