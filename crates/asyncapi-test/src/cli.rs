//! CLI regression tests for the `asyncapi` binary.
//!
//! These tests invoke the binary as a subprocess to catch regressions in flag
//! names, exit codes, and output formats.
//!
//! Run with: `cargo test -p asyncapi-test`
//! Requires the `asyncapi` binary to be built first (`cargo build -p asyncapi`).

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

use crate::fixtures::fixture_path;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns an assert_cmd Command wrapping the `asyncapi` binary.
fn asyncapi() -> Command {
    // cargo_bin is deprecated for custom build-dir setups; fine for standard workspace use.
    #[allow(deprecated)]
    Command::cargo_bin("asyncapi")
        .expect("asyncapi binary not found; run `cargo build -p asyncapi` first")
}

// ---------------------------------------------------------------------------
// asyncapi compile
// ---------------------------------------------------------------------------

#[test]
fn compile_writes_json_to_stdout() {
    let output = asyncapi()
        .args(["compile", "--spec"])
        .arg(fixture_path("orders.yaml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let s = String::from_utf8(output).expect("stdout should be valid UTF-8");
    let v: serde_json::Value = serde_json::from_str(&s).expect("stdout should be valid JSON");
    assert_eq!(
        v["channels"]["orders"]["publish"]["message"]["$ref"],
        "#/components/messages/order-created"
    );
    assert!(s.starts_with("{\n  \"asyncapi\""), "expected 2-space indent: {}", s);
}

#[test]
fn compile_yaml_format() {
    let output = asyncapi()
        .args(["compile", "--format", "yaml", "--spec"])
        .arg(fixture_path("orders.yaml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let s = String::from_utf8(output).expect("stdout should be valid UTF-8");
    let v: serde_json::Value = serde_yaml::from_str(&s).expect("stdout should be valid YAML");
    assert_eq!(v["info"]["title"], "Orders API");
}

#[test]
fn compile_to_output_file() {
    let tmp = TempDir::new().expect("temp dir");
    let out = tmp.path().join("asyncapi.json");

    asyncapi()
        .args(["compile", "--spec"])
        .arg(fixture_path("orders.yaml"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&out).expect("output written");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert!(v["servers"]["production"].get("name").is_none());
}

#[test]
fn compile_spec_from_env() {
    asyncapi()
        .arg("compile")
        .env("ASYNCAPI_PATH", fixture_path("orders.yaml"))
        .assert()
        .success()
        .stdout(contains("\"asyncapi\": \"2.0.0\""));
}

#[test]
fn compile_missing_spec_flag_exits_two() {
    // clap returns exit code 2 for missing required args
    asyncapi()
        .arg("compile")
        .env_remove("ASYNCAPI_PATH")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn compile_nonexistent_spec_exits_one() {
    asyncapi()
        .args(["compile", "--spec", "nonexistent.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not found"));
}

#[test]
fn compile_unknown_format_exits_one() {
    asyncapi()
        .args(["compile", "--format", "toml", "--spec"])
        .arg(fixture_path("orders.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unknown output format"));
}

#[test]
fn compile_duplicate_message_names_exits_one() {
    asyncapi()
        .args(["compile", "--spec"])
        .arg(fixture_path("duplicate-message-names.yaml"))
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("E1102"));
}

#[test]
fn compile_unsupported_payload_exits_one() {
    asyncapi()
        .args(["compile", "--spec"])
        .arg(fixture_path("unsupported-payload.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("E1101"));
}

#[test]
fn compile_depth_limit_exits_one() {
    asyncapi()
        .args(["compile", "--max-depth", "0", "--spec"])
        .arg(fixture_path("orders.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("E1103"));
}

// ---------------------------------------------------------------------------
// asyncapi validate
// ---------------------------------------------------------------------------

#[test]
fn validate_valid_spec_exits_zero() {
    asyncapi()
        .args(["validate", "--spec"])
        .arg(fixture_path("orders.yaml"))
        .assert()
        .success()
        .stderr(contains("1 valid, 0 invalid"));
}

#[test]
fn validate_invalid_spec_exits_one() {
    asyncapi()
        .args(["validate", "--spec"])
        .arg(fixture_path("invalid-parse-error.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("E1001"));
}

#[test]
fn validate_multiple_specs_reports_each() {
    asyncapi()
        .args(["validate", "--spec"])
        .arg(fixture_path("orders.yaml"))
        .arg(fixture_path("duplicate-message-names.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("validated 2 spec(s): 1 valid, 1 invalid"));
}

#[test]
fn validate_requires_spec() {
    asyncapi().arg("validate").assert().failure().code(2);
}
