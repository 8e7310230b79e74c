use std::path::PathBuf;

use asyncapi_spec::{parse_source_file, LoadError, Specification};

/// Absolute path to the shared test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR = .../crates/asyncapi-test
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture specification by file name.
pub fn load_fixture(name: &str) -> Result<Specification, LoadError> {
    parse_source_file(&fixture_path(name))
}
