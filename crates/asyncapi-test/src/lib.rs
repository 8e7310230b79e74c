//! Test harnesses for the AsyncAPI document compiler.
//!
//! Provides access to the shared fixtures under `tests/fixtures` and
//! regression tests for the `asyncapi` binary.

#[cfg(test)]
pub mod cli;
pub mod fixtures;
#[cfg(test)]
mod pipeline;

pub use fixtures::{fixture_path, fixtures_dir, load_fixture};
