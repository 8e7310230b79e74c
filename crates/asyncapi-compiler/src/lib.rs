//! Compiles typed AsyncAPI specifications into canonical documents.
//!
//! The pipeline, leaves first:
//! - [`document`]: generic serialization of typed nodes with camelCase field
//!   names and omission of null/empty values,
//! - [`schema`]: JSON Schema generation from payload type descriptors,
//! - [`registry`]: shared message lookup and `$ref` resolution,
//! - [`assembler`]: the single traversal producing the final document.
//!
//! ```ignore
//! use asyncapi_compiler::{compile, render, OutputFormat};
//!
//! let document = compile(&spec)?;
//! println!("{}", render(&document, OutputFormat::Json)?);
//! ```

pub mod assembler;
pub mod document;
pub mod error;
pub mod fields;
pub mod registry;
pub mod render;
pub mod schema;

pub use assembler::{compile, compile_with_options, CompileOptions, DocumentAssembler};
pub use document::{to_camel_case, ToDocument};
pub use error::CompileError;
pub use registry::{message_ref, MessageRegistry, ResolvedMessage};
pub use render::{render, OutputFormat};
pub use schema::{to_schema, SchemaGenerator, DEFAULT_MAX_DEPTH};
