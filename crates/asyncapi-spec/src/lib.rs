//! Typed AsyncAPI 2.0 specification model.
//!
//! A [`Specification`] is built once, either programmatically through the
//! `with_*` builders or by loading a YAML/JSON source description with
//! [`parse_source`], and is never mutated afterwards. Compilation into the
//! published document lives in `asyncapi-compiler`.

pub mod error;
pub mod model;
pub mod parser;
pub mod payload;

pub use error::LoadError;
pub use model::{
    Channel, Components, Contact, Info, License, Message, Operation, ProtocolType, Server,
    ServerVariable, Specification, DEFAULT_ASYNCAPI_VERSION,
};
pub use parser::{parse_source, parse_source_file};
pub use payload::{PayloadType, RecordType};
