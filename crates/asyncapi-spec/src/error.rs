use thiserror::Error;

/// Errors produced while loading a specification source (E1001–E1002).
#[derive(Debug, Error)]
pub enum LoadError {
    /// E1001: YAML/JSON parse error.
    #[error("E1001: parse error: {0}")]
    Parse(String),

    /// E1002: The document parsed but does not describe a specification.
    #[error("E1002: invalid specification source: {0}")]
    InvalidSource(String),

    /// I/O error reading the source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
