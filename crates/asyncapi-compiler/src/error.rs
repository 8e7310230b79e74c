use thiserror::Error;

/// Errors produced during compilation (E1101–E1103).
///
/// Every variant aborts the whole compile; no partial document is returned.
#[derive(Debug, Error)]
pub enum CompileError {
    /// E1101: A payload type has a shape schema generation does not support.
    #[error("E1101: cannot generate schema at {location}: unsupported payload type '{type_name}'")]
    SchemaGeneration { location: String, type_name: String },

    /// E1102: Two components/messages entries declare the same message name.
    #[error("E1102: message name '{name}' is declared by both components/messages '{first}' and '{second}'")]
    DuplicateMessageName {
        name: String,
        first: String,
        second: String,
    },

    /// E1103: Input nesting exceeds the configured depth limit.
    #[error("E1103: structure nested deeper than {limit} levels at {location}")]
    Structural { location: String, limit: usize },

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML rendering error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CompileError {
    /// The stable error code, if the error has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::SchemaGeneration { .. } => Some("E1101"),
            Self::DuplicateMessageName { .. } => Some("E1102"),
            Self::Structural { .. } => Some("E1103"),
            Self::Json(_) | Self::Yaml(_) => None,
        }
    }
}
