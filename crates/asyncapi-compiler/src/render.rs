//! Rendering compiled documents as JSON or YAML text.

use serde_json::Value;

use crate::error::CompileError;

/// Output format for a compiled document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON with 2-space indentation.
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Media type of the rendered text.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Yaml => "application/yaml",
        }
    }
}

/// Render a document. Mapping order is preserved in both formats.
pub fn render(document: &Value, format: OutputFormat) -> Result<String, CompileError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
    }
}
