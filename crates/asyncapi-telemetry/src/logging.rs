//! Structured logging to stderr.
//!
//! Stdout carries compiled documents, so log output never goes there.

use crate::{LogFormat, TelemetryConfig, TelemetryError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging subsystem.
///
/// Sets up tracing-subscriber with either JSON or pretty format,
/// respecting the configured log level.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    // Build the env filter from config or RUST_LOG
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Json => init_json_logging(filter),
        LogFormat::Pretty => init_pretty_logging(filter),
    }
}

fn init_json_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let json_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_file(false)
        .with_line_number(false)
        .flatten_event(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(json_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

fn init_pretty_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(pretty_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

/// Standard log event names.
pub mod events {
    /// A specification source has been loaded.
    pub const SPEC_LOADED: &str = "spec_loaded";

    /// A document has been compiled.
    pub const DOCUMENT_COMPILED: &str = "document_compiled";

    /// A compiled document has been written out.
    pub const DOCUMENT_WRITTEN: &str = "document_written";

    /// Loading or compilation failed.
    pub const COMPILE_FAILED: &str = "compile_failed";
}

/// Helper macros for structured logging with standard fields.
///
/// These wrap the tracing macros to ensure consistent field naming.
#[macro_export]
macro_rules! log_spec_loaded {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::SPEC_LOADED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_document_compiled {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::DOCUMENT_COMPILED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_document_written {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::DOCUMENT_WRITTEN,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_compile_failed {
    ($($field:tt)*) => {
        tracing::error!(
            event = $crate::logging::events::COMPILE_FAILED,
            $($field)*
        )
    };
}
