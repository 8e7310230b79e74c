//! AsyncAPI document compiler.
//!
//! Loads a specification source and writes the compiled AsyncAPI document
//! as JSON or YAML.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use asyncapi_compiler::{compile_with_options, render, CompileOptions, OutputFormat};
use asyncapi_spec::parse_source_file;
use asyncapi_telemetry::{
    init_logging, log_compile_failed, log_document_compiled, log_document_written, log_spec_loaded,
    LogFormat, TelemetryConfig,
};

#[derive(Parser, Debug)]
#[command(name = "asyncapi", about = "AsyncAPI document compiler", version)]
struct Cli {
    /// Log level (overridden by RUST_LOG).
    #[arg(
        long,
        global = true,
        env = "ASYNCAPI_LOG_LEVEL",
        default_value = "warn"
    )]
    log_level: String,

    /// Log format (pretty or json).
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a specification source into an AsyncAPI document.
    Compile {
        /// Specification source file (YAML or JSON).
        #[arg(short, long, env = "ASYNCAPI_PATH")]
        spec: PathBuf,

        /// Output format (json, yaml or yml).
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum payload type nesting depth.
        #[arg(long, default_value_t = asyncapi_compiler::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Check that specification sources compile, without writing documents.
    Validate {
        /// Specification source file(s) (YAML or JSON).
        #[arg(short, long, required = true, num_args = 1..)]
        spec: Vec<PathBuf>,

        /// Maximum payload type nesting depth.
        #[arg(long, default_value_t = asyncapi_compiler::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

/// Load and compile one source, rendering it in `format`.
fn compile_source(
    path: &Path,
    options: &CompileOptions,
    format: OutputFormat,
) -> Result<String, String> {
    let spec = parse_source_file(path).map_err(|e| e.to_string())?;
    log_spec_loaded!(
        path = %path.display(),
        title = %spec.info.title,
        channels = spec.channels.len()
    );

    let document = compile_with_options(&spec, options).map_err(|e| e.to_string())?;
    log_document_compiled!(path = %path.display());

    render(&document, format).map_err(|e| e.to_string())
}

/// Run the compile command.
fn run_compile(spec: &Path, format: &str, output: Option<&Path>, max_depth: usize) -> ExitCode {
    let Some(format) = OutputFormat::parse(format) else {
        eprintln!(
            "error: unknown output format: {} (expected json or yaml)",
            format
        );
        return ExitCode::from(1);
    };

    if !spec.exists() {
        eprintln!("error: spec file not found: {}", spec.display());
        return ExitCode::from(1);
    }

    let options = CompileOptions { max_depth };
    let text = match compile_source(spec, &options, format) {
        Ok(text) => text,
        Err(e) => {
            log_compile_failed!(path = %spec.display(), error = %e);
            eprintln!("error: compilation failed: {}", e);
            return ExitCode::from(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, format!("{}\n", text)) {
                eprintln!("error: failed to write {}: {}", path.display(), e);
                return ExitCode::from(1);
            }
            log_document_written!(
                path = %path.display(),
                content_type = format.content_type()
            );
            eprintln!("compiled {} to {}", spec.display(), path.display());
        }
        None => println!("{}", text),
    }

    ExitCode::SUCCESS
}

/// Run the validate command.
fn run_validate(specs: &[PathBuf], max_depth: usize) -> ExitCode {
    let options = CompileOptions { max_depth };
    let mut invalid = 0;

    for path in specs {
        match compile_source(path, &options, OutputFormat::Json) {
            Ok(_) => eprintln!("✓ {} is valid", path.display()),
            Err(e) => {
                invalid += 1;
                log_compile_failed!(path = %path.display(), error = %e);
                eprintln!("✗ {}: {}", path.display(), e);
            }
        }
    }

    eprintln!();
    eprintln!(
        "validated {} spec(s): {} valid, {} invalid",
        specs.len(),
        specs.len() - invalid,
        invalid
    );

    if invalid > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(log_format) = LogFormat::parse(&cli.log_format) else {
        eprintln!(
            "error: unknown log format: {} (expected pretty or json)",
            cli.log_format
        );
        return ExitCode::from(1);
    };
    let telemetry = TelemetryConfig::new()
        .with_log_level(cli.log_level.as_str())
        .with_log_format(log_format);
    if let Err(e) = init_logging(&telemetry) {
        eprintln!("error: {}", e);
        return ExitCode::from(1);
    }

    match cli.command {
        Commands::Compile {
            spec,
            format,
            output,
            max_depth,
        } => run_compile(&spec, &format, output.as_deref(), max_depth),
        Commands::Validate { spec, max_depth } => run_validate(&spec, max_depth),
    }
}
