//! Binary entry point for the tally CLI.
//!
//! Runs the sum, product and XOR visitors over the sample collections and
//! prints the report to stdout. Logging goes to stderr.
//!
//! ## Usage
//!
//! ```bash
//! # Classic text report
//! tally
//!
//! # JSON report
//! tally --format json
//!
//! # Show every dispatch
//! tally --log-level debug
//! ```
//!
//! Unsupported-operation reports never change the exit code. The only
//! failure is being unable to write the report.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use tally::demo::run_demo;
use tally::error::TallyError;
use tally::output::{emit_response, emit_response_compact, render_text};

/// Sum, product and XOR checksum reductions over element collections.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Output format for the report.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level for tracing output (overridden by RUST_LOG).
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

/// Output format for the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable lines (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    JsonCompact,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.log_level);

    match execute(cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tally: {err}");
            ExitCode::from(1)
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run the demo and write the report in the requested format.
fn execute(format: OutputFormat) -> Result<(), TallyError> {
    let report = run_demo();
    tracing::info!(errors = report.error_count(), "demo finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_text(&report, &mut out)?,
        OutputFormat::Json => emit_response(&report, &mut out)?,
        OutputFormat::JsonCompact => emit_response_compact(&report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
