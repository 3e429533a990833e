//! Report types and their text and JSON renderings.
//!
//! The text rendering is the classic console output:
//!
//! ```text
//! Error: Cannot apply XOR operation to SingleElement type
//! Sum of SingleElement list: 45
//! Product of SingleElement list: 362880
//! Checksum of SingleElement list: 0
//! ```
//!
//! Every error line of a batch comes before its three result lines. Floats
//! use Rust's shortest round-trip formatting, so whole numbers print without
//! a fractional part and never switch to exponent notation: `3628800` stays
//! `3628800` rather than the six-significant-digit `3.6288e+06`.
//!
//! The JSON rendering serializes [`DemoReport`] as-is.

use std::io::Write;

use serde::Serialize;

use crate::error::{TallyError, VisitError};

/// Current schema version for JSON reports.
pub const SCHEMA_VERSION: &str = "1";

/// Results of running all three visitors over one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Batch name as printed, e.g. `SingleElement list`.
    pub name: String,
    /// Final sum accumulator.
    pub sum: f64,
    /// Final product accumulator.
    pub product: f64,
    /// Final XOR checksum.
    pub checksum: u8,
    /// Errors reported during the batch, in dispatch order.
    pub errors: Vec<VisitError>,
}

/// Results of a full demo run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub status: String,
    pub schema_version: String,
    pub batches: Vec<BatchReport>,
}

impl DemoReport {
    /// Create a report from batches in run order.
    pub fn new(batches: Vec<BatchReport>) -> Self {
        DemoReport {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            batches,
        }
    }

    /// Total number of errors across all batches.
    pub fn error_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.errors.len()).sum()
    }
}

/// Write the human-readable rendering of `report`.
pub fn render_text(report: &DemoReport, writer: &mut impl Write) -> Result<(), TallyError> {
    for batch in &report.batches {
        for error in &batch.errors {
            writeln!(writer, "Error: {error}")?;
        }
        writeln!(writer, "Sum of {}: {}", batch.name, batch.sum)?;
        writeln!(writer, "Product of {}: {}", batch.name, batch.product)?;
        writeln!(writer, "Checksum of {}: {}", batch.name, batch.checksum)?;
    }
    Ok(())
}

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> Result<(), TallyError> {
    let json = serde_json::to_string_pretty(response)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Emit a response as compact JSON (single line) to a writer.
pub fn emit_response_compact<T: Serialize>(
    response: &T,
    writer: &mut impl Write,
) -> Result<(), TallyError> {
    let json = serde_json::to_string(response)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
