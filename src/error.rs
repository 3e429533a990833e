//! Error types for tally.
//!
//! Visitor failures ([`VisitError`]) are not errors at this level: the
//! driver reports them and carries on. [`TallyError`] covers what can
//! actually stop the binary, which is failing to emit the report.

use std::io;

use thiserror::Error;

pub use tally_core::error::{Operation, VisitError};

/// Error raised while writing a report.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Writing to the output stream failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    /// The report could not be serialized to JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================
