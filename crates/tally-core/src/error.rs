// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for element dispatch.
//!
//! A visitor handler either succeeds or reports that its operation has no
//! meaning for the element variant it was handed. That outcome is expected,
//! so it travels as a plain `Result` and the dispatch site decides what to do
//! with it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::ElementKind;

/// The reduction a visitor performs.
///
/// Every reduction has a variant so that a serialized error can name any of
/// them, but only [`Operation::Xor`] has element variants it cannot handle.
/// Sum and product never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Sum,
    Product,
    Xor,
}

impl Operation {
    /// Name used in user-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Product => "product",
            Operation::Xor => "XOR",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by a visitor handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum VisitError {
    /// The operation is undefined for this element variant.
    #[error("Cannot apply {operation} operation to {kind} type")]
    UnsupportedOperation {
        operation: Operation,
        kind: ElementKind,
    },
}

impl VisitError {
    /// Construct an [`VisitError::UnsupportedOperation`].
    pub fn unsupported(operation: Operation, kind: ElementKind) -> Self {
        VisitError::UnsupportedOperation { operation, kind }
    }

    /// The element variant the failed dispatch was made against.
    pub fn kind(&self) -> ElementKind {
        match self {
            VisitError::UnsupportedOperation { kind, .. } => *kind,
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            VisitError::UnsupportedOperation { operation, .. } => *operation,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
