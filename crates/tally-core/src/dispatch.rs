// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions that drive a visitor over element collections.
//!
//! - [`walk_elements`] dispatches each element in order against a borrowed
//!   visitor, so the visitor keeps accumulating across calls.
//! - [`fold`] starts a fresh accumulator, walks the slice, and hands back the
//!   final value. Starting a new fold is the value-semantics form of `reset`.
//!
//! A failed dispatch never stops the walk. Each error is collected and the
//! next element is visited.

use tracing::debug;

use crate::element::Visitable;
use crate::error::VisitError;
use crate::visitor::{Accumulator, Visitor};

/// Outcome of a [`fold`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fold<T> {
    /// Final accumulator value.
    pub value: T,
    /// Errors raised during the fold, one per failed dispatch, in element order.
    pub errors: Vec<VisitError>,
}

impl<T> Fold<T> {
    /// True when every dispatch succeeded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Dispatch every element against `visitor`, in order.
///
/// Returns the errors raised, one per failed dispatch.
pub fn walk_elements<V, E>(visitor: &mut V, elements: &[E]) -> Vec<VisitError>
where
    V: Visitor + ?Sized,
    E: Visitable,
{
    let mut errors = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        match element.accept(visitor) {
            Ok(()) => debug!(index, kind = %element.kind(), "dispatched element"),
            Err(err) => {
                debug!(index, kind = %element.kind(), error = %err, "dispatch failed");
                errors.push(err);
            }
        }
    }
    errors
}

/// Run a fresh `A` over `elements` and return its final value.
pub fn fold<A, E>(elements: &[E]) -> Fold<A::Output>
where
    A: Visitor + Accumulator + Default,
    E: Visitable,
{
    let mut accumulator = A::default();
    let errors = walk_elements(&mut accumulator, elements);
    Fold {
        value: accumulator.value(),
        errors,
    }
}

// ============================================================================
// Tests
// ============================================================================
