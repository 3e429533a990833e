// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Additive reduction.

use tracing::debug;

use super::{ascii_digits, truncate_scalar};
use crate::element::{ArrayElement, SingleElement, StringElement};
use crate::visitor::{Accumulator, VisitResult, Visitor};

/// Adds element contents into a running `f64` total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumVisitor {
    value: f64,
}

impl SumVisitor {
    /// Create a visitor with a total of `0.0`.
    pub fn new() -> Self {
        Self {
            value: Self::IDENTITY,
        }
    }
}

impl Default for SumVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator for SumVisitor {
    type Output = f64;
    const IDENTITY: f64 = 0.0;

    fn value(&self) -> f64 {
        self.value
    }

    fn reset(&mut self) {
        debug!(previous = self.value, "reset sum");
        self.value = Self::IDENTITY;
    }
}

impl Visitor for SumVisitor {
    fn visit_single_element(&mut self, element: &SingleElement) -> VisitResult {
        // Scalars are truncated toward zero; sequences below are not.
        self.value += truncate_scalar(element.value());
        Ok(())
    }

    fn visit_array_element(&mut self, element: &ArrayElement) -> VisitResult {
        self.value += element.value().iter().sum::<f64>();
        Ok(())
    }

    fn visit_string_element(&mut self, element: &StringElement) -> VisitResult {
        self.value += ascii_digits(element.value()).sum::<f64>();
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
