// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Bitwise XOR checksum over text.
//!
//! The checksum is only defined for [`StringElement`]. Scalar and sequence
//! elements are rejected with [`VisitError::UnsupportedOperation`] and leave
//! the running checksum as it was.

use tracing::debug;

use crate::element::{ArrayElement, SingleElement, StringElement, Visitable};
use crate::error::{Operation, VisitError};
use crate::visitor::{Accumulator, VisitResult, Visitor};

/// XORs every byte of visited text into a running `u8` checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XorVisitor {
    value: u8,
}

impl XorVisitor {
    /// Create a visitor with a checksum of `0`.
    pub fn new() -> Self {
        Self {
            value: Self::IDENTITY,
        }
    }
}

impl Default for XorVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator for XorVisitor {
    type Output = u8;
    const IDENTITY: u8 = 0;

    fn value(&self) -> u8 {
        self.value
    }

    fn reset(&mut self) {
        debug!(previous = self.value, "reset checksum");
        self.value = Self::IDENTITY;
    }
}

impl Visitor for XorVisitor {
    fn visit_single_element(&mut self, element: &SingleElement) -> VisitResult {
        Err(VisitError::unsupported(Operation::Xor, element.kind()))
    }

    fn visit_array_element(&mut self, element: &ArrayElement) -> VisitResult {
        Err(VisitError::unsupported(Operation::Xor, element.kind()))
    }

    fn visit_string_element(&mut self, element: &StringElement) -> VisitResult {
        let checksum = element
            .value()
            .bytes()
            .fold(0u8, |checksum, byte| checksum ^ byte);
        self.value ^= checksum;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
