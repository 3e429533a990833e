// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor and accumulator trait definitions.

use std::fmt;

use crate::element::{ArrayElement, SingleElement, StringElement};
use crate::error::VisitError;

/// Result of a single visitor handler.
///
/// `Err` means the operation is undefined for the element's variant; the
/// visitor's state is left untouched in that case.
pub type VisitResult = Result<(), VisitError>;

/// An operation over the three element variants.
///
/// There are deliberately no default methods: every visitor must say what it
/// does with every variant, even if the answer is an error.
///
/// ```
/// use tally_core::{ArrayElement, SingleElement, StringElement, VisitResult, Visitor};
///
/// struct Counter {
///     count: usize,
/// }
///
/// impl Visitor for Counter {
///     fn visit_single_element(&mut self, _element: &SingleElement) -> VisitResult {
///         self.count += 1;
///         Ok(())
///     }
///
///     fn visit_array_element(&mut self, element: &ArrayElement) -> VisitResult {
///         self.count += element.value().len();
///         Ok(())
///     }
///
///     fn visit_string_element(&mut self, element: &StringElement) -> VisitResult {
///         self.count += element.value().len();
///         Ok(())
///     }
/// }
/// ```
pub trait Visitor {
    /// Handle a [`SingleElement`].
    fn visit_single_element(&mut self, element: &SingleElement) -> VisitResult;

    /// Handle an [`ArrayElement`].
    fn visit_array_element(&mut self, element: &ArrayElement) -> VisitResult;

    /// Handle a [`StringElement`].
    fn visit_string_element(&mut self, element: &StringElement) -> VisitResult;
}

/// A visitor that folds elements into one running value.
///
/// The value persists across dispatches until [`reset`](Accumulator::reset)
/// puts it back to [`IDENTITY`](Accumulator::IDENTITY).
pub trait Accumulator {
    /// Type of the running value.
    type Output: Copy + PartialEq + fmt::Debug;

    /// Identity element of the reduction; the value after construction or reset.
    const IDENTITY: Self::Output;

    /// Current running value.
    fn value(&self) -> Self::Output;

    /// Restore the running value to [`IDENTITY`](Accumulator::IDENTITY).
    fn reset(&mut self);
}
