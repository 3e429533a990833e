// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Multiplicative reduction.

use tracing::debug;

use super::{ascii_digits, truncate_scalar};
use crate::element::{ArrayElement, SingleElement, StringElement};
use crate::visitor::{Accumulator, VisitResult, Visitor};

/// Multiplies element contents into a running `f64` product.
///
/// A `'0'` digit in text collapses the product to zero like any other factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductVisitor {
    value: f64,
}

impl ProductVisitor {
    /// Create a visitor with a product of `1.0`.
    pub fn new() -> Self {
        Self {
            value: Self::IDENTITY,
        }
    }
}

impl Default for ProductVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator for ProductVisitor {
    type Output = f64;
    const IDENTITY: f64 = 1.0;

    fn value(&self) -> f64 {
        self.value
    }

    fn reset(&mut self) {
        debug!(previous = self.value, "reset product");
        self.value = Self::IDENTITY;
    }
}

impl Visitor for ProductVisitor {
    fn visit_single_element(&mut self, element: &SingleElement) -> VisitResult {
        self.value *= truncate_scalar(element.value());
        Ok(())
    }

    fn visit_array_element(&mut self, element: &ArrayElement) -> VisitResult {
        self.value *= element.value().iter().product::<f64>();
        Ok(())
    }

    fn visit_string_element(&mut self, element: &StringElement) -> VisitResult {
        self.value *= ascii_digits(element.value()).product::<f64>();
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Visitable;

    #[test]
    fn scalar_is_truncated_toward_zero() {
        let mut product = ProductVisitor::new();
        SingleElement::new(3.99).accept(&mut product).unwrap();
        SingleElement::new(-2.5).accept(&mut product).unwrap();
        assert_eq!(product.value(), -6.0);
    }

    #[test]
    fn fractional_scalar_truncates_to_zero() {
        let mut product = ProductVisitor::new();
        SingleElement::new(0.75).accept(&mut product).unwrap();
        assert_eq!(product.value(), 0.0);
    }

    #[test]
    fn sequence_batch_is_nine_factorial() {
        let mut product = ProductVisitor::new();
        for values in [
            vec![1.0],
            vec![2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ] {
            ArrayElement::new(values).accept(&mut product).unwrap();
        }
        assert_eq!(product.value(), 362880.0);
    }

    #[test]
    fn sequence_is_not_truncated() {
        let mut product = ProductVisitor::new();
        ArrayElement::new(vec![0.5, 3.0]).accept(&mut product).unwrap();
        assert_eq!(product.value(), 1.5);
    }

    #[test]
    fn empty_sequence_leaves_product_unchanged() {
        let mut product = ProductVisitor::new();
        SingleElement::new(7.0).accept(&mut product).unwrap();
        ArrayElement::new(Vec::new()).accept(&mut product).unwrap();
        assert_eq!(product.value(), 7.0);
    }

    #[test]
    fn text_multiplies_digit_values_only() {
        let mut product = ProductVisitor::new();
        StringElement::new("Hello World 123456789\u{2}")
            .accept(&mut product)
            .unwrap();
        assert_eq!(product.value(), 362880.0);
    }

    #[test]
    fn zero_digit_collapses_product() {
        let mut product = ProductVisitor::new();
        StringElement::new("version 10").accept(&mut product).unwrap();
        assert_eq!(product.value(), 0.0);
    }

    #[test]
    fn text_without_digits_contributes_identity() {
        let mut product = ProductVisitor::new();
        SingleElement::new(5.0).accept(&mut product).unwrap();
        StringElement::new("abc").accept(&mut product).unwrap();
        assert_eq!(product.value(), 5.0);
    }

    #[test]
    fn negative_fraction_multiplies_by_unsigned_zero() {
        let mut product = ProductVisitor::new();
        SingleElement::new(-0.5).accept(&mut product).unwrap();
        assert_eq!(product.value(), 0.0);
        assert!(!product.value().is_sign_negative());
    }

    #[test]
    fn reset_restores_one_and_is_idempotent() {
        let mut product = ProductVisitor::new();
        SingleElement::new(0.0).accept(&mut product).unwrap();
        product.reset();
        assert_eq!(product.value(), 1.0);
        product.reset();
        assert_eq!(product, ProductVisitor::new());
    }
}
