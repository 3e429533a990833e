//! The demo driver.
//!
//! Builds three sample collections and runs the sum, product and XOR
//! visitors over each of them in turn:
//!
//! 1. `SingleElement list` - nine scalars, `1.0` through `9.0`
//! 2. `ArrayElement list` - `{1}`, `{2, 3}`, `{4, 5, 6}`, `{7, 8, 9}`
//! 3. `StringElement` - `"Hello World 123456789"` plus a trailing `\x02`
//!
//! The XOR visitor rejects every scalar and sequence element. Each rejection
//! is caught at its dispatch site and recorded in the batch report; the run
//! always continues. Visitors are reset between batches.

use std::slice;

use tracing::{debug, info};

use tally_core::{
    walk_elements, Accumulator, ArrayElement, ProductVisitor, SingleElement, StringElement,
    SumVisitor, Visitable, XorVisitor,
};

use crate::output::{BatchReport, DemoReport};

/// Batch name for the scalar collection.
pub const SINGLE_BATCH: &str = "SingleElement list";
/// Batch name for the sequence collection.
pub const ARRAY_BATCH: &str = "ArrayElement list";
/// Batch name for the lone text element.
pub const STRING_BATCH: &str = "StringElement";

/// Text held by the sample [`StringElement`]; ends in an ASCII STX control character.
pub const SAMPLE_TEXT: &str = "Hello World 123456789\u{2}";

/// Nine scalar elements holding `1.0..=9.0`.
pub fn sample_single_elements() -> Vec<SingleElement> {
    (1..=9).map(|v| SingleElement::new(f64::from(v))).collect()
}

/// Four sequence elements holding `1.0..=9.0` between them.
pub fn sample_array_elements() -> Vec<ArrayElement> {
    vec![
        ArrayElement::new(vec![1.0]),
        ArrayElement::new(vec![2.0, 3.0]),
        ArrayElement::new(vec![4.0, 5.0, 6.0]),
        ArrayElement::new(vec![7.0, 8.0, 9.0]),
    ]
}

/// The sample text element.
pub fn sample_string_element() -> StringElement {
    StringElement::new(SAMPLE_TEXT)
}

/// The three visitors, owned together so a batch can run and reset them as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitorSet {
    pub sum: SumVisitor,
    pub product: ProductVisitor,
    pub xor: XorVisitor,
}

impl VisitorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply sum, then product, then XOR to `elements`, report, and reset.
    ///
    /// Errors from each visitor are collected in order; none of them stops
    /// the batch.
    pub fn run_batch<E: Visitable>(&mut self, name: &str, elements: &[E]) -> BatchReport {
        info!(batch = name, elements = elements.len(), "running batch");

        let mut errors = walk_elements(&mut self.sum, elements);
        errors.extend(walk_elements(&mut self.product, elements));
        errors.extend(walk_elements(&mut self.xor, elements));

        for error in &errors {
            debug!(batch = name, %error, "unsupported operation");
        }

        let report = BatchReport {
            name: name.to_string(),
            sum: self.sum.value(),
            product: self.product.value(),
            checksum: self.xor.value(),
            errors,
        };
        self.reset();
        report
    }

    /// Reset all three accumulators to their identities.
    pub fn reset(&mut self) {
        self.sum.reset();
        self.product.reset();
        self.xor.reset();
    }
}

/// Run every visitor over every sample collection.
pub fn run_demo() -> DemoReport {
    let singles = sample_single_elements();
    let arrays = sample_array_elements();
    let text = sample_string_element();

    let mut visitors = VisitorSet::new();
    let batches = vec![
        visitors.run_batch(SINGLE_BATCH, &singles),
        visitors.run_batch(ARRAY_BATCH, &arrays),
        visitors.run_batch(STRING_BATCH, slice::from_ref(&text)),
    ];

    DemoReport::new(batches)
}

// ============================================================================
// Tests
// ============================================================================
