//! Compile-only test to verify public API surface.
//!
//! This file serves as a compile-time contract for the public API.
//! If this file fails to compile, the public API has regressed.
//!
//! Run with: cargo test -- api_surface

// Allow unused imports - this test is about compile-time verification, not runtime usage
#![allow(unused_imports)]

// ============================================================================
// Core Types (re-exported from tally-core)
// ============================================================================

use tally::dispatch::{fold, walk_elements, Fold};
use tally::element::{
    ArrayElement, Element, ElementKind, SingleElement, StringElement, Visitable,
};
use tally::visitor::{Accumulator, VisitResult, Visitor};
use tally::visitors::{ProductVisitor, SumVisitor, XorVisitor};

// ============================================================================
// Driver and Reporting
// ============================================================================

use tally::demo::{
    run_demo, sample_array_elements, sample_single_elements, sample_string_element, VisitorSet,
    ARRAY_BATCH, SAMPLE_TEXT, SINGLE_BATCH, STRING_BATCH,
};
use tally::error::{Operation, TallyError, VisitError};
use tally::output::{
    emit_response, emit_response_compact, render_text, BatchReport, DemoReport, SCHEMA_VERSION,
};

#[test]
fn api_surface_compiles() {
    // Accumulator identities are part of the contract.
    assert_eq!(<SumVisitor as Accumulator>::IDENTITY, 0.0);
    assert_eq!(<ProductVisitor as Accumulator>::IDENTITY, 1.0);
    assert_eq!(<XorVisitor as Accumulator>::IDENTITY, 0);
}
