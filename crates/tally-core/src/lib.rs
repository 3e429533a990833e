// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Core element and visitor types for tally.
//!
//! This crate provides:
//! - Three element variants ([`SingleElement`], [`ArrayElement`],
//!   [`StringElement`]) and the closed [`Element`] union over them
//! - The [`Visitor`] trait with one handler per element variant
//! - Three reducing visitors: [`SumVisitor`], [`ProductVisitor`], [`XorVisitor`]
//! - Walk and fold functions that drive a visitor over a slice of elements
//!
//! # Example
//!
//! ```
//! use tally_core::{fold, SingleElement, SumVisitor};
//!
//! let elements: Vec<SingleElement> = (1..=4).map(|v| SingleElement::new(v)).collect();
//! let result = fold::<SumVisitor, _>(&elements);
//! assert_eq!(result.value, 10.0);
//! assert!(result.errors.is_empty());
//! ```

pub mod dispatch;
pub mod element;
pub mod error;
pub mod visitor;
pub mod visitors;

pub use dispatch::{fold, walk_elements, Fold};
pub use element::{ArrayElement, Element, ElementKind, SingleElement, StringElement, Visitable};
pub use error::{Operation, VisitError};
pub use visitor::{Accumulator, VisitResult, Visitor};
pub use visitors::{ProductVisitor, SumVisitor, XorVisitor};
