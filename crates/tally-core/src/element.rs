// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Element variants and the closed [`Element`] union.
//!
//! Each element holds exactly one value of a fixed shape:
//!
//! | Variant | Holds |
//! |---------|-------|
//! | [`SingleElement`] | one `f64` |
//! | [`ArrayElement`] | an ordered `Vec<f64>` |
//! | [`StringElement`] | a `String` |
//!
//! Values are never validated. NaN, empty sequences and strings containing
//! control characters are all held as given. The variant of an element is
//! fixed at construction; `set_value` only replaces the held value.
//!
//! # Dispatch
//!
//! [`Visitable::accept`] calls exactly one [`Visitor`] handler, the one
//! matching the element's own variant:
//!
//! ```
//! use tally_core::{Accumulator, SumVisitor, StringElement, Visitable};
//!
//! let element = StringElement::new("a1b2c3");
//! let mut visitor = SumVisitor::new();
//! element.accept(&mut visitor).unwrap();
//! assert_eq!(visitor.value(), 6.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::visitor::{VisitResult, Visitor};

/// Anything a [`Visitor`] can be dispatched against.
pub trait Visitable {
    /// The variant of this element.
    fn kind(&self) -> ElementKind;

    /// Invoke the visitor handler matching this element's variant.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult;
}

/// Names the three element variants.
///
/// Displays and serializes as the element's type name, e.g. `SingleElement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "SingleElement")]
    Single,
    #[serde(rename = "ArrayElement")]
    Array,
    #[serde(rename = "StringElement")]
    String,
}

impl ElementKind {
    /// Type name used in user-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Single => "SingleElement",
            ElementKind::Array => "ArrayElement",
            ElementKind::String => "StringElement",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates an element struct along with its constructor, setter,
/// `From` conversions and [`Visitable`] impl.
///
/// ```ignore
/// element_types! {
///     // SingleElement holding f64, dispatched to visit_single_element,
///     // wrapped as Element::Single
///     single_element: SingleElement(f64) => Single,
/// }
/// ```
macro_rules! element_types {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $name:ident ( $value_ty:ty ) => $variant:ident
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
                #[serde(transparent)]
                pub struct $name {
                    value: $value_ty,
                }

                impl $name {
                    #[doc = concat!("Create a new [`", stringify!($name), "`] holding `value`.")]
                    pub fn new(value: impl Into<$value_ty>) -> Self {
                        Self { value: value.into() }
                    }

                    /// Replace the held value.
                    pub fn set_value(&mut self, value: impl Into<$value_ty>) {
                        self.value = value.into();
                    }
                }

                impl From<$value_ty> for $name {
                    fn from(value: $value_ty) -> Self {
                        Self { value }
                    }
                }

                impl Visitable for $name {
                    fn kind(&self) -> ElementKind {
                        ElementKind::$variant
                    }

                    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
                        visitor.[<visit_ $base_name>](self)
                    }
                }

                impl From<$name> for Element {
                    fn from(element: $name) -> Self {
                        Element::$variant(element)
                    }
                }
            )*
        }
    };
}

element_types! {
    /// An element holding a single floating-point value.
    single_element: SingleElement(f64) => Single,
    /// An element holding an ordered sequence of floating-point values.
    array_element: ArrayElement(Vec<f64>) => Array,
    /// An element holding a text string.
    string_element: StringElement(String) => String,
}

impl SingleElement {
    /// The held value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl ArrayElement {
    /// The held sequence.
    pub fn value(&self) -> &[f64] {
        &self.value
    }
}

impl StringElement {
    /// The held text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Closed union over the three element variants.
///
/// Lets collections mix variants while keeping dispatch an exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Element {
    Single(SingleElement),
    Array(ArrayElement),
    String(StringElement),
}

impl Visitable for Element {
    fn kind(&self) -> ElementKind {
        match self {
            Element::Single(element) => element.kind(),
            Element::Array(element) => element.kind(),
            Element::String(element) => element.kind(),
        }
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        match self {
            Element::Single(element) => element.accept(visitor),
            Element::Array(element) => element.accept(visitor),
            Element::String(element) => element.accept(visitor),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
