// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Reducing visitors.
//!
//! | Visitor | Accumulator | Identity | Scalar | Sequence | Text |
//! |---------|-------------|----------|--------|----------|------|
//! | [`SumVisitor`] | `f64` | `0.0` | `+= trunc(v)` | `+= Σ v` | `+= Σ digits` |
//! | [`ProductVisitor`] | `f64` | `1.0` | `*= trunc(v)` | `*= Π v` | `*= Π digits` |
//! | [`XorVisitor`] | `u8` | `0` | error | error | `^= ⊕ bytes` |
//!
//! Scalar values are truncated toward zero before being folded in; sequence
//! values are not. A truncated zero is always `+0.0`, so `-0.5` folds in as
//! an unsigned zero.

mod product;
mod sum;
mod xor;

pub use product::ProductVisitor;
pub use sum::SumVisitor;
pub use xor::XorVisitor;

/// `value` truncated toward zero, with negative zero folded to `+0.0`.
fn truncate_scalar(value: f64) -> f64 {
    let truncated = value.trunc();
    if truncated == 0.0 {
        0.0
    } else {
        truncated
    }
}

/// Decimal values of the ASCII digits in `text`, in order.
fn ascii_digits(text: &str) -> impl Iterator<Item = f64> + '_ {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|byte| f64::from(byte - b'0'))
}
