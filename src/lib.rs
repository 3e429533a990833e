//! Tally: sum, product and XOR checksum reductions over element collections.
//!
//! Three element variants (scalar, sequence, text) are walked by three
//! reducing visitors. The demo driver applies every visitor to every sample
//! collection and reports the results.

// Core types - re-exported from tally-core
pub use tally_core::dispatch;
pub use tally_core::element;
pub use tally_core::visitor;
pub use tally_core::visitors;

// Driver and reporting
pub mod demo;
pub mod error;
pub mod output;
