//! Prelude module for personnummer crate.
//!
//! Re-exports commonly used derive macros from derive_more.

pub use derive_more::Display;
