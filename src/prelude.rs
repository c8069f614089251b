//! Crate-internal prelude.
//!
//! Re-exports the derive macros used throughout the value types.

#[allow(unused_imports)]
pub(crate) use derive_more::Display;
