//! Deterministic JSON serialization for the on-disk storage file.
//!
//! Output is stable so the file is easy to inspect and diff:
//! - Object keys sorted (via `BTreeMap`)
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
