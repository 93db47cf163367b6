//! CLI command implementations for contractmap.
//!
//! The tool exposes a single operation: extract both endpoint sets, diff
//! them, write the report, and gate the exit code on `--strict`.

pub mod check;

pub use check::{run_check, CheckConfig};
