// Rust guideline compliant 2026-02-06

//! Warta CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod output_mode;

pub use output::{create_formatter, GraphReport, OutputFormatter};
