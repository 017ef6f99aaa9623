// Rust guideline compliant 2026-02-06

//! Implementation of the `warta table` command.

use crate::OutputFormatter;
use warta_core::standard_table;

/// Renders the standard transition table.
pub fn execute(formatter: &dyn OutputFormatter) -> String {
    formatter.format_table(standard_table())
}
