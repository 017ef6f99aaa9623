// Rust guideline compliant 2026-02-07

//! Output mode selection for CLI commands.

use warta_core::OutputFormat;

/// Picks the output format: an explicit `--format` wins, then `--json`,
/// then the repository's configured default.
#[must_use]
pub fn resolve_format(
    explicit: Option<OutputFormat>,
    json_flag: bool,
    configured: OutputFormat,
) -> OutputFormat {
    match explicit {
        Some(format) => format,
        None if json_flag => OutputFormat::Json,
        None => configured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(
            resolve_format(Some(OutputFormat::Plain), true, OutputFormat::Table),
            OutputFormat::Plain
        );
    }

    #[test]
    fn test_json_flag_beats_config() {
        assert_eq!(
            resolve_format(None, true, OutputFormat::Table),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(None, false, OutputFormat::Plain),
            OutputFormat::Plain
        );
    }
}
