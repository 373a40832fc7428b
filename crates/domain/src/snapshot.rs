//! Section formatting for the consolidated snapshot.
//!
//! The format is byte-exact: downstream consumers split the snapshot on the
//! delimiter lines, so any change here is a breaking change.

/// Placeholder written in place of content that cannot be decoded as UTF-8.
pub const SKIP_MARKER: &str = "[Binary or non-text file skipped]";

const DELIMITER: &str = "====================";

/// Header preceding each file's content in the snapshot:
/// a blank line, then `==================== <name> ====================`,
/// then a blank line.
pub fn section_header(display_name: &str) -> String {
    format!("\n{DELIMITER} {display_name} {DELIMITER}\n\n")
}
