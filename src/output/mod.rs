//! Output formatting for subnet results.
//!
//! - [`terminal`] - result and diagnostic lines for stdout

mod terminal;

pub use terminal::{error_line, format_binary_mask, format_field, report_lines, ABSENT};
