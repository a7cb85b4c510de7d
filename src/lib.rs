//! IPv4 subnet calculator.
//!
//! Derives network, broadcast, mask, usable host range, class and private
//! flag from a single `A.B.C.D/P` string.

pub mod models;
pub mod output;
pub mod processing;

/// Lines to print for one raw input line: the nine result lines, or a single
/// diagnostic line when the input is rejected.
pub fn run(input: &str) -> Vec<String> {
    match processing::calculate(input) {
        Ok(report) => output::report_lines(&report),
        Err(e) => vec![output::error_line(&e)],
    }
}
