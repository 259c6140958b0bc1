//! Terminal output for run results.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the one-line confirmation and any scan warnings.
pub fn print(summary: &RunSummary, verbose: bool) {
    print_success_to(summary, &mut io::stdout().lock());
    print_skipped_warning_to(summary.skipped_count, verbose, &mut io::stderr().lock());
}

/// Print the success line to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_success_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let msg = format!(
        "Extracted tokens from {} CSS {} - saved to {}",
        summary.files_analyzed,
        if summary.files_analyzed == 1 {
            "file"
        } else {
            "files"
        },
        summary.output.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about paths the scanner could not access.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
