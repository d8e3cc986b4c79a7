//! Report formatting and printing utilities.
//!
//! Violations are shown in cargo-style format. Separate from core logic so
//! the sync engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, ExportSummary, ImportSummary, InitSummary,
};
use crate::core::{ConsistencyReport, Rule, Violation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Print consistency violations in cargo-style format.
pub fn report_to<W: Write>(report: &ConsistencyReport, writer: &mut W) {
    if report.is_empty() {
        return;
    }

    for violation in report {
        print_violation(violation, writer);
    }

    print_summary(report, writer);
}

fn print_violation<W: Write>(violation: &Violation, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "error".bold().red(),
        violation.message(),
        violation.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), violation.component());
    let _ = writeln!(writer);
}

fn print_summary<W: Write>(report: &ConsistencyReport, writer: &mut W) {
    let languages = report.count(Rule::MissingLanguage);
    let keys = report.count(Rule::MissingKey);
    let components = report.component_count();

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {}) in {} {}",
        FAILURE_MARK.red(),
        report.len(),
        plural(report.len(), "problem", "problems"),
        languages,
        plural(languages, "missing language", "missing languages").red(),
        keys,
        plural(keys, "missing key", "missing keys").red(),
        components,
        plural(components, "component", "components")
    );
}

/// Print a success message when the check finds nothing.
pub fn print_success_to<W: Write>(components: usize, languages: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} {} in {} {} - no issues found",
        components,
        plural(components, "component", "components"),
        languages,
        plural(languages, "language", "languages")
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print warnings that did not stop the command.
pub fn print_warnings(warnings: &[String]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

/// Print warnings to a custom writer.
pub fn print_warnings_to<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

fn print_file_list<W: Write>(title: &str, files: &[String], writer: &mut W) {
    if files.is_empty() {
        return;
    }
    let _ = writeln!(writer, "{}", title.bold());
    for file in files {
        let _ = writeln!(writer, "  {}", file);
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_warnings(&result.warnings);
    print_command_output(result, verbose, &mut io::stdout().lock());
}

fn print_command_output<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Export(summary) => print_export(summary, verbose, writer),
        CommandSummary::Import(summary) => print_import(summary, verbose, writer),
        CommandSummary::Check(summary) => print_check(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_export<W: Write>(summary: &ExportSummary, verbose: bool, writer: &mut W) {
    if verbose {
        print_file_list("Exporting files:", &summary.source_files, writer);
        print_file_list("Writing files:", &summary.written_files, writer);
    }

    let msg = format!(
        "Exported {} {} into {} language {}",
        summary.component_count,
        plural(summary.component_count, "component", "components"),
        summary.language_count,
        plural(summary.language_count, "file", "files")
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_import<W: Write>(summary: &ImportSummary, verbose: bool, writer: &mut W) {
    if verbose {
        print_file_list("Importing files:", &summary.source_files, writer);
        print_file_list("Writing files:", &summary.written_files, writer);
    }

    let written = summary.written_files.len();
    let msg = format!(
        "Imported {} {} into {} {}",
        summary.language_count,
        plural(summary.language_count, "language", "languages"),
        written,
        plural(written, "component", "components")
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    if verbose {
        print_file_list("Checking files:", &summary.source_files, writer);
    }

    if summary.report.is_empty() {
        print_success_to(summary.component_count, summary.language_count, writer);
    } else {
        report_to(&summary.report, writer);
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let msg = format!("Created {}", summary.path.display());
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Tests
// ============================================================
