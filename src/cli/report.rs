//! Reporters printing the errors of each scanned input.
//!
//! Separate from the scanner so the library can be used without any output.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use enum_dispatch::enum_dispatch;
use serde::Serialize;
use unicode_width::UnicodeWidthChar;

use crate::issues::{FileReport, LintError};
use crate::utils::byte_offset;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Width of the `  line | ` gutter printed by the default reporter.
const GUTTER_WIDTH: usize = 9;

/// Output format for scan results.
///
/// Called once per input; prints nothing for an input without errors.
#[enum_dispatch]
pub trait Reporter {
    fn report(&self, report: &FileReport, writer: &mut dyn Write) -> Result<()>;
}

#[enum_dispatch(Reporter)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterKind {
    Default(DefaultReporter),
    Simple(SimpleReporter),
    Unix(UnixReporter),
    Json(JsonReporter),
}

impl ReporterKind {
    pub const NAMES: &'static [&'static str] = &["default", "simple", "unix", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(DefaultReporter.into()),
            "simple" => Some(SimpleReporter.into()),
            "unix" => Some(UnixReporter.into()),
            "json" => Some(JsonReporter.into()),
            _ => None,
        }
    }
}

/// Source excerpts with the flagged text highlighted.
///
/// ```text
///
///   index.html
///      3 | <p>Hello world</p>
///             ^ Hardcoded <p> tag
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultReporter;

impl Reporter for DefaultReporter {
    fn report(&self, report: &FileReport, writer: &mut dyn Write) -> Result<()> {
        if report.is_clean() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "{}", format!("  {}", report.file).bold())?;

        let mut last_line = None;
        for error in &report.errors {
            let line = format!("{:>6}", error.line);
            let line = if last_line == Some(error.line) {
                line.dimmed()
            } else {
                line.normal()
            };
            last_line = Some(error.line);

            writeln!(writer, "{} | {}", line, indent_lines(&highlight(error)))?;
            writeln!(
                writer,
                "{}{}{} {}",
                " ".repeat(GUTTER_WIDTH),
                caret_padding(error),
                "^".red(),
                error.reason
            )?;
        }

        Ok(())
    }
}

/// The scope with every evidence capture highlighted.
fn highlight(error: &LintError) -> String {
    let scope = error.scope.as_str();
    let captures = error.evidence.regex().ok().and_then(|regex| {
        regex
            .captures_at(scope, byte_offset(scope, error.character))
            .map(|caps| caps.iter().skip(1).flatten().map(|m| m.range()).collect::<Vec<_>>())
    });
    let Some(groups) = captures else {
        return scope.to_string();
    };

    let mut highlighted = String::with_capacity(scope.len());
    let mut last = 0;
    for group in groups {
        highlighted.push_str(&scope[last..group.start]);
        highlighted.push_str(&scope[group.clone()].red().reversed().to_string());
        last = group.end;
    }
    highlighted.push_str(&scope[last..]);
    highlighted
}

/// Continuation lines of a multi-line scope are aligned under the first.
fn indent_lines(text: &str) -> String {
    text.replace('\n', &format!("\n{}", " ".repeat(GUTTER_WIDTH)))
}

/// Blank space up to `character` on the last scope line before it. Tabs are
/// kept so the caret lines up with tab-indented source.
fn caret_padding(error: &LintError) -> String {
    let before = &error.scope[..byte_offset(&error.scope, error.character)];
    let last_line = before.rsplit('\n').next().unwrap_or(before);
    last_line
        .chars()
        .map(|c| match c {
            '\t' => "\t".to_string(),
            c => " ".repeat(c.width().unwrap_or(0)),
        })
        .collect()
}

/// `<file>: line <line>, column <character>, <reason>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleReporter;

impl Reporter for SimpleReporter {
    fn report(&self, report: &FileReport, writer: &mut dyn Write) -> Result<()> {
        for error in &report.errors {
            writeln!(
                writer,
                "{}: line {}, column {}, {}",
                report.file, error.line, error.character, error.reason
            )?;
        }
        Ok(())
    }
}

/// `<file>:<line>:<character> <reason>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnixReporter;

impl Reporter for UnixReporter {
    fn report(&self, report: &FileReport, writer: &mut dyn Write) -> Result<()> {
        for error in &report.errors {
            writeln!(
                writer,
                "{}:{}:{} {}",
                report.file, error.line, error.character, error.reason
            )?;
        }
        Ok(())
    }
}

/// A pretty-printed JSON array of `{ "file", "error" }` objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: &'a str,
    error: &'a LintError,
}

impl Reporter for JsonReporter {
    fn report(&self, report: &FileReport, writer: &mut dyn Write) -> Result<()> {
        if report.is_clean() {
            return Ok(());
        }

        let entries: Vec<JsonEntry> = report
            .errors
            .iter()
            .map(|error| JsonEntry {
                file: &report.file,
                error,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *writer, &entries)
            .context("Failed to write JSON report")?;
        writeln!(writer)?;
        Ok(())
    }
}
