//! Error types produced by a scan.
//!
//! A [`LintError`] is self-contained: reporters only need the error and the
//! name of the file it was found in.

use std::fmt;

use serde::Serialize;

use crate::core::Evidence;

/// Identifier carried by every error.
pub const ERROR_ID: &str = "(error)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    /// Hardcoded text inside an element.
    W001,
    /// Hardcoded value of a checked attribute.
    W002,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::W001 => write!(f, "W001"),
            ErrorCode::W002 => write!(f, "W002"),
        }
    }
}

/// A hardcoded string found in a source.
///
/// `evidence` matched against `scope` starting at char `character` captures
/// exactly the flagged text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintError {
    pub id: &'static str,
    pub code: ErrorCode,
    pub reason: String,
    pub evidence: Evidence,
    /// Decoded flagged text.
    pub text: String,
    /// 1-based line the error starts on.
    pub line: usize,
    /// 0-based char column of the first flagged char within `scope`.
    pub character: usize,
    pub scope: String,
    pub continued: bool,
}

impl LintError {
    pub fn is_attribute(&self) -> bool {
        self.code == ErrorCode::W002
    }
}

/// Errors found in one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub errors: Vec<LintError>,
}

impl FileReport {
    pub fn new(file: impl Into<String>, errors: Vec<LintError>) -> Self {
        Self {
            file: file.into(),
            errors,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
