//! Line-by-line scan of one source.
//!
//! The working lines are fed to the tokenizer one at a time. Hardcoded text
//! found on a line is collected as a pending error for the current element
//! and only turned into a [`LintError`] when the element changes or the line
//! ends, so text split by inline markup on one line ends up in one error
//! while text resumed on a later line gets a continuation error.

use super::classify::{is_hardcoded_string, strip_parentheses};
use super::evidence::{Evidence, fallback_column, locate_attribute, locate_first, locate_text};
use super::lines::SourceLines;
use super::options::ScanOptions;
use super::tag_stack::{TagStack, is_void_element};
use super::tokenizer::{Token, Tokenizer};
use crate::issues::{ERROR_ID, ErrorCode, LintError};

/// Scans `source` for hardcoded strings.
///
/// Errors are returned in discovery order. Every call owns its own state, so
/// independent sources can be scanned concurrently.
pub fn scan(source: &str, options: &ScanOptions) -> Vec<LintError> {
    Scanner::new(source, options).run()
}

/// Hardcoded text found on the current line, not yet reported.
#[derive(Debug)]
struct PendingText {
    line: usize,
    column: usize,
    evidence: Evidence,
    text: Vec<String>,
}

struct Scanner<'a> {
    options: &'a ScanOptions,
    lines: SourceLines,
    stack: TagStack,
    errors: Vec<LintError>,
    pending: Option<PendingText>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &str, options: &'a ScanOptions) -> Self {
        Self {
            options,
            lines: SourceLines::new(source, &options.template_delimiters),
            stack: TagStack::new(),
            errors: Vec::new(),
            pending: None,
            line: 0,
        }
    }

    fn run(mut self) -> Vec<LintError> {
        let mut tokenizer = Tokenizer::new();

        for line in 1..=self.lines.len() {
            self.flush();
            self.line = line;

            let chunk = format!("{}\n", self.lines.working(line));
            for token in tokenizer.feed(&chunk) {
                self.handle(token);
            }
        }

        for token in tokenizer.end() {
            self.handle(token);
        }
        self.flush();

        self.errors
    }

    fn handle(&mut self, token: Token) {
        match token {
            Token::OpenTag { name, self_closing } => self.open_tag(name, self_closing),
            Token::CloseTag { name } => self.close_tag(&name),
            Token::Text {
                content,
                raw,
                column,
            } => self.text(&content, &raw, column),
            Token::Attribute { name, value, raw } => self.attribute(&name, &value, &raw),
        }
    }

    fn open_tag(&mut self, name: String, self_closing: bool) {
        self.flush();

        while self.stack.implies_close(&name) {
            self.stack.pop();
        }

        let closes_immediately = self_closing || is_void_element(&name);
        self.stack.push(name);
        if closes_immediately {
            self.stack.pop();
        }
    }

    fn close_tag(&mut self, name: &str) {
        let Some(depth) = self.stack.depth_of(name) else {
            return;
        };
        for _ in 0..depth {
            self.flush();
            self.stack.pop();
        }
    }

    fn text(&mut self, content: &str, raw: &str, column: usize) {
        let content = strip_parentheses(content);
        if self.options.is_ignored_tag(&self.stack.current().name)
            || !is_hardcoded_string(content)
        {
            return;
        }

        let raw = strip_parentheses(raw);
        if let Some(pending) = &mut self.pending {
            pending.evidence.push(raw);
            pending.text.push(content.to_string());
            return;
        }

        let evidence = Evidence::new(raw);
        let column = self.claim_text(&evidence, column);
        self.pending = Some(PendingText {
            line: self.line,
            column,
            evidence,
            text: vec![content.to_string()],
        });
    }

    /// Finds the column of text evidence starting at or after char column
    /// `from` on the current line and blanks the matched text in the working
    /// copy.
    fn claim_text(&mut self, evidence: &Evidence, from: usize) -> usize {
        match locate_text(evidence, self.lines.working(self.line), from) {
            Some(located) => {
                // Later groups first: blanking may shorten the line in bytes.
                for group in located.groups.iter().rev() {
                    self.lines.blank(self.line, group.clone());
                }
                located.column
            }
            None => fallback_column(evidence, &self.lines.scope(self.line)),
        }
    }

    fn attribute(&mut self, name: &str, value: &str, raw: &str) {
        if !self.options.is_checked_attribute(name) || !is_hardcoded_string(value) {
            return;
        }

        // The value ends on the current line; it starts as many lines earlier
        // as it contains line breaks.
        let raw = raw.replace("\r\n", "\n");
        let start = self.line.saturating_sub(raw.matches('\n').count()).max(1);

        let evidence = Evidence::new(raw.trim());
        let haystack = self.lines.working_span(start, self.line);
        let located = locate_attribute(name, &evidence, &haystack)
            .or_else(|| locate_first(&evidence, &haystack));
        let character = match located {
            Some(located) => {
                self.lines.blank_span(start, located.span);
                located.column
            }
            None => fallback_column(&evidence, &haystack),
        };

        self.errors.push(LintError {
            id: ERROR_ID,
            code: ErrorCode::W002,
            reason: format!("Hardcoded '{name}' attribute"),
            evidence,
            text: value.trim().to_string(),
            line: start,
            character,
            scope: self.lines.scope_span(start, self.line),
            continued: false,
        });
    }

    /// Reports pending text for the current element.
    ///
    /// Text on the same line as the element's last error extends that error;
    /// otherwise a new error is created, marked as a continuation when the
    /// element already had one.
    fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let active = self.stack.current().active_error;
        if let Some(error) = active
            .and_then(|index| self.errors.get_mut(index))
            .filter(|error| error.line == pending.line)
        {
            error.evidence.append(pending.evidence);
            for text in pending.text {
                error.text.push(' ');
                error.text.push_str(&text);
            }
            return;
        }

        let frame = self.stack.current_mut();
        let continued = frame.active_error.is_some();
        let reason = frame.reason(continued);
        frame.active_error = Some(self.errors.len());

        self.errors.push(LintError {
            id: ERROR_ID,
            code: ErrorCode::W001,
            reason,
            evidence: pending.evidence,
            text: pending.text.join(" "),
            line: pending.line,
            character: pending.column,
            scope: self.lines.scope(pending.line),
            continued,
        });
    }
}
