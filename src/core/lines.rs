use std::ops::Range;

use super::mask::mask_templates;
use super::options::TemplateDelimiter;
use crate::utils::blank;

/// The scanned source as two parallel line arrays.
///
/// `original` is never modified and provides the `scope` of every error.
/// `working` starts as the template-masked source and has every span
/// claimed by an error blanked out, so later lookups on the same line skip
/// text that has already been reported. Both arrays always have the same
/// number of lines and the same number of chars per line.
///
/// Line numbers taken and returned by this type are 1-based.
#[derive(Debug, Clone)]
pub struct SourceLines {
    original: Vec<String>,
    working: Vec<String>,
}

impl SourceLines {
    pub fn new(source: &str, delimiters: &[TemplateDelimiter]) -> Self {
        let original = source.split('\n').map(String::from).collect();
        let working = mask_templates(source, delimiters)
            .split('\n')
            .map(String::from)
            .collect();
        Self { original, working }
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// The working copy of `line`, including any trailing `\r`.
    pub fn working(&self, line: usize) -> &str {
        line.checked_sub(1)
            .and_then(|index| self.working.get(index))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// The original text of `line` without a trailing `\r`.
    pub fn scope(&self, line: usize) -> String {
        self.scope_span(line, line)
    }

    /// Original lines `start..=end` joined with `\n`, carriage returns removed.
    pub fn scope_span(&self, start: usize, end: usize) -> String {
        join_span(&self.original, start, end)
    }

    /// Working lines `start..=end` joined the same way as [`Self::scope_span`],
    /// so char offsets into one are valid in the other.
    pub fn working_span(&self, start: usize, end: usize) -> String {
        join_span(&self.working, start, end)
    }

    /// Blanks a byte range of the working copy of `line`.
    pub fn blank(&mut self, line: usize, range: Range<usize>) {
        let Some(text) = line
            .checked_sub(1)
            .and_then(|index| self.working.get_mut(index))
        else {
            return;
        };
        if range.start >= range.end || range.end > text.len() {
            return;
        }
        let blanked = blank(&text[range.clone()]);
        text.replace_range(range, &blanked);
    }

    /// Blanks a byte range of the span produced by
    /// [`Self::working_span`]`(start, ..)`, mapping it back onto the
    /// individual lines it covers.
    pub fn blank_span(&mut self, start: usize, range: Range<usize>) {
        let mut offset = 0;
        let mut line = start.max(1);

        while offset < range.end && line <= self.working.len() {
            let len = trimmed(&self.working[line - 1]).len();
            let segment = offset..offset + len;

            let from = range.start.max(segment.start);
            let to = range.end.min(segment.end);
            if from < to {
                self.blank(line, from - offset..to - offset);
            }

            // The joining `\n` takes one byte.
            offset += len + 1;
            line += 1;
        }
    }
}

fn trimmed(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn join_span(lines: &[String], start: usize, end: usize) -> String {
    let start = start.max(1);
    let end = end.min(lines.len());
    if start > end {
        return String::new();
    }
    lines[start - 1..end]
        .iter()
        .map(|line| trimmed(line))
        .collect::<Vec<_>>()
        .join("\n")
}
