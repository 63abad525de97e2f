//! Evidence for reported errors and the lookup of their columns.
//!
//! Evidence is kept as the list of literal source fragments that were
//! flagged, in order. It is rendered to a regular expression with one
//! capture group per piece only when a column has to be found or a reporter
//! needs to highlight the text.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex, RegexBuilder};
use serde::{Serialize, Serializer};

use crate::utils::{byte_offset, char_column};

/// Whitespace a fragment is split at: two or more spaces (what a masked
/// template region leaves behind) or any run containing a line break.
static SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\r?\n\s*| {2,}").unwrap());

/// Optional markup allowed before text-node evidence when looking up its
/// column. Matches that start right after a `>` are longer and win.
const TEXT_PREFIX: &str = r"[>\n\r]* *";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    fragments: Vec<String>,
}

impl Evidence {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragments: vec![fragment.into()],
        }
    }

    /// Adds text found later in the same region.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn append(&mut self, other: Evidence) {
        self.fragments.extend(other.fragments);
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The literal text held by each capture group, in order.
    pub fn pieces(&self) -> Vec<&str> {
        self.fragments
            .iter()
            .flat_map(|fragment| SPLIT_REGEX.split(fragment))
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    /// Regex source, e.g. `(Hello).*?(world)`.
    pub fn pattern(&self) -> String {
        self.pieces()
            .iter()
            .map(|piece| format!("({})", regex::escape(piece)))
            .collect::<Vec<_>>()
            .join(".*?")
    }

    pub fn regex(&self) -> Result<Regex, regex::Error> {
        build_regex(&self.pattern())
    }

    /// Matches the evidence against `scope` starting at char `character`
    /// and returns the captured pieces.
    pub fn captures_at(&self, scope: &str, character: usize) -> Option<Vec<String>> {
        let regex = self.regex().ok()?;
        let captures = regex.captures_at(scope, byte_offset(scope, character))?;
        Some(
            captures
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect(),
        )
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.pattern())
    }
}

impl Serialize for Evidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn build_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()
}

/// Where a piece of evidence was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Char column of the first capture group.
    pub column: usize,
    /// Byte range from the first capture group to the end of the match.
    pub span: Range<usize>,
    /// Byte ranges of the capture groups.
    pub groups: Vec<Range<usize>>,
}

impl Located {
    fn from_captures(haystack: &str, captures: &Captures) -> Option<Self> {
        let groups: Vec<Range<usize>> = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.range())
            .collect();
        let start = groups.first()?.start;
        let end = captures.get(0)?.end();
        Some(Self {
            column: char_column(haystack, start),
            span: start..end,
            groups,
        })
    }
}

/// Finds text-node evidence on a line, for text starting at char column
/// `from`.
///
/// The evidence may be preceded by a `>`, line breaks and spaces. The first
/// match whose text starts at or after `from` is taken. When there is none,
/// the longest match anywhere on the line is used, the first one on ties.
pub fn locate_text(evidence: &Evidence, line: &str, from: usize) -> Option<Located> {
    let regex = build_regex(&format!("{TEXT_PREFIX}{}", evidence.pattern())).ok()?;
    let start = byte_offset(line, from);

    // The prefix may reach back to the `>` of the preceding tag.
    let mut at = byte_offset(line, from.saturating_sub(1));
    while let Some(captures) = regex.captures_at(line, at) {
        let located = Located::from_captures(line, &captures)?;
        if located.span.start >= start {
            return Some(located);
        }
        let matched = captures.get(0)?;
        let next = line[matched.start()..].chars().next().map_or(1, char::len_utf8);
        at = matched.start() + next;
    }

    locate_longest(&regex, line)
}

fn locate_longest(regex: &Regex, line: &str) -> Option<Located> {
    let mut best: Option<Captures> = None;
    for captures in regex.captures_iter(line) {
        let len = captures.get(0).map_or(0, |m| m.len());
        let longer = best
            .as_ref()
            .and_then(|b| b.get(0))
            .is_none_or(|b| len > b.len());
        if longer {
            best = Some(captures);
        }
    }

    Located::from_captures(line, &best?)
}

/// Finds attribute evidence inside the value of the attribute `name`.
///
/// `haystack` may hold several attributes with the same text; only a value
/// written right after `name=` counts.
pub fn locate_attribute(name: &str, evidence: &Evidence, haystack: &str) -> Option<Located> {
    let pattern = format!(
        r#"(?:^|[\s"'/])(?i:{})\s*=\s*["']?\s*{}"#,
        regex::escape(name),
        evidence.pattern()
    );
    let regex = build_regex(&pattern).ok()?;
    let captures = regex.captures(haystack)?;
    Located::from_captures(haystack, &captures)
}

/// Finds the first occurrence of attribute evidence.
pub fn locate_first(evidence: &Evidence, haystack: &str) -> Option<Located> {
    let regex = evidence.regex().ok()?;
    let captures = regex.captures(haystack)?;
    Located::from_captures(haystack, &captures)
}

/// Column used when the evidence cannot be matched: the first literal
/// occurrence of its first piece, or the start of the line.
pub fn fallback_column(evidence: &Evidence, haystack: &str) -> usize {
    evidence
        .pieces()
        .first()
        .and_then(|piece| haystack.find(piece))
        .map_or(0, |byte| char_column(haystack, byte))
}
