//! Blanks template-language regions so they are neither parsed as markup nor
//! classified as text.

use std::borrow::Cow;

use regex::{Captures, Regex};

use super::options::TemplateDelimiter;
use crate::utils::blank;

/// Replaces every `open ... close` region with spaces.
///
/// The match is non-greedy and may span lines. Line breaks are kept and each
/// other char becomes one space, so the result has the same number of lines
/// and chars per line as `source`. Delimiters are applied in the given order;
/// a region left behind by an earlier pair is already blank when the next
/// pair runs.
pub fn mask_templates<'a>(source: &'a str, delimiters: &[TemplateDelimiter]) -> Cow<'a, str> {
    let mut masked = Cow::Borrowed(source);

    for delimiter in delimiters {
        let Some(regex) = delimiter_regex(delimiter) else {
            continue;
        };
        let replaced = match regex.replace_all(&masked, |caps: &Captures| blank(&caps[0])) {
            Cow::Owned(text) => Some(text),
            Cow::Borrowed(_) => None,
        };
        if let Some(text) = replaced {
            masked = Cow::Owned(text);
        }
    }

    masked
}

fn delimiter_regex(delimiter: &TemplateDelimiter) -> Option<Regex> {
    if delimiter.open.is_empty() || delimiter.close.is_empty() {
        return None;
    }
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(&delimiter.open),
        regex::escape(&delimiter.close)
    ))
    .ok()
}
