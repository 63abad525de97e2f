//! Heuristic deciding whether a string is human-readable text rather than a
//! translation key.

use std::sync::LazyLock;

use regex::Regex;

/// Lowercase prose: letters, `!`, `?` and spaces, optionally ending in an
/// ellipsis.
static LOWERCASE_PROSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z!? ]{2,}(?:\.{2,})?$").unwrap());

static CAPITAL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());

/// A lowercase letter followed by a space, i.e. more than one word.
static WORD_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z] ").unwrap());

/// Checks whether `text` looks like a hardcoded, untranslated string.
///
/// Translation keys such as `a.translation.key` are single lowercase tokens
/// without spaces; anything capitalised or made of several words is treated
/// as natural language.
///
/// # Examples
///
/// ```
/// use i18n_lint::core::is_hardcoded_string;
///
/// assert!(is_hardcoded_string("Some Text"));
/// assert!(is_hardcoded_string("word"));
/// assert!(is_hardcoded_string("loading..."));
/// assert!(!is_hardcoded_string("a.b.c"));
/// assert!(!is_hardcoded_string("   "));
/// ```
pub fn is_hardcoded_string(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    if LOWERCASE_PROSE_REGEX.is_match(text) {
        return true;
    }

    CAPITAL_REGEX.is_match(text) || WORD_BREAK_REGEX.is_match(text)
}

/// Trims `text` and drops one leading and one trailing parenthesis.
///
/// Text interrupted by markup inside parentheses, as in
/// `Add favourite (<span></span>) by page`, otherwise carries a dangling
/// `(` or `)` into its evidence.
pub fn strip_parentheses(text: &str) -> &str {
    let is_paren = |c: char| c == '(' || c == ')';
    let text = text.trim();
    let text = text.strip_prefix(is_paren).unwrap_or(text);
    let text = text.strip_suffix(is_paren).unwrap_or(text);
    text.trim()
}
