//! Common utility functions shared across the codebase.

/// Returns the number of chars in `text` before byte offset `byte`.
///
/// Columns are reported in chars, while regex matches and slicing work in
/// bytes. `byte` must lie on a char boundary.
///
/// # Examples
///
/// ```
/// use i18n_lint::utils::char_column;
///
/// assert_eq!(char_column("<p>Hello</p>", 3), 3);
/// assert_eq!(char_column("© Hello", 3), 2);
/// ```
pub fn char_column(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

/// Returns the byte offset of the char at `column`, or `text.len()` when
/// the column lies past the end.
pub fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Replaces every char with a space, keeping line breaks.
///
/// The result has the same number of chars and lines as the input, so
/// column arithmetic done against the original text stays valid.
pub fn blank(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { c } else { ' ' })
        .collect()
}

/// Whether a path pattern contains glob wildcards (`*` or `?`).
///
/// Patterns without wildcards are treated as literal paths, so a bracketed
/// directory name such as `pages/[id]` needs no escaping.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Splits a comma-separated option value, dropping empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
