use std::collections::HashSet;

/// Attributes inspected when none are configured.
pub const DEFAULT_ATTRIBUTES: &[&str] = &["alt", "placeholder", "title"];

/// Tags whose text is never inspected when none are configured.
pub const DEFAULT_IGNORE_TAGS: &[&str] = &["script", "style", "pre", "code"];

/// A pair of template markers, e.g. `{{` and `}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDelimiter {
    pub open: String,
    pub close: String,
}

impl TemplateDelimiter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Builds a delimiter from a configured entry.
    ///
    /// Returns `None` unless the entry holds exactly two non-empty markers.
    pub fn from_parts(parts: &[String]) -> Option<Self> {
        match parts {
            [open, close] if !open.is_empty() && !close.is_empty() => {
                Some(Self::new(open.as_str(), close.as_str()))
            }
            _ => None,
        }
    }
}

/// Options for a single scan. Names are stored lower-cased, matching the
/// tokenizer's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub attributes: HashSet<String>,
    pub ignore_tags: HashSet<String>,
    pub template_delimiters: Vec<TemplateDelimiter>,
}

impl ScanOptions {
    pub fn new<A, T>(
        attributes: A,
        ignore_tags: T,
        template_delimiters: Vec<TemplateDelimiter>,
    ) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        Self {
            attributes: lower_set(attributes),
            ignore_tags: lower_set(ignore_tags),
            template_delimiters,
        }
    }

    pub fn with_template_delimiters(mut self, delimiters: Vec<TemplateDelimiter>) -> Self {
        self.template_delimiters = delimiters;
        self
    }

    pub fn is_checked_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    pub fn is_ignored_tag(&self, name: &str) -> bool {
        self.ignore_tags.contains(name)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTES, DEFAULT_IGNORE_TAGS, Vec::new())
    }
}

fn lower_set<I>(names: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}
