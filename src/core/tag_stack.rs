/// Elements that never have content or a close tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose start tag closes an open `<p>`.
const CLOSES_PARAGRAPH: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "details",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// One open element and the error currently reported for its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFrame {
    /// Empty for the root frame.
    pub name: String,
    /// Index into the scan's error list.
    pub active_error: Option<usize>,
}

impl TagFrame {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active_error: None,
        }
    }

    pub fn root() -> Self {
        Self::new("")
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Reason reported for hardcoded text inside this frame.
    pub fn reason(&self, continued: bool) -> String {
        let mut reason = if self.is_root() {
            "Hardcoded text node".to_string()
        } else {
            format!("Hardcoded <{}> tag", self.name)
        };
        if continued {
            reason.push_str(" (continued)");
        }
        reason
    }
}

/// Open elements, innermost last, above a root frame that is never popped.
#[derive(Debug, Clone)]
pub struct TagStack {
    root: TagFrame,
    frames: Vec<TagFrame>,
}

impl Default for TagStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TagStack {
    pub fn new() -> Self {
        Self {
            root: TagFrame::root(),
            frames: Vec::new(),
        }
    }

    pub fn current(&self) -> &TagFrame {
        self.frames.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut TagFrame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.frames.push(TagFrame::new(name));
    }

    /// Pops the innermost element. The root frame stays.
    pub fn pop(&mut self) -> Option<TagFrame> {
        self.frames.pop()
    }

    /// How many frames have to be popped to close `name`, if it is open.
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        self.frames
            .iter()
            .rev()
            .position(|frame| frame.name == name)
            .map(|index| index + 1)
    }

    /// Whether opening `name` implicitly closes the current element.
    pub fn implies_close(&self, name: &str) -> bool {
        let current = self.current().name.as_str();
        match current {
            "p" => CLOSES_PARAGRAPH.contains(&name),
            "li" => name == "li",
            "option" => name == "option" || name == "optgroup",
            "dt" | "dd" => name == "dt" || name == "dd",
            "td" | "th" => matches!(name, "td" | "th" | "tr"),
            "tr" => name == "tr",
            _ => false,
        }
    }
}
