//! A lenient, incremental HTML tokenizer.
//!
//! Input is fed in chunks (the scanner feeds one line at a time) and state
//! carries over between chunks, so tags, attribute values and comments may
//! span lines. Text is emitted at every markup boundary and at the end of
//! every chunk, which ties each text token to the chunk it came from.

/// Elements whose content is raw text up to the matching close tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// End of an opening tag. Its attributes precede it.
    OpenTag { name: String, self_closing: bool },
    /// A complete attribute. `raw` is the value as written in the source.
    Attribute {
        name: String,
        value: String,
        raw: String,
    },
    /// Text content. `raw` is the source slice, `content` has entities
    /// decoded and `column` is the char column `raw` starts at within the
    /// chunk it was emitted from.
    Text {
        content: String,
        raw: String,
        column: usize,
    },
    CloseTag { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    TagOpen,
    EndTagOpen,
    TagName,
    EndTagName,
    AfterEndTagName,
    BeforeAttrName,
    AttrName,
    AfterAttrName,
    BeforeAttrValue,
    AttrValueQuoted(char),
    AttrValueUnquoted,
    SelfClosingStart,
    MarkupDeclaration,
    Comment,
    Bogus,
    RawText,
}

#[derive(Debug)]
pub struct Tokenizer {
    state: State,
    text: String,
    text_start: usize,
    column: usize,
    tag_name: String,
    attr_name: String,
    attr_value: String,
    raw_text_element: String,
    markup: String,
    dashes: usize,
    tokens: Vec<Token>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            state: State::Text,
            text: String::new(),
            text_start: 0,
            column: 0,
            tag_name: String::new(),
            attr_name: String::new(),
            attr_value: String::new(),
            raw_text_element: String::new(),
            markup: String::new(),
            dashes: 0,
            tokens: Vec::new(),
        }
    }

    /// Consumes a chunk and returns the tokens it completed.
    pub fn feed(&mut self, chunk: &str) -> Vec<Token> {
        // Text carried over from the previous chunk starts this one.
        self.text_start = 0;
        self.column = 0;
        for c in chunk.chars() {
            self.step(c);
            self.column += 1;
        }

        match self.state {
            State::Text => self.emit_text(),
            State::RawText => self.emit_raw_text_prefix(),
            _ => {}
        }

        std::mem::take(&mut self.tokens)
    }

    /// Signals the end of input. Unterminated tags are dropped; pending text
    /// is emitted.
    pub fn end(&mut self) -> Vec<Token> {
        match self.state {
            State::TagOpen => {
                self.push_markup_as_text("<", self.column);
                self.emit_text();
            }
            State::EndTagOpen => {
                self.push_markup_as_text("</", self.column);
                self.emit_text();
            }
            State::Text => self.emit_text(),
            State::RawText => self.emit_raw_text(self.text.len()),
            _ => {}
        }
        self.state = State::Text;

        std::mem::take(&mut self.tokens)
    }

    fn step(&mut self, c: char) {
        match self.state {
            State::Text => {
                if c == '<' {
                    self.state = State::TagOpen;
                } else {
                    self.push_text(c);
                }
            }
            State::TagOpen => {
                if c.is_ascii_alphabetic() {
                    self.emit_text();
                    self.start_tag_name(c, State::TagName);
                } else if c == '/' {
                    self.state = State::EndTagOpen;
                } else if c == '!' {
                    self.emit_text();
                    self.markup.clear();
                    self.state = State::MarkupDeclaration;
                } else if c == '?' {
                    self.emit_text();
                    self.state = State::Bogus;
                } else {
                    // Not markup after all, e.g. `a < b`.
                    self.push_markup_as_text("<", self.column);
                    self.state = State::Text;
                    self.step(c);
                }
            }
            State::EndTagOpen => {
                self.emit_text();
                if c.is_ascii_alphabetic() {
                    self.start_tag_name(c, State::EndTagName);
                } else if c == '>' {
                    self.state = State::Text;
                } else {
                    self.state = State::Bogus;
                }
            }
            State::TagName => match c {
                '>' => self.open_tag(false),
                '/' => self.state = State::SelfClosingStart,
                c if c.is_whitespace() => self.state = State::BeforeAttrName,
                c => self.tag_name.push(c.to_ascii_lowercase()),
            },
            State::EndTagName => match c {
                '>' => self.close_tag(),
                c if c.is_whitespace() => self.state = State::AfterEndTagName,
                c => self.tag_name.push(c.to_ascii_lowercase()),
            },
            State::AfterEndTagName => {
                if c == '>' {
                    self.close_tag();
                }
            }
            State::BeforeAttrName => match c {
                '>' => self.open_tag(false),
                '/' => self.state = State::SelfClosingStart,
                c if c.is_whitespace() => {}
                c => self.start_attr_name(c),
            },
            State::AttrName => match c {
                '=' => self.state = State::BeforeAttrValue,
                '>' => {
                    self.emit_attribute();
                    self.open_tag(false);
                }
                '/' => {
                    self.emit_attribute();
                    self.state = State::SelfClosingStart;
                }
                c if c.is_whitespace() => self.state = State::AfterAttrName,
                c => self.attr_name.push(c.to_ascii_lowercase()),
            },
            State::AfterAttrName => match c {
                '=' => self.state = State::BeforeAttrValue,
                '>' => {
                    self.emit_attribute();
                    self.open_tag(false);
                }
                '/' => {
                    self.emit_attribute();
                    self.state = State::SelfClosingStart;
                }
                c if c.is_whitespace() => {}
                c => {
                    self.emit_attribute();
                    self.start_attr_name(c);
                }
            },
            State::BeforeAttrValue => match c {
                '"' | '\'' => self.state = State::AttrValueQuoted(c),
                '>' => {
                    self.emit_attribute();
                    self.open_tag(false);
                }
                c if c.is_whitespace() => {}
                c => {
                    self.attr_value.push(c);
                    self.state = State::AttrValueUnquoted;
                }
            },
            State::AttrValueQuoted(quote) => {
                if c == quote {
                    self.emit_attribute();
                    self.state = State::BeforeAttrName;
                } else {
                    self.attr_value.push(c);
                }
            }
            State::AttrValueUnquoted => match c {
                '>' => {
                    self.emit_attribute();
                    self.open_tag(false);
                }
                c if c.is_whitespace() => {
                    self.emit_attribute();
                    self.state = State::BeforeAttrName;
                }
                c => self.attr_value.push(c),
            },
            State::SelfClosingStart => {
                if c == '>' {
                    self.open_tag(true);
                } else {
                    self.state = State::BeforeAttrName;
                    self.step(c);
                }
            }
            State::MarkupDeclaration => {
                if c == '>' {
                    self.state = State::Text;
                    return;
                }
                self.markup.push(c);
                if self.markup == "--" {
                    self.dashes = 0;
                    self.state = State::Comment;
                } else if !"--".starts_with(self.markup.as_str()) {
                    self.state = State::Bogus;
                }
            }
            State::Comment => {
                if c == '>' && self.dashes >= 2 {
                    self.state = State::Text;
                } else if c == '-' {
                    self.dashes += 1;
                } else {
                    self.dashes = 0;
                }
            }
            State::Bogus => {
                if c == '>' {
                    self.state = State::Text;
                }
            }
            State::RawText => {
                self.push_text(c);
                let closing = format!("</{}", self.raw_text_element);
                if ends_with_ignore_case(&self.text, &closing) {
                    let end = self.text.len() - closing.len();
                    self.emit_raw_text(end);
                    self.text.clear();
                    self.tag_name = std::mem::take(&mut self.raw_text_element);
                    self.state = State::AfterEndTagName;
                }
            }
        }
    }

    fn push_text(&mut self, c: char) {
        if self.text.is_empty() {
            self.text_start = self.column;
        }
        self.text.push(c);
    }

    /// Pushes markup that turned out to be text and ended right before
    /// char column `end`.
    fn push_markup_as_text(&mut self, markup: &str, end: usize) {
        if self.text.is_empty() {
            self.text_start = end.saturating_sub(markup.chars().count());
        }
        self.text.push_str(markup);
    }

    fn start_tag_name(&mut self, c: char, state: State) {
        self.tag_name.clear();
        self.tag_name.push(c.to_ascii_lowercase());
        self.state = state;
    }

    fn start_attr_name(&mut self, c: char) {
        self.attr_name.clear();
        self.attr_value.clear();
        self.attr_name.push(c.to_ascii_lowercase());
        self.state = State::AttrName;
    }

    fn open_tag(&mut self, self_closing: bool) {
        let name = std::mem::take(&mut self.tag_name);
        let raw_text = !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str());
        if raw_text {
            self.raw_text_element = name.clone();
        }
        self.tokens.push(Token::OpenTag { name, self_closing });
        self.state = if raw_text {
            State::RawText
        } else {
            State::Text
        };
    }

    fn close_tag(&mut self) {
        let name = std::mem::take(&mut self.tag_name);
        self.tokens.push(Token::CloseTag { name });
        self.state = State::Text;
    }

    fn emit_attribute(&mut self) {
        let name = std::mem::take(&mut self.attr_name);
        let raw = std::mem::take(&mut self.attr_value);
        if name.is_empty() {
            return;
        }
        self.tokens.push(Token::Attribute {
            name,
            value: decode_entities(&raw),
            raw,
        });
    }

    fn emit_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.text);
        self.tokens.push(Token::Text {
            content: decode_entities(&raw),
            raw,
            column: self.text_start,
        });
    }

    /// Emits raw text up to `end` (a byte offset into the buffer) without
    /// decoding it, and keeps the remainder.
    fn emit_raw_text(&mut self, end: usize) {
        let rest = self.text.split_off(end);
        let raw = std::mem::replace(&mut self.text, rest);
        if !raw.is_empty() {
            let column = self.text_start;
            self.text_start += raw.chars().count();
            self.tokens.push(Token::Text {
                content: raw.clone(),
                raw,
                column,
            });
        }
    }

    /// At the end of a chunk, emits raw text except a trailing `<...` that
    /// could still grow into the closing tag.
    fn emit_raw_text_prefix(&mut self) {
        let closing_len = self.raw_text_element.len() + 2;
        let end = match self.text.rfind('<') {
            Some(pos) if self.text.len() - pos < closing_len => pos,
            _ => self.text.len(),
        };
        self.emit_raw_text(end);
    }
}

fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    text.len() >= suffix.len()
        && text.is_char_boundary(text.len() - suffix.len())
        && text[text.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Decodes named and numeric character references. Unknown or malformed
/// references are kept as written.
pub fn decode_entities(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}
