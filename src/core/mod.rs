//! The scanner: pure functions from source text and options to errors.
//!
//! ## Module Structure
//!
//! - `classify`: heuristic deciding whether text is hardcoded
//! - `mask`: blanking of template-language regions
//! - `lines`: original and working copies of the source lines
//! - `evidence`: evidence patterns and column lookup
//! - `tokenizer`: incremental HTML tokenizer
//! - `tag_stack`: open elements and their active errors
//! - `scanner`: the line-by-line scan tying it all together

pub mod classify;
pub mod evidence;
pub mod lines;
pub mod mask;
pub mod options;
pub mod scanner;
pub mod tag_stack;
pub mod tokenizer;

pub use classify::{is_hardcoded_string, strip_parentheses};
pub use evidence::Evidence;
pub use mask::mask_templates;
pub use options::{DEFAULT_ATTRIBUTES, DEFAULT_IGNORE_TAGS, ScanOptions, TemplateDelimiter};
pub use scanner::scan;
