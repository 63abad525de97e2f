//! i18n-lint - find hardcoded, untranslated text in HTML templates
//!
//! i18n-lint scans HTML (or HTML-like template) sources for text nodes and
//! attribute values that should have gone through a translation function,
//! and reports each one with its position and surrounding source.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, inputs, reporters)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning engine (tokenizer, tag tracking, error location)
//! - `issues`: Error and per-file report types
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
