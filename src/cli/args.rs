//! CLI argument definitions using clap.
//!
//! Options given on the command line override the configuration file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, TemplateDelimiters};
use crate::utils::split_list;

#[derive(Debug, Parser)]
#[command(name = "i18n-lint", author, version, about, long_about = None)]
pub struct Arguments {
    /// Files or glob patterns to scan; `-` reads standard input
    pub files: Vec<String>,

    /// Attributes to check, comma separated (default: alt,placeholder,title)
    #[arg(short, long, value_name = "LIST")]
    pub attributes: Option<String>,

    /// Tags whose text is not checked, comma separated (default: script,style,pre,code)
    #[arg(short, long, value_name = "LIST")]
    pub ignore_tags: Option<String>,

    /// Template delimiters to ignore, e.g. "{{,}}". Can be given multiple times
    #[arg(short, long, value_name = "OPEN,CLOSE")]
    pub template_delimiters: Vec<String>,

    /// Paths to skip, comma separated globs or path fragments
    #[arg(short, long, value_name = "LIST")]
    pub exclude: Option<String>,

    /// Output format: default, simple, unix or json
    #[arg(short, long, default_value = "default")]
    pub reporter: String,

    /// Configuration file (default: nearest .i18n-lint.json)
    #[arg(short, long, value_name = "PATH", env = "I18N_LINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to a new config file
    #[arg(long)]
    pub init: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Applies command-line overrides to a loaded configuration.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(attributes) = &self.attributes {
            config.attributes = split_list(attributes);
        }
        if let Some(ignore_tags) = &self.ignore_tags {
            config.ignore_tags = split_list(ignore_tags);
        }
        if !self.template_delimiters.is_empty() {
            let mut delimiters = TemplateDelimiters::default();
            for value in &self.template_delimiters {
                delimiters.push(value.split(',').map(String::from).collect());
            }
            config.template_delimiters = delimiters;
        }
        if let Some(exclude) = &self.exclude {
            config.exclude = split_list(exclude);
        }
        if self.no_color {
            config.color = false;
        }
        if self.init && !self.files.is_empty() {
            config.include = self.files.clone();
        }
        config
    }
}
