use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_ATTRIBUTES, DEFAULT_IGNORE_TAGS, ScanOptions, TemplateDelimiter};
use crate::utils::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".i18n-lint.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_attributes")]
    pub attributes: Vec<String>,
    #[serde(default = "default_ignore_tags")]
    pub ignore_tags: Vec<String>,
    #[serde(default)]
    pub template_delimiters: TemplateDelimiters,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_attributes() -> Vec<String> {
    DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
}

fn default_ignore_tags() -> Vec<String> {
    DEFAULT_IGNORE_TAGS.iter().map(|s| s.to_string()).collect()
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attributes: default_attributes(),
            ignore_tags: default_ignore_tags(),
            template_delimiters: TemplateDelimiters::default(),
            include: Vec::new(),
            exclude: Vec::new(),
            color: default_color(),
        }
    }
}

/// Configured template delimiter pairs, kept as written.
///
/// Accepts a list of pairs, `[["{{", "}}"], ["{%", "%}"]]`, or a single
/// flat pair, `["{{", "}}"]`. Always written back as a list of pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "DelimiterEntries", into = "Vec<Vec<String>>")]
pub struct TemplateDelimiters(pub Vec<Vec<String>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum DelimiterEntries {
    Pairs(Vec<Vec<String>>),
    Flat(Vec<String>),
}

impl From<DelimiterEntries> for TemplateDelimiters {
    fn from(entries: DelimiterEntries) -> Self {
        match entries {
            DelimiterEntries::Pairs(pairs) => Self(pairs),
            DelimiterEntries::Flat(flat) if flat.is_empty() => Self(Vec::new()),
            DelimiterEntries::Flat(flat) => Self(vec![flat]),
        }
    }
}

impl From<TemplateDelimiters> for Vec<Vec<String>> {
    fn from(delimiters: TemplateDelimiters) -> Self {
        delimiters.0
    }
}

impl TemplateDelimiters {
    /// Well-formed pairs, in configured order.
    pub fn pairs(&self) -> Vec<TemplateDelimiter> {
        self.0
            .iter()
            .filter_map(|entry| TemplateDelimiter::from_parts(entry))
            .collect()
    }

    /// Entries that are not exactly two non-empty markers.
    pub fn malformed(&self) -> Vec<&[String]> {
        self.0
            .iter()
            .filter(|entry| TemplateDelimiter::from_parts(entry).is_none())
            .map(Vec::as_slice)
            .collect()
    }

    pub fn push(&mut self, entry: Vec<String>) {
        self.0.push(entry);
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `include` or `exclude` is invalid.
    pub fn validate(&self) -> Result<()> {
        for (key, patterns) in [("include", &self.include), ("exclude", &self.exclude)] {
            // Entries without wildcards are literal paths or substrings.
            for pattern in patterns.iter().filter(|p| is_glob_pattern(p)) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in '{}': \"{}\"", key, pattern)
                })?;
            }
        }

        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(
            &self.attributes,
            &self.ignore_tags,
            self.template_delimiters.pairs(),
        )
    }
}

pub fn config_json(config: &Config) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to generate config.")
}

pub fn default_config_json() -> Result<String> {
    config_json(&Config::default())
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, if any.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

/// Loads the nearest config file above `start_dir`, or the defaults.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_from(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// Loads an explicitly given config file.
pub fn load_config_from(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        path: Some(path.to_path_buf()),
    })
}
