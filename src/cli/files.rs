//! Resolution of command-line paths and patterns into inputs.

use std::{
    borrow::Cow,
    collections::HashSet,
    fmt, fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{Pattern, glob};

use super::exit_status::ExitStatus;
use crate::utils::is_glob_pattern;

/// Name under which standard input is reported.
pub const STDIN_NAME: &str = "stdin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin(String),
    File(PathBuf),
}

/// A source to scan and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub source: InputSource,
}

impl Input {
    pub fn file(path: PathBuf) -> Self {
        Self {
            name: path.display().to_string(),
            source: InputSource::File(path),
        }
    }

    pub fn stdin(text: String) -> Self {
        Self {
            name: STDIN_NAME.to_string(),
            source: InputSource::Stdin(text),
        }
    }

    pub fn read(&self) -> Result<Cow<'_, str>> {
        match &self.source {
            InputSource::Stdin(text) => Ok(Cow::Borrowed(text)),
            InputSource::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }
}

/// Problems with the inputs named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NoFiles,
    NotFound(String),
    IsDirectory(String),
}

impl InputError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            InputError::NoFiles | InputError::IsDirectory(_) => ExitStatus::Usage,
            InputError::NotFound(_) => ExitStatus::NoInput,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NoFiles => write!(f, "No files specified."),
            InputError::NotFound(path) => write!(f, "{path}: No such file or directory"),
            InputError::IsDirectory(path) => write!(f, "{path}: is a directory"),
        }
    }
}

impl std::error::Error for InputError {}

/// Paths excluded from scanning: glob patterns, or plain fragments matched
/// anywhere in the path.
#[derive(Debug, Default)]
pub struct Excludes {
    patterns: Vec<Pattern>,
    fragments: Vec<String>,
}

impl Excludes {
    pub fn new(entries: &[String]) -> Result<Self> {
        let mut excludes = Self::default();
        for entry in entries {
            if is_glob_pattern(entry) {
                let pattern = Pattern::new(entry)
                    .with_context(|| format!("Invalid exclude pattern: \"{}\"", entry))?;
                excludes.patterns.push(pattern);
            } else {
                excludes.fragments.push(entry.clone());
            }
        }
        Ok(excludes)
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches_path(path))
            || self
                .fragments
                .iter()
                .any(|fragment| path_str.contains(fragment.as_str()))
    }
}

/// Expands `patterns` into inputs, in the order given and without
/// duplicates.
///
/// `-` reads standard input. Glob patterns expand to the files they match;
/// other entries must name existing files. With no patterns at all, piped
/// standard input is used if there is any.
pub fn resolve_inputs(patterns: &[String], excludes: &Excludes, verbose: bool) -> Result<Vec<Input>> {
    if patterns.is_empty() {
        return match read_piped_stdin()? {
            Some(text) => Ok(vec![Input::stdin(text)]),
            None => Err(InputError::NoFiles.into()),
        };
    }

    let mut inputs = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut stdin_read = false;

    for pattern in patterns {
        if pattern == "-" {
            if !stdin_read {
                stdin_read = true;
                inputs.push(Input::stdin(read_stdin()?));
            }
            continue;
        }

        for path in expand_pattern(pattern, verbose)? {
            if excludes.is_excluded(&path) {
                if verbose {
                    eprintln!(
                        "{} Skipping excluded file: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
                continue;
            }
            if seen.insert(path.clone()) {
                inputs.push(Input::file(path));
            }
        }
    }

    Ok(inputs)
}

fn expand_pattern(pattern: &str, verbose: bool) -> Result<Vec<PathBuf>> {
    if !is_glob_pattern(pattern) {
        let path = Path::new(pattern);
        if path.is_dir() {
            return Err(InputError::IsDirectory(pattern.to_string()).into());
        }
        if !path.exists() {
            return Err(InputError::NotFound(pattern.to_string()).into());
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = match glob(pattern) {
        Ok(entries) => entries,
        Err(e) => {
            if verbose {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    "warning:".bold().yellow(),
                    pattern,
                    e
                );
            }
            return Ok(Vec::new());
        }
    };

    let files: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| entry.is_file())
        .collect();
    if files.is_empty() && verbose {
        eprintln!(
            "{} No files match pattern: {}",
            "warning:".bold().yellow(),
            pattern
        );
    }
    Ok(files)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text)
}

/// Reads standard input unless it is a terminal. Empty input counts as none.
fn read_piped_stdin() -> Result<Option<String>> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }
    let text = read_stdin()?;
    Ok((!text.is_empty()).then_some(text))
}
