use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use clap::CommandFactory;
use colored::Colorize;
use rayon::prelude::*;

use super::{
    args::Arguments,
    exit_status::ExitStatus,
    files::{Excludes, InputError, resolve_inputs},
    report::{FAILURE_MARK, Reporter, ReporterKind, SUCCESS_MARK},
};
use crate::config::{CONFIG_FILE_NAME, Config, config_json, load_config, load_config_from};
use crate::core::scan;
use crate::issues::FileReport;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;
    let config = load(&args)?;

    if !config.color {
        colored::control::set_override(false);
    }

    if verbose {
        for entry in config.template_delimiters.malformed() {
            eprintln!(
                "{} Ignoring template delimiters {:?}: expected an opening and a closing marker",
                "warning:".bold().yellow(),
                entry
            );
        }
    }

    if args.init {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        init(&config, &path)?;
        return Ok(ExitStatus::Success);
    }

    let Some(reporter) = ReporterKind::from_name(&args.reporter) else {
        eprintln!("No reporter called '{}'", args.reporter);
        return Ok(ExitStatus::NoInput);
    };

    let patterns = if args.files.is_empty() {
        &config.include
    } else {
        &args.files
    };
    let excludes = Excludes::new(&config.exclude)?;
    let inputs = match resolve_inputs(patterns, &excludes, verbose) {
        Ok(inputs) => inputs,
        Err(err) => {
            let Some(input_err) = err.downcast_ref::<InputError>() else {
                return Err(err);
            };
            print_input_error(input_err);
            return Ok(input_err.exit_status());
        }
    };

    let options = config.scan_options();
    let reports = inputs
        .par_iter()
        .map(|input| -> Result<FileReport> {
            let source = input.read()?;
            Ok(FileReport::new(&input.name, scan(&source, &options)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = io::stdout().lock();
    for report in &reports {
        reporter.report(report, &mut stdout)?;
    }
    stdout.flush()?;

    let error_count: usize = reports.iter().map(|report| report.errors.len()).sum();
    if verbose {
        print_summary(reports.len(), error_count);
    }

    Ok(if error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}

/// Loads the config file and applies command-line overrides.
fn load(args: &Arguments) -> Result<Config> {
    let loaded = match &args.config {
        Some(path) if !args.init => load_config_from(path)?,
        _ => load_config(&env::current_dir()?)?,
    };

    if args.verbose && !loaded.from_file() {
        eprintln!("Note: No {CONFIG_FILE_NAME} found, using default configuration");
    }

    let config = args.apply_to(loaded.config);
    config.validate()?;
    Ok(config)
}

fn init(config: &Config, path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::write(path, config_json(config)? + "\n")?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", path.display()).green()
    );
    Ok(())
}

fn print_input_error(err: &InputError) {
    match err {
        InputError::NoFiles => {
            println!("{err}");
            println!();
            println!("{}", Arguments::command().render_usage());
        }
        _ => eprintln!("{err}"),
    }
}

fn print_summary(file_count: usize, error_count: usize) {
    let files = if file_count == 1 { "file" } else { "files" };
    if error_count == 0 {
        eprintln!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {file_count} {files} - no hardcoded strings found").green()
        );
    } else {
        eprintln!(
            "{} Checked {} {}, found {} hardcoded {}",
            FAILURE_MARK.red(),
            file_count,
            files,
            error_count,
            if error_count == 1 { "string" } else { "strings" }.red()
        );
    }
}
