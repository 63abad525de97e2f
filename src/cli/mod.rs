use anyhow::Result;

mod args;
mod exit_status;
mod files;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use files::{Excludes, Input, InputError, InputSource, STDIN_NAME, resolve_inputs};
pub use report::{
    DefaultReporter, JsonReporter, Reporter, ReporterKind, SimpleReporter, UnixReporter,
};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
