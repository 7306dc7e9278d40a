//! # git-touch
//!
//! Create a file (and any missing parent directories), then stage it with
//! `git add`, in a single command:
//!
//! ```text
//! git-touch src/new/module.rs
//! ```
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::Parser;
use git_touch::{Options, Reporter, TouchError, cmd_touch};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "git-touch",
    version,
    about = "Create and track changes to files with a single command"
)]
struct Cli {
    /// File to create and stage
    filename: PathBuf,

    /// Pass the current environment through to git instead of an empty one
    #[arg(long)]
    inherit_env: bool,

    /// Only accept a git that is a regular, executable file
    #[arg(long)]
    require_executable: bool,

    /// Report each directory created and the git that was found
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    let opts = Options {
        file: cli.filename,
        inherit_env: cli.inherit_env,
        require_executable: cli.require_executable,
        verbose: cli.verbose,
    };
    cmd_touch(&opts)?;
    Ok(())
}

/// CLI entry point.
///
/// Usage errors are handled by `clap` before anything touches the
/// filesystem. Any later failure exits with its OS error code.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let out = Reporter::new(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&e);
            let code = e
                .downcast_ref::<TouchError>()
                .map(TouchError::exit_code)
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
