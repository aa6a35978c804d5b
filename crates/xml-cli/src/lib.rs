//! xml-cli: parse, transform and validate XML by delegating to an XML toolkit
//!
//! # Quick Start
//!
//! ```text
//! xml-cli parse a.xml b.xml
//! xml-cli transform --xml in.xml --xsl style.xsl --out out.xml --param title=Report
//! xml-cli validate --xsd schema.xsd a.xml b.xml
//! ```
//!
//! Exit codes: 0 success, 1 runtime error, 2 no sub-command or bad usage.

pub mod cli;
pub mod commands;
pub mod engine;
pub mod logging;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;

pub use cli::{Cli, Command};
pub use engine::{Backend, XDocument, XEngine, XStylesheet};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// Run the command line and return the process exit code.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ExitCode::from(run_code(args))
}

fn run_code<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, with exit code 0
            let _ = err.print();
            return u8::try_from(err.exit_code()).unwrap_or(EXIT_USAGE);
        }
    };

    logging::init(cli.verbose, cli.quiet);

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return EXIT_USAGE;
    };

    let mut engine = XEngine::with_backend(cli.backend);
    debug!(command = command.name(), backend = engine.backend_name(), "dispatching");

    match command.execute(&mut engine) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("error: {err:?}");
            EXIT_FAILURE
        }
    }
}
