//! xml-cli entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    xml_cli::run(std::env::args_os())
}
