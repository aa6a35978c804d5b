//! Command-line surface

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use xml_engine_traits::XsltParam;

use crate::engine::Backend;

#[derive(Parser, Debug)]
#[command(
    name = "xml-cli",
    version,
    about = "CLI wrapper for libxml2: parse, transform and validate XML files."
)]
pub struct Cli {
    /// XML backend to delegate to
    #[arg(long, global = true, value_enum, default_value_t = Backend::Libxml2)]
    pub backend: Backend,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that XML files are well-formed.
    Parse(ParseArgs),
    /// Transform a XML using a XSL/XSLT.
    Transform(TransformArgs),
    /// Validate XML files against a XSD schema.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// XML files to parse.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TransformArgs {
    /// XML to transform.
    #[arg(long, value_name = "PATH")]
    pub xml: PathBuf,

    /// XSL/XSLT use to transform.
    #[arg(long, value_name = "PATH")]
    pub xsl: PathBuf,

    /// Output file path.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Stylesheet parameter passed as a string value; repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<XsltParam>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// XSD schema to validate against.
    #[arg(long, value_name = "PATH")]
    pub xsd: PathBuf,

    /// Print one JSON report per checked file.
    #[arg(long)]
    pub json: bool,

    /// XML files to validate.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
