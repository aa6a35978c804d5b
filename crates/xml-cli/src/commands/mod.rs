//! Sub-command handlers.
//!
//! Each handler is one delegated call into the selected backend plus error
//! context; the dispatcher turns failures into exit codes.

mod parse;
mod transform;
mod validate;

use crate::cli::{Command, ParseArgs, TransformArgs, ValidateArgs};
use crate::engine::XEngine;

/// A runnable sub-command
pub trait Execute {
    /// Name of the command, as typed on the command line
    const NAME: &'static str;

    fn execute(&self, engine: &mut XEngine) -> anyhow::Result<()>;
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Parse(_) => ParseArgs::NAME,
            Command::Transform(_) => TransformArgs::NAME,
            Command::Validate(_) => ValidateArgs::NAME,
        }
    }

    pub fn execute(&self, engine: &mut XEngine) -> anyhow::Result<()> {
        match self {
            Command::Parse(args) => args.execute(engine),
            Command::Transform(args) => args.execute(engine),
            Command::Validate(args) => args.execute(engine),
        }
    }
}
