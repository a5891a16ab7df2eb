//! Line-oriented command loop over a [`Table`].
//!
//! Thin text-processing glue: it reads a line, dispatches meta commands,
//! prepares a statement, executes it, and reports the result. All storage
//! semantics live below in [`crate::storage`]; all validation lives in
//! [`Statement::prepare`].

mod statement;

pub use statement::Statement;

use std::io::{BufRead, Write};

use crate::common::{DbError, Result};
use crate::storage::Table;

/// Commands outside the statement language, prefixed with a dot.
enum MetaCommand {
    Exit,
}

impl MetaCommand {
    fn parse(input: &str) -> Result<MetaCommand> {
        match input {
            ".exit" => Ok(MetaCommand::Exit),
            _ => Err(DbError::UnrecognizedMetaCommand(input.to_string())),
        }
    }
}

/// Runs the command loop until `.exit` or end of input.
///
/// `.exit` returns control to the caller rather than terminating the
/// process; the caller owns the table and tears it down by dropping it.
pub fn run<R: BufRead, W: Write>(mut input: R, out: &mut W, table: &mut Table) -> Result<()> {
    let mut line = String::new();

    loop {
        write!(out, "db > ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let trimmed = line.trim();

        if trimmed.starts_with('.') {
            match MetaCommand::parse(trimmed) {
                Ok(MetaCommand::Exit) => return Ok(()),
                Err(e) => writeln!(out, "{e}")?,
            }
            continue;
        }

        match Statement::prepare(trimmed) {
            Ok(statement) => match statement.execute(table, out) {
                Ok(()) => writeln!(out, "Executed.")?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}
