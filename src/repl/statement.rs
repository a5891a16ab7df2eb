use std::io::Write;

use crate::common::{DbError, Result, COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};
use crate::row::Row;
use crate::storage::Table;

/// A parsed, fully validated statement ready to execute.
///
/// Validation happens entirely here: by the time an `Insert` exists, its row
/// is within the column capacities and the store will accept it without
/// re-checking (its only remaining refusal is [`DbError::TableFull`]).
#[derive(Debug, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    /// Parses one trimmed input line into a statement.
    pub fn prepare(input: &str) -> Result<Statement> {
        if input == "select" {
            return Ok(Statement::Select);
        }

        let mut parts = input.split_whitespace();
        match parts.next() {
            Some("insert") => Self::prepare_insert(parts),
            _ => Err(DbError::UnrecognizedStatement(input.to_string())),
        }
    }

    fn prepare_insert<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Statement> {
        let (id, username, email) = match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(username), Some(email)) => (id, username, email),
            _ => return Err(DbError::SyntaxError),
        };

        let id: i64 = id.parse().map_err(|_| DbError::SyntaxError)?;
        if id < 0 {
            return Err(DbError::NegativeId);
        }
        // Zero is a valid id; only negatives are rejected.
        let id = u32::try_from(id).map_err(|_| DbError::SyntaxError)?;

        if username.len() > COLUMN_USERNAME_SIZE {
            return Err(DbError::StringTooLong);
        }
        if email.len() > COLUMN_EMAIL_SIZE {
            return Err(DbError::StringTooLong);
        }

        Ok(Statement::Insert(Row::new(id, username, email)))
    }

    /// Executes this statement against `table`, writing select output to
    /// `out`.
    pub fn execute<W: Write>(&self, table: &mut Table, out: &mut W) -> Result<()> {
        match self {
            Statement::Insert(row) => table.insert(row),
            Statement::Select => {
                for row in table.scan() {
                    writeln!(out, "{row}")?;
                }
                Ok(())
            }
        }
    }
}
