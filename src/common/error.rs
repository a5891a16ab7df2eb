use thiserror::Error;

/// Database error types
///
/// `TableFull` is the only error the store itself produces; the remaining
/// variants are raised by the statement-preparation layer before a row ever
/// reaches the store. Out-of-range row indices are contract violations and
/// panic rather than surfacing here.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Table full.")]
    TableFull,

    #[error("String is too long.")]
    StringTooLong,

    #[error("ID must be positive.")]
    NegativeId,

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),

    #[error("Unrecognized command '{0}'")]
    UnrecognizedMetaCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;
