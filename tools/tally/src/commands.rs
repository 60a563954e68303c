//! `fields` and `check`: inspect how a file tokenizes.

use std::io::{self, Write};

use tally_record::{load, SourceError};
use tally_tokenizer::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Print every field of the file at `path` with its position.
///
/// Fields read before a failure are still printed.
pub fn dump_fields(path: &str, out: &mut impl Write) -> Result<usize, CommandError> {
    let mut tokenizer = load(path)?;

    writeln!(out, "Fields for '{path}':")?;
    let mut count = 0;
    while tokenizer.has_more_fields() {
        let field = tokenizer.extract_field()?;
        writeln!(out, "  {} {field:?}", tokenizer.position())?;
        count += 1;
    }
    writeln!(out, "{count} fields")?;
    Ok(count)
}

/// Tokenize the whole file at `path` and summarize it.
pub fn check_file(path: &str, out: &mut impl Write) -> Result<usize, CommandError> {
    let mut tokenizer = load(path)?;

    let mut count = 0;
    while tokenizer.has_more_fields() {
        tokenizer.extract_field()?;
        count += 1;
    }

    let records = if count == 0 {
        0
    } else {
        tokenizer.current_row()
    };
    writeln!(out, "'{path}': {count} fields in {records} records")?;
    Ok(count)
}
