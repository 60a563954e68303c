//! Field extraction errors.
//!
//! Every error carries the [`Position`] the tokenizer had reached when the
//! failure was detected. Nothing is recovered internally: an error aborts
//! the current extraction and no partial field is returned.

use thiserror::Error;

use crate::Position;

/// A failed field extraction or coercion.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {position}")]
pub struct FieldError {
    /// What went wrong.
    pub kind: FieldErrorKind,
    /// Where the tokenizer was when it gave up.
    pub position: Position,
}

/// What kind of field error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum FieldErrorKind {
    /// Nothing left to read, or the field trimmed down to nothing.
    #[error("empty field")]
    EmptyField,
    /// The buffer ran out (or the record ended) inside a quoted field.
    #[error("unterminated quoted field")]
    UnterminatedQuote,
    /// A numeric accessor received text that does not parse as its type.
    #[error("cannot read `{text}` as {target}: {reason}")]
    NumericFormat {
        text: String,
        target: &'static str,
        reason: String,
    },
    /// `get_boolean` received something other than `true`, `false`, `1`, `0`.
    #[error("invalid boolean value `{text}`")]
    InvalidBoolean { text: String },
}

impl FieldError {
    #[cold]
    pub fn empty_field(position: Position) -> Self {
        Self {
            kind: FieldErrorKind::EmptyField,
            position,
        }
    }

    #[cold]
    pub fn unterminated_quote(position: Position) -> Self {
        Self {
            kind: FieldErrorKind::UnterminatedQuote,
            position,
        }
    }

    /// Create a numeric format error for `text` that failed to parse as `target`.
    #[cold]
    pub fn numeric_format(
        position: Position,
        text: impl Into<String>,
        target: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            kind: FieldErrorKind::NumericFormat {
                text: text.into(),
                target,
                reason: reason.into(),
            },
            position,
        }
    }

    #[cold]
    pub fn invalid_boolean(position: Position, text: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::InvalidBoolean { text: text.into() },
            position,
        }
    }

    /// True if this error only means the text ran out of fields.
    #[inline]
    pub fn is_empty_field(&self) -> bool {
        matches!(self.kind, FieldErrorKind::EmptyField)
    }
}
