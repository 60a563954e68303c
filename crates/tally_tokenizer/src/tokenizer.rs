//! The field-extraction state machine.
//!
//! A [`Tokenizer`] owns its text and a cursor into it. Each call to
//! [`Tokenizer::extract_field`] scans forward with one character of
//! lookahead and stops *before* the delimiter that ends the field. That
//! delimiter is consumed at the start of the next call, which is when the
//! row and column counters move. After a successful extraction the position
//! therefore names the field that was just returned. A call consumes at most
//! one leading delimiter: two in a row (`,,`, `,\n`, a blank line) leave an
//! empty field between them.
//!
//! # Quote Mode
//!
//! ```text
//! Idle    --( " )-------------------> InQuote
//! InQuote --( "" )------------------> InQuote   (emits one `"`)
//! InQuote --( " not followed by " )-> Idle
//! ```
//!
//! Commas are literal while in quote mode. A newline always ends the scan,
//! so a quoted field cannot span records; one that tries is reported as
//! [`FieldErrorKind::UnterminatedQuote`](crate::FieldErrorKind::UnterminatedQuote).
//!
//! # Empty Fields
//!
//! A field that trims down to nothing is an error, not an empty value.
//! `a,,c` fails on the second field. Callers that depend on this strictness
//! rely on [`FieldError::is_empty_field`] to detect the end of the text.

use tracing::{debug, trace};

use crate::{FieldError, FromField, Position};

const COMMA: char = ',';
const NEWLINE: char = '\n';
const QUOTE: char = '"';

/// Stateful cursor over an immutable CSV text buffer.
///
/// Not synchronized: use one tokenizer per text.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    /// Full CSV text. Only replaced through [`Tokenizer::set_text`].
    text: String,
    /// Byte index into `text`, always on a char boundary.
    cursor: usize,
    row: u32,
    column: u32,
    /// True while inside an open quoted field. Only meaningful mid-scan.
    in_quote: bool,
    /// Scratch buffer for the field being built, reused across calls.
    accumulator: String,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Tokenizer {
    /// Create a tokenizer positioned at the start of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Tokenizer {
            text: text.into(),
            cursor: 0,
            row: Position::START.row,
            column: Position::START.column,
            in_quote: false,
            accumulator: String::new(),
        }
    }

    /// The full text being tokenized.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text from the cursor to the end of the buffer.
    pub fn remaining(&self) -> &str {
        self.text.get(self.cursor..).unwrap_or_default()
    }

    /// Replace the text and rewind to the start, even mid-parse.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.reset();
        debug!(len = self.text.len(), "tokenizer text replaced");
    }

    /// Rewind the cursor and position counters. The text is kept.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.row = Position::START.row;
        self.column = Position::START.column;
        self.in_quote = false;
        self.accumulator.clear();
    }

    #[inline]
    pub fn current_row(&self) -> u32 {
        self.row
    }

    #[inline]
    pub fn current_column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Current byte offset into the text.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the cursor has reached the end of the text.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// True if anything other than whitespace is left to read.
    ///
    /// A trailing newline leaves the cursor short of the end but has no
    /// field behind it; this is the check record loops use to stop.
    pub fn has_more_fields(&self) -> bool {
        !self.remaining().trim().is_empty()
    }

    /// The character under the cursor.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The character immediately after the one under the cursor.
    ///
    /// Returns `None` when the cursor sits on the last character (or past
    /// the end), so a final field with no trailing delimiter is safe.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next()?;
        chars.next()
    }

    /// Extract the next field, trimmed of surrounding whitespace.
    ///
    /// Consumes the delimiter left behind by the previous call, then scans
    /// up to (not including) the delimiter that ends this field.
    pub fn extract_field(&mut self) -> Result<String, FieldError> {
        self.accumulator.clear();
        self.in_quote = false;

        while let Some(c) = self.current_char() {
            let next = self.peek_next();
            let width = c.len_utf8();

            if c == NEWLINE && self.in_quote {
                break;
            }

            // Delimiter of the previous field. A second delimiter right
            // behind it means this field is empty.
            if c == NEWLINE || (c == COMMA && !self.in_quote) {
                if c == NEWLINE {
                    self.row = self.row.saturating_add(1);
                    self.column = 1;
                } else {
                    self.column = self.column.saturating_add(1);
                }
                self.cursor += width;
                if matches!(next, Some(COMMA | NEWLINE)) {
                    break;
                }
                continue;
            }

            if c != QUOTE && ((next == Some(COMMA) && !self.in_quote) || next == Some(NEWLINE)) {
                self.accumulator.push(c);
                self.cursor += width;
                break;
            }

            match c {
                QUOTE if !self.in_quote => self.in_quote = true,
                QUOTE if next == Some(QUOTE) => {
                    // Doubled quote: emit one, consume both.
                    self.accumulator.push(QUOTE);
                    self.cursor += width;
                }
                QUOTE => {
                    self.in_quote = false;
                    if matches!(next, Some(COMMA | NEWLINE)) {
                        self.cursor += width;
                        break;
                    }
                }
                _ => self.accumulator.push(c),
            }

            self.cursor += width;
        }

        let field = self.accumulator.trim().to_owned();
        self.accumulator.clear();
        let unterminated = std::mem::replace(&mut self.in_quote, false);

        if field.is_empty() {
            return Err(FieldError::empty_field(self.position()));
        }
        if unterminated {
            return Err(FieldError::unterminated_quote(self.position()));
        }

        trace!(
            row = self.row,
            column = self.column,
            cursor = self.cursor,
            field = %field,
            "extracted field"
        );
        Ok(field)
    }

    /// Extract the next field and convert it with [`FromField`].
    pub fn get<T: FromField>(&mut self) -> Result<T, FieldError> {
        let text = self.extract_field()?;
        T::from_field(text, self.position())
    }

    pub fn get_string(&mut self) -> Result<String, FieldError> {
        self.extract_field()
    }

    pub fn get_short(&mut self) -> Result<i16, FieldError> {
        self.get()
    }

    pub fn get_int(&mut self) -> Result<i32, FieldError> {
        self.get()
    }

    pub fn get_long(&mut self) -> Result<i64, FieldError> {
        self.get()
    }

    pub fn get_float(&mut self) -> Result<f32, FieldError> {
        self.get()
    }

    pub fn get_double(&mut self) -> Result<f64, FieldError> {
        self.get()
    }

    /// Read `true`/`1` or `false`/`0`, ignoring case.
    pub fn get_boolean(&mut self) -> Result<bool, FieldError> {
        self.get()
    }
}
