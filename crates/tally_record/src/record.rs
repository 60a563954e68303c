//! Self-parsing records.

use std::marker::PhantomData;

use tally_tokenizer::{FieldError, Tokenizer};
use thiserror::Error;
use tracing::debug;

/// A type that populates itself from the next record of a tokenizer.
///
/// Implementations call the typed accessors in the exact order the CSV
/// columns appear and propagate the first failure.
///
/// ```
/// use tally_record::Parsable;
/// use tally_tokenizer::{FieldError, Tokenizer};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Parsable for Point {
///     fn parse(&mut self, tokenizer: &mut Tokenizer) -> Result<(), FieldError> {
///         self.x = tokenizer.get_int()?;
///         self.y = tokenizer.get_int()?;
///         Ok(())
///     }
/// }
///
/// let mut tokenizer = Tokenizer::new("3,4");
/// let mut point = Point::default();
/// assert!(point.parse(&mut tokenizer).is_ok());
/// assert_eq!((point.x, point.y), (3, 4));
/// ```
pub trait Parsable {
    fn parse(&mut self, tokenizer: &mut Tokenizer) -> Result<(), FieldError>;
}

/// Construct a value from the next record.
///
/// Blanket-implemented for every `Parsable + Default` type.
pub trait FromRecord: Sized {
    fn from_record(tokenizer: &mut Tokenizer) -> Result<Self, FieldError>;
}

impl<T: Parsable + Default> FromRecord for T {
    fn from_record(tokenizer: &mut Tokenizer) -> Result<Self, FieldError> {
        let mut value = T::default();
        value.parse(tokenizer)?;
        Ok(value)
    }
}

/// A field error tagged with the 1-based index of the record it broke.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("record {record}: {source}")]
pub struct RecordError {
    pub record: usize,
    pub source: FieldError,
}

/// Iterator over the records of a tokenizer's text.
///
/// Stops when only whitespace is left, or right after yielding the first
/// error. Bad records are never skipped.
pub struct RecordReader<'t, T> {
    tokenizer: &'t mut Tokenizer,
    records: usize,
    failed: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'t, T: FromRecord> RecordReader<'t, T> {
    pub fn new(tokenizer: &'t mut Tokenizer) -> Self {
        RecordReader {
            tokenizer,
            records: 0,
            failed: false,
            _marker: PhantomData,
        }
    }

    /// Number of records attempted so far, including a failed one.
    pub fn records_read(&self) -> usize {
        self.records
    }

    /// Read every remaining record, stopping at the first error.
    pub fn read_all(self) -> Result<Vec<T>, RecordError> {
        self.collect()
    }
}

impl<T: FromRecord> Iterator for RecordReader<'_, T> {
    type Item = Result<T, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.tokenizer.has_more_fields() {
            return None;
        }

        self.records += 1;
        match T::from_record(self.tokenizer) {
            Ok(value) => Some(Ok(value)),
            Err(source) => {
                self.failed = true;
                debug!(record = self.records, error = %source, "record failed");
                Some(Err(RecordError {
                    record: self.records,
                    source,
                }))
            }
        }
    }
}

/// Parse every record of `text` as `T`.
pub fn read_records<T: FromRecord>(text: impl Into<String>) -> Result<Vec<T>, RecordError> {
    let mut tokenizer = Tokenizer::new(text);
    RecordReader::new(&mut tokenizer).read_all()
}
