//! Typed records read through a [`Tokenizer`](tally_tokenizer::Tokenizer).
//!
//! - [`Parsable`]: a type that fills itself in from a tokenizer positioned
//!   at the start of a record, calling the typed accessors in schema order.
//! - [`RecordReader`]: drives a [`FromRecord`] type over a whole text.
//! - [`source`]: eager whole-file UTF-8 loading, the only I/O in the
//!   workspace.
//!
//! No schema is checked here. A type that asks for fields in the wrong
//! order or count gets whatever the tokenizer hands back.

mod record;
pub mod source;

pub use record::{read_records, FromRecord, Parsable, RecordError, RecordReader};
pub use source::{load, read_source, SourceError};
