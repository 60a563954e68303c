//! Cursor-driven CSV field tokenizer.
//!
//! The [`Tokenizer`] walks an immutable text buffer one character at a time,
//! producing one decoded field per call and tracking the logical row and
//! column as delimiters are consumed. Typed accessors layer numeric and
//! boolean coercion on top of the raw field extractor.
//!
//! This crate performs no I/O. Callers hand it fully materialized text;
//! reading files is the job of `tally_record::source`.
//!
//! # Example
//!
//! ```
//! use tally_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new("id,\"name, full\",active\n7,\"Ada \"\"A\"\"\",1");
//! assert_eq!(tokenizer.get_string().ok().as_deref(), Some("id"));
//! assert_eq!(tokenizer.get_string().ok().as_deref(), Some("name, full"));
//! assert_eq!(tokenizer.get_string().ok().as_deref(), Some("active"));
//! assert_eq!(tokenizer.get_int().ok(), Some(7));
//! assert_eq!(tokenizer.get_string().ok().as_deref(), Some("Ada \"A\""));
//! assert_eq!(tokenizer.get_boolean().ok(), Some(true));
//! assert!(tokenizer.extract_field().is_err());
//! ```

mod error;
mod position;
mod tokenizer;
mod value;

pub use error::{FieldError, FieldErrorKind};
pub use position::Position;
pub use tokenizer::Tokenizer;
pub use value::FromField;
