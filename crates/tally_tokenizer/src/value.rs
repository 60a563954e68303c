//! Typed coercion of extracted field text.
//!
//! [`FromField`] turns the trimmed text produced by
//! [`Tokenizer::extract_field`](crate::Tokenizer::extract_field) into a typed
//! value. Numbers use the standard `FromStr` parser for their width, so
//! overflow and stray characters are both reported as
//! [`FieldErrorKind::NumericFormat`](crate::FieldErrorKind::NumericFormat).
//!
//! Floats accept every spelling `f32`/`f64` `FromStr` does, including
//! `inf`, `infinity` and `NaN` in any case.

use crate::{FieldError, Position};

/// A value that can be read from a single CSV field.
pub trait FromField: Sized {
    /// Convert already-extracted field text.
    ///
    /// `position` is the tokenizer position after extraction and is only
    /// used for error reporting.
    fn from_field(text: String, position: Position) -> Result<Self, FieldError>;
}

impl FromField for String {
    #[inline]
    fn from_field(text: String, _position: Position) -> Result<Self, FieldError> {
        Ok(text)
    }
}

impl FromField for bool {
    fn from_field(text: String, position: Position) -> Result<Self, FieldError> {
        match text.to_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(FieldError::invalid_boolean(position, text)),
        }
    }
}

macro_rules! impl_from_field_for_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromField for $ty {
                fn from_field(text: String, position: Position) -> Result<Self, FieldError> {
                    text.parse::<$ty>().map_err(|err| {
                        FieldError::numeric_format(position, text, stringify!($ty), err.to_string())
                    })
                }
            }
        )*
    };
}

impl_from_field_for_numbers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
