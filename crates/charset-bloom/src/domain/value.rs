//! Values stored in and queried against filters
//!
//! A `Value` wraps either a string or an integer and exposes it in its
//! canonical string form. Integers are rendered in base 10.

use std::fmt;

use crate::error::FilterError;

/// Immutable scalar handed to `store` and `definitely_not_in_set`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Value {
    text: String,
}

impl Value {
    /// Create a value from anything that converts into one
    pub fn new(value: impl Into<Value>) -> Self {
        value.into()
    }

    /// Canonical string representation
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Canonical string as bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Integer form of the value
    ///
    /// Only strings made entirely of the digits `0-9` convert. Signs,
    /// whitespace, decimal points and the empty string are rejected with
    /// `NonNumericValue`. Leading zeros are accepted.
    pub fn as_integer(&self) -> Result<u64, FilterError> {
        if self.text.is_empty() || !self.text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FilterError::NonNumericValue {
                value: self.text.clone(),
            });
        }

        self.text
            .parse::<u64>()
            .map_err(|_| FilterError::IntegerOverflow {
                value: self.text.clone(),
            })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self { text: text.clone() }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(number: $ty) -> Self {
                    Self {
                        text: number.to_string(),
                    }
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
