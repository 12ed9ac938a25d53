//! Error types for the charset Bloom filters

use thiserror::Error;

use crate::domain::Alphabet;

/// Errors raised by filter operations, value conversion and configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("The {alphabet} filter received a hash ({hash}) containing disallowed characters")]
    UnsupportedCharacter { alphabet: Alphabet, hash: String },

    #[error("The string \"{value}\" contains characters not contained within the set 0-9")]
    NonNumericValue { value: String },

    #[error("Integer value {value} does not fit in a 64-bit bitmask")]
    IntegerOverflow { value: String },

    #[error("A multi-strategy filter needs at least one member filter")]
    EmptyComposite,

    #[error("Invalid filter configuration: {0}")]
    InvalidConfig(String),
}
