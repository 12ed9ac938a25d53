//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Values and their integer conversion
//! - Character alphabets and index mappings
//! - Alphabet-indexed bit-vector filter
//! - Binary-integer bitmask filter
//! - Multi-strategy composition
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Bits are only ever set, never cleared

pub mod alphabet;
pub mod alphabet_filter;
pub mod binary_integer;
pub mod config;
pub mod multi_strategy;
pub mod value;

pub use alphabet::{Alphabet, BASE64_WIDTH, FULL_ASCII_WIDTH, LOWERCASE_ALPHANUMERIC_WIDTH};
pub use alphabet_filter::AlphabetBloomFilter;
pub use binary_integer::BinaryIntegerBloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder, StrategyConfig};
pub use multi_strategy::MultiStrategyBloomFilter;
pub use value::Value;
