//! # Charset Bloom
//!
//! Probabilistic set membership over character alphabets.
//!
//! A query either proves a value was never stored or admits that it might
//! have been. There are no false negatives.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `AlphabetBloomFilter`: One bit per alphabet character
//!   - `BinaryIntegerBloomFilter`: OR-ed bitmask with a subset-of-bits test
//!   - `MultiStrategyBloomFilter`: ANDs several filters, short-circuiting
//!   - `FilterConfig`: Serializable member list with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: Driving port (`store`, `definitely_not_in_set`)
//!   - `StringHasher`: Driven port (value → encoded string)
//!
//! - **Adapters Layer** (`adapters/`): Concrete hashers
//!
//! - **Metrics** (`metrics`): `InstrumentedFilter` and recorders
//!
//! ## Alphabets
//!
//! | Alphabet | Bits | Members |
//! |---|---|---|
//! | Lowercase alphanumeric | 36 | `0-9a-z` |
//! | Base64 | 65 | `0-9A-Za-z+/=` |
//! | Full ASCII | 128 | codes 0-127 |
//!
//! ## Invariants
//!
//! - No false negatives: once stored, `definitely_not_in_set()` MUST return false
//! - Monotonic storage: bits are set, never cleared
//! - A rejected store leaves the filter unchanged
//!
//! ## Usage Example
//!
//! ```ignore
//! use charset_bloom::{AlphabetBloomFilter, IdentityHasher, MembershipFilter, Value};
//!
//! let mut filter = AlphabetBloomFilter::lowercase_alphanumeric(IdentityHasher);
//! filter.store(&Value::from("ab"))?;
//!
//! assert!(!filter.definitely_not_in_set(&Value::from("ab"))?);
//! assert!(filter.definitely_not_in_set(&Value::from("xy"))?);
//! ```
//!
//! Filters are not internally synchronized. Wrap them in a lock when shared
//! between threads.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;

// Re-exports for convenience
pub use adapters::{
    Base64Hasher, HasherKind, IdentityHasher, Md5Hasher, Sha1Hasher, Sha256Hasher,
};
pub use domain::{
    Alphabet, AlphabetBloomFilter, BinaryIntegerBloomFilter, FilterConfig, FilterConfigBuilder,
    MultiStrategyBloomFilter, StrategyConfig, Value,
};
pub use error::FilterError;
pub use metrics::{InstrumentedFilter, Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{MembershipFilter, StringHasher};
