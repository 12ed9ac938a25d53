//! Outbound Ports (Driven Ports)
//!
//! Alphabet filters do not know how a value is encoded. They depend on a
//! hasher that turns a `Value` into a string, then check that string against
//! their alphabet.

use crate::domain::Value;

/// Hashing capability consumed by alphabet filters (Driven Port)
///
/// Implementations must be deterministic: the same value must always hash
/// to the same string, otherwise the no-false-negative guarantee is lost.
pub trait StringHasher: Send + Sync {
    /// Encode a value as a string
    fn hash(&self, value: &Value) -> String;
}

impl<H: StringHasher + ?Sized> StringHasher for Box<H> {
    fn hash(&self, value: &Value) -> String {
        (**self).hash(value)
    }
}
