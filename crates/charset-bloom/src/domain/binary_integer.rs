//! Binary-integer bitmask filter
//!
//! State is a single `u64`: the OR of every stored integer. A queried
//! integer is possibly present when each of its set bits is also set in the
//! mask. No hasher is involved; the raw integer is used directly.

use super::value::Value;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// Bloom filter storing the union of the binary forms of stored integers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryIntegerBloomFilter {
    mask: u64,
}

impl BinaryIntegerBloomFilter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bitmask
    pub fn mask(&self) -> u64 {
        self.mask
    }
}

impl MembershipFilter for BinaryIntegerBloomFilter {
    fn store(&mut self, value: &Value) -> Result<(), FilterError> {
        self.mask |= value.as_integer()?;
        Ok(())
    }

    fn definitely_not_in_set(&self, value: &Value) -> Result<bool, FilterError> {
        let candidate = value.as_integer()?;

        if candidate == self.mask {
            return Ok(false);
        }

        Ok(candidate & self.mask != candidate)
    }
}
