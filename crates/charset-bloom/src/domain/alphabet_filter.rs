//! Alphabet-indexed bit-vector filter
//!
//! One bit per alphabet member. Storing a value hashes it and sets the bit
//! of every character in the hash; querying checks those bits in order and
//! stops at the first unset one.
//!
//! INVARIANTS:
//! - No false negatives - if stored, `definitely_not_in_set()` MUST return false
//! - Bits are never cleared, and a rejected store sets no bits

use bitvec::prelude::*;
use tracing::debug;

use super::alphabet::Alphabet;
use super::value::Value;
use crate::error::FilterError;
use crate::ports::{MembershipFilter, StringHasher};

/// Bloom filter whose bit vector is indexed by the characters of a hash
pub struct AlphabetBloomFilter<H = Box<dyn StringHasher>> {
    /// One bit per alphabet member, width fixed at construction
    bits: BitVec<u8, Lsb0>,
    alphabet: Alphabet,
    hasher: H,
}

impl<H: StringHasher> AlphabetBloomFilter<H> {
    /// Create an empty filter for `alphabet` fed by `hasher`
    pub fn new(alphabet: Alphabet, hasher: H) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; alphabet.width()],
            alphabet,
            hasher,
        }
    }

    /// Filter over `0-9a-z` (36 bits)
    pub fn lowercase_alphanumeric(hasher: H) -> Self {
        Self::new(Alphabet::LowercaseAlphanumeric, hasher)
    }

    /// Filter over the base64 alphabet plus padding (65 bits)
    pub fn base64(hasher: H) -> Self {
        Self::new(Alphabet::Base64, hasher)
    }

    /// Filter over 7-bit ASCII (128 bits)
    pub fn full_ascii(hasher: H) -> Self {
        Self::new(Alphabet::FullAscii, hasher)
    }

    /// Alphabet this filter is indexed by
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}

impl<H: StringHasher> MembershipFilter for AlphabetBloomFilter<H> {
    fn store(&mut self, value: &Value) -> Result<(), FilterError> {
        let alphabet = self.alphabet;
        let hash = self.hasher.hash(value);

        // Validate the whole hash before touching any bit.
        if !alphabet.admits(&hash) {
            debug!(
                alphabet = %alphabet,
                hash_len = hash.len(),
                "Rejected hash containing characters outside the alphabet"
            );
            return Err(FilterError::UnsupportedCharacter { alphabet, hash });
        }

        for index in hash.chars().filter_map(|c| alphabet.index_of(c)) {
            self.bits.set(index, true);
        }

        Ok(())
    }

    fn definitely_not_in_set(&self, value: &Value) -> Result<bool, FilterError> {
        let hash = self.hasher.hash(value);

        // A character outside the alphabet could never have been stored.
        let absent = hash.chars().any(|c| match self.alphabet.index_of(c) {
            Some(index) => !self.bits[index],
            None => true,
        });

        Ok(absent)
    }
}
