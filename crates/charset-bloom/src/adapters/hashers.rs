//! Concrete string hashers
//!
//! Each hasher has a known output alphabet, which decides which filters it
//! can feed:
//!
//! | Hasher | Output | Fits |
//! |---|---|---|
//! | `IdentityHasher` | input unchanged | depends on input |
//! | `Md5Hasher` | 32 lowercase hex chars | every alphabet |
//! | `Sha1Hasher` | 40 lowercase hex chars | every alphabet |
//! | `Sha256Hasher` | 64 lowercase hex chars | every alphabet |
//! | `Base64Hasher` | padded standard base64 | base64, full ASCII |

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::domain::{Alphabet, Value};
use crate::ports::StringHasher;

/// Returns the canonical string unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityHasher;

impl StringHasher for IdentityHasher {
    fn hash(&self, value: &Value) -> String {
        value.as_str().to_owned()
    }
}

/// Lowercase hex MD5 digest of the canonical string
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Hasher;

impl StringHasher for Md5Hasher {
    fn hash(&self, value: &Value) -> String {
        hex::encode(Md5::digest(value.as_bytes()))
    }
}

/// Lowercase hex SHA-1 digest of the canonical string
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1Hasher;

impl StringHasher for Sha1Hasher {
    fn hash(&self, value: &Value) -> String {
        hex::encode(Sha1::digest(value.as_bytes()))
    }
}

/// Lowercase hex SHA-256 digest of the canonical string
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl StringHasher for Sha256Hasher {
    fn hash(&self, value: &Value) -> String {
        hex::encode(Sha256::digest(value.as_bytes()))
    }
}

/// Standard padded base64 encoding of the canonical string
#[derive(Clone, Copy, Debug, Default)]
pub struct Base64Hasher;

impl StringHasher for Base64Hasher {
    fn hash(&self, value: &Value) -> String {
        STANDARD.encode(value.as_bytes())
    }
}

/// Hasher selector used by configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HasherKind {
    Identity,
    Md5,
    Sha1,
    Sha256,
    Base64,
}

impl HasherKind {
    /// Construct the hasher this kind names
    pub fn build(self) -> Box<dyn StringHasher> {
        match self {
            HasherKind::Identity => Box::new(IdentityHasher),
            HasherKind::Md5 => Box::new(Md5Hasher),
            HasherKind::Sha1 => Box::new(Sha1Hasher),
            HasherKind::Sha256 => Box::new(Sha256Hasher),
            HasherKind::Base64 => Box::new(Base64Hasher),
        }
    }

    /// Whether this hasher's output can ever be stored by an `alphabet` filter
    ///
    /// Identity output depends on the input, so it is always allowed and
    /// bad inputs surface as errors at store time.
    pub fn can_feed(self, alphabet: Alphabet) -> bool {
        match self {
            HasherKind::Identity | HasherKind::Md5 | HasherKind::Sha1 | HasherKind::Sha256 => {
                true
            }
            HasherKind::Base64 => alphabet != Alphabet::LowercaseAlphanumeric,
        }
    }
}
