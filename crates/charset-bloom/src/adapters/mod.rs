//! Adapters Layer
//!
//! Concrete implementations of the driven ports:
//! - `IdentityHasher`, `Md5Hasher`, `Sha1Hasher`, `Sha256Hasher`, `Base64Hasher`: `StringHasher` impls
//! - `HasherKind`: configuration-facing selector for the above

pub mod hashers;

pub use hashers::{
    Base64Hasher, HasherKind, IdentityHasher, Md5Hasher, Sha1Hasher, Sha256Hasher,
};
