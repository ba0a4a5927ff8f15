//! Cryptographic primitives.
pub mod hash;
pub mod signature;
