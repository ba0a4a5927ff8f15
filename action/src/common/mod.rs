//! Common types.

#[macro_use]
pub mod bytes;
pub mod address;
pub mod crypto;
pub mod logger;
pub mod quantity;
pub mod version;
