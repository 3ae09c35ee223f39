//! # crypto-utils
//!
//! Key-stretching primitives shared by the Cardano crates: PBKDF2-HMAC-SHA512
//! for root key construction.

pub mod error;
pub mod kdf;

pub use error::CryptoError;
