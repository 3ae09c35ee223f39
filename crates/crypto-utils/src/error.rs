use thiserror::Error;

/// Hashing and key-stretching errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("key derivation failed: {0}")]
    KdfFailed(String),

    #[error("invalid output length: {0}")]
    InvalidOutputLength(usize),
}
