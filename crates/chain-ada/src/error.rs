use thiserror::Error;

/// Cardano encoding and decoding errors.
#[derive(Debug, Error)]
pub enum AdaError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid network id: {0}")]
    InvalidNetworkId(u8),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid asset: {0}")]
    InvalidAsset(String),

    #[error("invalid plutus script: {0}")]
    InvalidScript(String),

    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<hex::FromHexError> for AdaError {
    fn from(e: hex::FromHexError) -> Self {
        AdaError::InvalidHex(e.to_string())
    }
}

impl From<pallas_addresses::Error> for AdaError {
    fn from(e: pallas_addresses::Error) -> Self {
        AdaError::InvalidAddress(e.to_string())
    }
}

impl From<pallas_traverse::Error> for AdaError {
    fn from(e: pallas_traverse::Error) -> Self {
        AdaError::InvalidTransaction(e.to_string())
    }
}

impl From<crypto_utils::CryptoError> for AdaError {
    fn from(e: crypto_utils::CryptoError) -> Self {
        AdaError::InvalidKey(e.to_string())
    }
}
