//! Transaction decoding through `pallas-traverse`.
//!
//! [`MultiEraTx::decode`] tries each era's layout from Conway back to Byron.
//! The transaction id is BLAKE2b-256 over the body bytes exactly as they
//! appear on the wire; pallas keeps those bytes while decoding, so bodies
//! that use indefinite-length arrays hash the way the chain hashes them.

use pallas_crypto::hash::Hash;
use pallas_traverse::{Era, MultiEraTx};

use crate::error::AdaError;

/// What the resolver keeps from a decoded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    hash: Hash<32>,
    era: Era,
    is_valid: bool,
}

impl Transaction {
    /// Decode a hex-encoded CBOR transaction.
    pub fn from_cbor_hex(cbor_hex: &str) -> Result<Self, AdaError> {
        let bytes = hex::decode(cbor_hex)
            .map_err(|e| AdaError::InvalidTransaction(format!("invalid hex: {e}")))?;
        Self::from_cbor(&bytes)
    }

    pub fn from_cbor(cbor: &[u8]) -> Result<Self, AdaError> {
        let tx = MultiEraTx::decode(cbor)?;
        Ok(Self {
            hash: tx.hash(),
            era: tx.era(),
            is_valid: tx.is_valid(),
        })
    }

    /// The transaction id.
    pub fn hash(&self) -> Hash<32> {
        self.hash
    }

    /// The newest era whose layout the transaction decoded under.
    pub fn era(&self) -> Era {
        self.era
    }

    /// Phase-2 validity flag; Byron transactions are always valid.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}
