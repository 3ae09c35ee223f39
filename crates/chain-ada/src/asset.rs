//! CIP-14 asset fingerprints.

use pallas_crypto::hash::Hasher;

use crate::address::{encode_bech32, HASH28_LEN};
use crate::error::AdaError;

/// Human-readable part of an asset fingerprint.
pub const FINGERPRINT_HRP: &str = "asset";

/// Longest asset name the ledger accepts.
pub const MAX_ASSET_NAME_LEN: usize = 32;

/// A native asset identified by its minting policy and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFingerprint {
    policy_id: [u8; HASH28_LEN],
    asset_name: Vec<u8>,
}

impl AssetFingerprint {
    pub fn from_parts(policy_id: &[u8], asset_name: &[u8]) -> Result<Self, AdaError> {
        let policy_id: [u8; HASH28_LEN] = policy_id.try_into().map_err(|_| {
            AdaError::InvalidAsset(format!(
                "policy id must be {HASH28_LEN} bytes, got {}",
                policy_id.len()
            ))
        })?;
        if asset_name.len() > MAX_ASSET_NAME_LEN {
            return Err(AdaError::InvalidAsset(format!(
                "asset name must be at most {MAX_ASSET_NAME_LEN} bytes, got {}",
                asset_name.len()
            )));
        }
        Ok(Self {
            policy_id,
            asset_name: asset_name.to_vec(),
        })
    }

    /// Parse hex-encoded policy id and asset name.
    pub fn from_hex(policy_id: &str, asset_name: &str) -> Result<Self, AdaError> {
        Self::from_parts(&hex::decode(policy_id)?, &hex::decode(asset_name)?)
    }

    /// `asset1…`: bech32 of BLAKE2b-160(policy id || asset name).
    pub fn fingerprint(&self) -> Result<String, AdaError> {
        let mut hasher = Hasher::<160>::new();
        hasher.input(&self.policy_id);
        hasher.input(&self.asset_name);
        encode_bech32(FINGERPRINT_HRP, hasher.finalize().as_ref())
    }
}
