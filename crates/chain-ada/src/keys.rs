//! BIP32-Ed25519 root keys (Icarus construction, CIP-3).

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::encode_bech32;
use crate::error::AdaError;

/// Human-readable part of a bech32 extended private key.
pub const XPRV_HRP: &str = "xprv";

/// Extended secret (64 bytes) followed by the chain code (32 bytes).
pub const XPRV_LEN: usize = 96;

/// PBKDF2 iteration count fixed by the Icarus scheme.
pub const ICARUS_PBKDF2_ROUNDS: u32 = 4096;

/// An extended Ed25519 root private key. Cleared on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Bip32PrivateKey {
    bytes: [u8; XPRV_LEN],
}

impl Bip32PrivateKey {
    /// Build the root key from BIP-39 entropy and an optional password.
    ///
    /// `PBKDF2-HMAC-SHA512(password, entropy, 4096, 96)`, then clamp the
    /// scalar half so it is a valid Ed25519-BIP32 key.
    pub fn from_bip39_entropy(entropy: &[u8], password: &[u8]) -> Result<Self, AdaError> {
        if entropy.is_empty() {
            return Err(AdaError::InvalidKey("entropy must not be empty".into()));
        }

        let mut bytes = [0u8; XPRV_LEN];
        crypto_utils::kdf::pbkdf2_hmac_sha512(password, entropy, ICARUS_PBKDF2_ROUNDS, &mut bytes)?;

        bytes[0] &= 0b1111_1000;
        bytes[31] &= 0b0001_1111;
        bytes[31] |= 0b0100_0000;

        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AdaError> {
        let bytes: [u8; XPRV_LEN] = bytes.try_into().map_err(|_| {
            AdaError::InvalidKey(format!("expected {XPRV_LEN} bytes, got {}", bytes.len()))
        })?;
        if bytes[0] & 0b0000_0111 != 0 || bytes[31] & 0b1110_0000 != 0b0100_0000 {
            return Err(AdaError::InvalidKey("scalar is not clamped".into()));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; XPRV_LEN] {
        &self.bytes
    }

    /// The 64-byte extended secret (scalar || nonce prefix).
    pub fn extended_secret(&self) -> &[u8] {
        &self.bytes[..64]
    }

    pub fn chain_code(&self) -> &[u8] {
        &self.bytes[64..]
    }

    pub fn to_bech32(&self) -> Result<String, AdaError> {
        encode_bech32(XPRV_HRP, &self.bytes)
    }
}

impl std::fmt::Debug for Bip32PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bip32PrivateKey").finish_non_exhaustive()
    }
}
