//! Plutus scripts as carried in transaction witness sets.
//!
//! A serialized script is a CBOR byte string whose payload is the
//! (itself CBOR-wrapped) flat-encoded program. The script hash is taken
//! over a one-byte language tag followed by that payload.

use pallas_codec::minicbor::Decoder;
use pallas_crypto::hash::Hasher;

use crate::address::Hash28;
use crate::error::AdaError;

/// Plutus language version, which selects the hash namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlutusVersion {
    #[default]
    V1,
    V2,
    V3,
}

impl PlutusVersion {
    /// Prefix byte mixed into the script hash.
    pub fn namespace_tag(self) -> u8 {
        match self {
            PlutusVersion::V1 => 0x01,
            PlutusVersion::V2 => 0x02,
            PlutusVersion::V3 => 0x03,
        }
    }
}

/// A deserialized Plutus script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlutusScript {
    version: PlutusVersion,
    bytes: Vec<u8>,
}

impl PlutusScript {
    /// Decode a hex-encoded CBOR script.
    pub fn from_cbor_hex(cbor_hex: &str, version: PlutusVersion) -> Result<Self, AdaError> {
        let cbor = hex::decode(cbor_hex)
            .map_err(|e| AdaError::InvalidScript(format!("invalid hex: {e}")))?;
        Self::from_cbor(&cbor, version)
    }

    /// Decode a CBOR byte string holding the script. Trailing bytes are
    /// rejected.
    pub fn from_cbor(cbor: &[u8], version: PlutusVersion) -> Result<Self, AdaError> {
        let mut decoder = Decoder::new(cbor);
        let bytes = decoder
            .bytes()
            .map_err(|e| AdaError::InvalidScript(format!("expected a CBOR byte string: {e}")))?
            .to_vec();

        if decoder.position() != cbor.len() {
            return Err(AdaError::InvalidScript(format!(
                "{} trailing bytes after script",
                cbor.len() - decoder.position()
            )));
        }
        if bytes.is_empty() {
            return Err(AdaError::InvalidScript("empty script".into()));
        }

        Ok(Self { version, bytes })
    }

    pub fn version(&self) -> PlutusVersion {
        self.version
    }

    /// The script payload without the outer CBOR byte-string header.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// BLAKE2b-224 over the language tag and the script payload.
    pub fn hash(&self) -> Hash28 {
        Hasher::<224>::hash_tagged(&self.bytes, self.version.namespace_tag())
    }
}
