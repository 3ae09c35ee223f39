//! Cardano chain support for the resolver.
//!
//! Thin adapters over the `pallas` crates: Shelley addresses (CIP-19) from
//! `pallas-addresses`, Plutus data from `pallas-primitives`, transaction
//! decoding from `pallas-traverse` and BLAKE2b from `pallas-crypto`. Asset
//! fingerprints (CIP-14) and Icarus root keys have no pallas counterpart and
//! are built here with `bech32` and `crypto-utils`.

pub mod address;
pub mod asset;
pub mod error;
pub mod keys;
pub mod network;
pub mod plutus;
pub mod script;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use address::{
    Address, AddressForms, Hash, Hash28, ShelleyAddress, ShelleyDelegationPart,
    ShelleyPaymentPart, StakeAddress, StakePayload,
};
pub use asset::AssetFingerprint;
pub use error::AdaError;
pub use keys::Bip32PrivateKey;
pub use network::AdaNetwork;
pub use plutus::PlutusData;
pub use script::{PlutusScript, PlutusVersion};
pub use transaction::Transaction;
