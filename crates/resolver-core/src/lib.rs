//! Address and hash resolution for Cardano.
//!
//! Every function in [`resolver`] is a pure mapping from one encoded input
//! (mnemonic words, bech32 address, CBOR hex, datum) to one derived
//! identifier (hex hash, bech32 address or key, asset fingerprint). Nothing
//! is cached and no state survives a call; key material created along the
//! way is zeroed when it goes out of scope, on success and error paths
//! alike.

pub mod data;
pub mod error;
pub mod mnemonic;
pub mod resolver;

pub use chain_ada::{AdaNetwork, PlutusVersion};
pub use data::Data;
pub use error::{Cause, MnemonicError, Operation, ResolveError, ResolveErrorKind};
pub use mnemonic::{generate_mnemonic, validate_words};
pub use resolver::{
    resolve_data_hash, resolve_data_hash_json, resolve_fingerprint, resolve_payment_key_hash,
    resolve_plutus_script_hash, resolve_private_key, resolve_script_address,
    resolve_script_address_for_version, resolve_script_hash, resolve_stake_address,
    resolve_stake_key_hash, resolve_tx_hash,
};
