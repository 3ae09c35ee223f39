//! Plutus data built the way the Cardano node and serialization library
//! emit freshly built datums, so that hashes computed here match the ones a
//! wallet or the chain would compute.
//!
//! The value type and its CBOR codec come from `pallas-primitives`; what
//! lives here is the choice of shape, since pallas keeps whatever
//! definite/indefinite framing it is given:
//!
//! - constructors 0..=6 use tags 121..=127, 7..=127 use 1280..=1400, any
//!   other alternative uses tag 102 over `[alternative, fields]`
//! - non-empty lists (and constructor fields) are indefinite-length arrays,
//!   empty ones are `0x80`
//! - maps are definite
//! - integers outside the CBOR major-type range become bignums (tags 2/3)
//!
//! Byte strings over 64 bytes are chunked by the pallas encoder itself.

use pallas_codec::minicbor;
use pallas_codec::utils::{Int, KeyValuePairs, MaybeIndefArray};
use pallas_crypto::hash::Hash;
use pallas_traverse::ComputeHash;

pub use pallas_primitives::{BigInt, BoundedBytes, Constr, PlutusData};

use crate::error::AdaError;

const COMPACT_CONSTR_TAG_BASE: u64 = 121;
const EXTENDED_CONSTR_TAG_BASE: u64 = 1280;
const GENERAL_CONSTR_TAG: u64 = 102;

/// Constructor `alternative` applied to `fields`.
pub fn constr(alternative: u64, fields: Vec<PlutusData>) -> PlutusData {
    let (tag, any_constructor) = match alternative {
        0..=6 => (COMPACT_CONSTR_TAG_BASE + alternative, None),
        7..=127 => (EXTENDED_CONSTR_TAG_BASE + alternative - 7, None),
        _ => (GENERAL_CONSTR_TAG, Some(alternative)),
    };
    PlutusData::Constr(Constr {
        tag,
        any_constructor,
        fields: array(fields),
    })
}

pub fn list(items: Vec<PlutusData>) -> PlutusData {
    PlutusData::Array(array(items))
}

/// Key/value pairs in insertion order.
pub fn map(entries: Vec<(PlutusData, PlutusData)>) -> PlutusData {
    PlutusData::Map(KeyValuePairs::Def(entries))
}

pub fn bytes(bytes: Vec<u8>) -> PlutusData {
    PlutusData::BoundedBytes(BoundedBytes::from(bytes))
}

pub fn integer(n: i128) -> PlutusData {
    let big = match Int::try_from(n) {
        Ok(int) => BigInt::Int(int),
        // Negative bignums carry -1 - n, which is the bitwise complement.
        Err(_) if n >= 0 => BigInt::BigUInt(magnitude(n as u128)),
        Err(_) => BigInt::BigNInt(magnitude((!n) as u128)),
    };
    PlutusData::BigInt(big)
}

/// Serialize to CBOR.
pub fn to_cbor(data: &PlutusData) -> Result<Vec<u8>, AdaError> {
    minicbor::to_vec(data).map_err(|e| AdaError::SerializationError(e.to_string()))
}

/// BLAKE2b-256 of the CBOR encoding: the datum hash.
pub fn datum_hash(data: &PlutusData) -> Hash<32> {
    data.compute_hash()
}

fn array(items: Vec<PlutusData>) -> MaybeIndefArray<PlutusData> {
    if items.is_empty() {
        MaybeIndefArray::Def(items)
    } else {
        MaybeIndefArray::Indef(items)
    }
}

fn magnitude(value: u128) -> BoundedBytes {
    let be = value.to_be_bytes();
    let first = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
    BoundedBytes::from(be[first..].to_vec())
}
