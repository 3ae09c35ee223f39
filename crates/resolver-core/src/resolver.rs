//! The resolver operations.
//!
//! Operations that pull a credential out of an address try a fixed list of
//! address forms in order. The first form that yields a credential wins;
//! the operation fails with [`ResolveErrorKind::MissingCredential`] only when
//! every form comes up empty.
//!
//! [`ResolveErrorKind::MissingCredential`]: crate::error::ResolveErrorKind::MissingCredential

use chain_ada::address::{self, AddressForms};
use chain_ada::{
    plutus, Address, AssetFingerprint, Bip32PrivateKey, Hash28, PlutusScript, PlutusVersion,
    ShelleyDelegationPart, ShelleyPaymentPart, StakePayload, Transaction,
};
use tracing::{debug, trace};

use crate::data::Data;
use crate::error::{Operation, ResolveError};
use crate::mnemonic;

/// One way of reading a credential hash out of a decoded address.
struct Strategy {
    form: &'static str,
    extract: fn(&Address) -> Option<Hash28>,
}

fn payment_key(payment: &ShelleyPaymentPart) -> Option<Hash28> {
    match payment {
        ShelleyPaymentPart::Key(hash) => Some(*hash),
        ShelleyPaymentPart::Script(_) => None,
    }
}

fn payment_script(payment: &ShelleyPaymentPart) -> Option<Hash28> {
    match payment {
        ShelleyPaymentPart::Script(hash) => Some(*hash),
        ShelleyPaymentPart::Key(_) => None,
    }
}

fn delegation_key(delegation: &ShelleyDelegationPart) -> Option<Hash28> {
    match delegation {
        ShelleyDelegationPart::Key(hash) => Some(*hash),
        _ => None,
    }
}

const PAYMENT_KEY_HASH: &[Strategy] = &[
    Strategy {
        form: "base address payment key",
        extract: |a| a.as_base().and_then(|b| payment_key(b.payment())),
    },
    Strategy {
        form: "enterprise address payment key",
        extract: |a| a.as_enterprise().and_then(|e| payment_key(e.payment())),
    },
];

const SCRIPT_HASH: &[Strategy] = &[Strategy {
    form: "enterprise address payment script",
    extract: |a| a.as_enterprise().and_then(|e| payment_script(e.payment())),
}];

const STAKE_ADDRESS: &[Strategy] = &[Strategy {
    form: "base address stake key",
    extract: |a| a.as_base().and_then(|b| delegation_key(b.delegation())),
}];

const STAKE_KEY_HASH: &[Strategy] = &[
    Strategy {
        form: "base address stake key",
        extract: |a| a.as_base().and_then(|b| delegation_key(b.delegation())),
    },
    Strategy {
        form: "reward address key",
        extract: |a| match a.as_reward()?.payload() {
            StakePayload::Stake(hash) => Some(*hash),
            StakePayload::Script(_) => None,
        },
    },
];

fn first_match(strategies: &[Strategy], address: &Address) -> Option<Hash28> {
    strategies.iter().find_map(|strategy| {
        let found = (strategy.extract)(address);
        if found.is_none() {
            trace!(form = strategy.form, "address form yielded no credential");
        }
        found
    })
}

/// Decode `bech32` and run the strategies over it.
fn resolve_credential(
    operation: Operation,
    credential: &'static str,
    strategies: &[Strategy],
    bech32: &str,
) -> Result<(Address, Hash28), ResolveError> {
    let address =
        address::from_bech32(bech32).map_err(|e| ResolveError::malformed(operation, e))?;
    match first_match(strategies, &address) {
        Some(hash) => Ok((address, hash)),
        None => Err(ResolveError::missing_credential(operation, credential, bech32)),
    }
}

fn logged<T>(result: Result<T, ResolveError>) -> Result<T, ResolveError> {
    if let Err(err) = &result {
        debug!(operation = err.operation.name(), error = %err.kind, "resolution failed");
    }
    result
}

/// Hex BLAKE2b-256 hash of a datum.
pub fn resolve_data_hash(data: &Data) -> Result<String, ResolveError> {
    Ok(plutus::datum_hash(&data.to_plutus_data()).to_string())
}

/// [`resolve_data_hash`] for a datum given as JSON.
pub fn resolve_data_hash_json(json: &str) -> Result<String, ResolveError> {
    logged(
        serde_json::from_str::<Data>(json)
            .map_err(|e| ResolveError::malformed(Operation::DataHash, e)),
    )
    .and_then(|data| resolve_data_hash(&data))
}

/// CIP-14 fingerprint of a native asset.
pub fn resolve_fingerprint(policy_id: &str, asset_name: &str) -> Result<String, ResolveError> {
    logged(
        AssetFingerprint::from_hex(policy_id, asset_name)
            .and_then(|asset| asset.fingerprint())
            .map_err(|e| ResolveError::malformed(Operation::Fingerprint, e)),
    )
}

/// Payment key hash of a base or enterprise address.
pub fn resolve_payment_key_hash(bech32: &str) -> Result<String, ResolveError> {
    logged(resolve_credential(
        Operation::PaymentKeyHash,
        "payment key hash",
        PAYMENT_KEY_HASH,
        bech32,
    ))
    .map(|(_, hash)| hash.to_string())
}

/// Bech32 root private key for a mnemonic, with an empty password.
pub fn resolve_private_key<S: AsRef<str>>(words: &[S]) -> Result<String, ResolveError> {
    logged(resolve_private_key_inner(words))
}

fn resolve_private_key_inner<S: AsRef<str>>(words: &[S]) -> Result<String, ResolveError> {
    let op = Operation::PrivateKey;
    let entropy = mnemonic::words_to_entropy(words).map_err(|e| ResolveError::malformed(op, e))?;
    let root = Bip32PrivateKey::from_bip39_entropy(&entropy, b"")
        .map_err(|e| ResolveError::malformed(op, e))?;
    root.to_bech32().map_err(|e| ResolveError::malformed(op, e))
}

/// Enterprise address locked by a Plutus V1 script.
pub fn resolve_script_address(network_id: u8, cbor: &str) -> Result<String, ResolveError> {
    resolve_script_address_for_version(network_id, cbor, PlutusVersion::V1)
}

/// Enterprise address locked by a Plutus script of the given version.
pub fn resolve_script_address_for_version(
    network_id: u8,
    cbor: &str,
    version: PlutusVersion,
) -> Result<String, ResolveError> {
    logged(resolve_script_address_inner(network_id, cbor, version))
}

fn resolve_script_address_inner(
    network_id: u8,
    cbor: &str,
    version: PlutusVersion,
) -> Result<String, ResolveError> {
    let op = Operation::ScriptAddress;
    let script =
        PlutusScript::from_cbor_hex(cbor, version).map_err(|e| ResolveError::malformed(op, e))?;
    address::enterprise_address(network_id, ShelleyPaymentPart::Script(script.hash()))
        .and_then(|address| address::to_bech32(&address))
        .map_err(|e| ResolveError::malformed(op, e))
}

/// Hex hash of a Plutus script of the given version.
pub fn resolve_plutus_script_hash(
    cbor: &str,
    version: PlutusVersion,
) -> Result<String, ResolveError> {
    logged(
        PlutusScript::from_cbor_hex(cbor, version)
            .map(|script| script.hash().to_string())
            .map_err(|e| ResolveError::malformed(Operation::ScriptHash, e)),
    )
}

/// Script hash of an enterprise script address.
pub fn resolve_script_hash(bech32: &str) -> Result<String, ResolveError> {
    logged(resolve_credential(
        Operation::ScriptHash,
        "script hash",
        SCRIPT_HASH,
        bech32,
    ))
    .map(|(_, hash)| hash.to_string())
}

/// Reward address for the stake key of a base address, on the same network.
pub fn resolve_stake_address(bech32: &str) -> Result<String, ResolveError> {
    logged(resolve_stake_address_inner(bech32))
}

fn resolve_stake_address_inner(bech32: &str) -> Result<String, ResolveError> {
    let op = Operation::StakeAddress;
    let (base, hash) = resolve_credential(op, "stake address", STAKE_ADDRESS, bech32)?;
    let network_id = base
        .network_id()
        .ok_or_else(|| ResolveError::missing_credential(op, "stake address", bech32))?;
    address::reward_address(network_id, StakePayload::Stake(hash))
        .and_then(|reward| address::to_bech32(&reward))
        .map_err(|e| ResolveError::malformed(op, e))
}

/// Stake key hash of a base or reward address.
pub fn resolve_stake_key_hash(bech32: &str) -> Result<String, ResolveError> {
    logged(resolve_credential(
        Operation::StakeKeyHash,
        "stake key hash",
        STAKE_KEY_HASH,
        bech32,
    ))
    .map(|(_, hash)| hash.to_string())
}

/// Hex BLAKE2b-256 hash of a transaction body, as encoded in `cbor`.
pub fn resolve_tx_hash(cbor: &str) -> Result<String, ResolveError> {
    logged(
        Transaction::from_cbor_hex(cbor)
            .map(|tx| tx.hash().to_string())
            .map_err(|e| ResolveError::malformed(Operation::TxHash, e)),
    )
}
