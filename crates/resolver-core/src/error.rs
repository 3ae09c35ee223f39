use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// The parse failure underneath a malformed input.
pub type Cause = Box<dyn StdError + Send + Sync>;

/// The resolver operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DataHash,
    Fingerprint,
    PaymentKeyHash,
    PrivateKey,
    ScriptAddress,
    ScriptHash,
    StakeAddress,
    StakeKeyHash,
    TxHash,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::DataHash => "resolve_data_hash",
            Operation::Fingerprint => "resolve_fingerprint",
            Operation::PaymentKeyHash => "resolve_payment_key_hash",
            Operation::PrivateKey => "resolve_private_key",
            Operation::ScriptAddress => "resolve_script_address",
            Operation::ScriptHash => "resolve_script_hash",
            Operation::StakeAddress => "resolve_stake_address",
            Operation::StakeKeyHash => "resolve_stake_key_hash",
            Operation::TxHash => "resolve_tx_hash",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a resolution failed.
#[derive(Debug, Error)]
pub enum ResolveErrorKind {
    /// The input could not be parsed (hex, bech32, CBOR, mnemonic, JSON).
    #[error("malformed input: {0}")]
    MalformedInput(#[source] Cause),

    /// The input parsed, but none of the address forms tried carries the
    /// credential the operation needs.
    #[error("couldn't resolve {credential} from address: {address}")]
    MissingCredential {
        credential: &'static str,
        address: String,
    },
}

/// A resolver failure: which operation, and why.
#[derive(Debug, Error)]
#[error("an error occurred during {operation}: {kind}")]
pub struct ResolveError {
    pub operation: Operation,
    #[source]
    pub kind: ResolveErrorKind,
}

impl ResolveError {
    pub fn malformed(operation: Operation, cause: impl Into<Cause>) -> Self {
        Self {
            operation,
            kind: ResolveErrorKind::MalformedInput(cause.into()),
        }
    }

    pub fn missing_credential(
        operation: Operation,
        credential: &'static str,
        address: &str,
    ) -> Self {
        Self {
            operation,
            kind: ResolveErrorKind::MissingCredential {
                credential,
                address: address.to_string(),
            },
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self.kind, ResolveErrorKind::MalformedInput(_))
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self.kind, ResolveErrorKind::MissingCredential { .. })
    }
}

/// Mnemonic handling errors.
#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("invalid mnemonic: {0}")]
    Invalid(String),

    #[error("unsupported word count: {0}")]
    UnsupportedWordCount(usize),
}
