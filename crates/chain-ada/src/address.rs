//! Shelley address handling (CIP-19) on top of `pallas-addresses`.
//!
//! Decoding checks the classic Bech32 checksum before handing the payload to
//! pallas, which on its own accepts either checksum variant. Encoding picks
//! the prefix from [`AdaNetwork`], so every network id in `0..=15` has a
//! text form (pallas only names ids 0 and 1).
//!
//! The resolver reads credentials through the narrowing accessors on
//! [`AddressForms`]:
//!
//! | form       | pallas shape                                  |
//! |------------|-----------------------------------------------|
//! | base       | `Shelley` with a key or script delegation part |
//! | pointer    | `Shelley` with a pointer delegation part      |
//! | enterprise | `Shelley` with a null delegation part         |
//! | reward     | `Stake`                                       |

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};

pub use pallas_addresses::{
    Address, Network, Pointer, ShelleyAddress, ShelleyDelegationPart, ShelleyPaymentPart,
    StakeAddress, StakePayload,
};
pub use pallas_crypto::hash::Hash;

use crate::error::AdaError;
use crate::network::AdaNetwork;

/// Length of a key hash or script hash.
pub const HASH28_LEN: usize = 28;

/// A 28-byte BLAKE2b-224 digest identifying a key or a script.
pub type Hash28 = Hash<HASH28_LEN>;

/// Decode a bech32 address string.
///
/// The human-readable part is not checked against the header: the header
/// byte alone decides the address type and network. Byron addresses are
/// rejected.
pub fn from_bech32(address: &str) -> Result<Address, AdaError> {
    let checked = CheckedHrpstring::new::<Bech32>(address)
        .map_err(|e| AdaError::InvalidAddress(format!("bech32 decode failed: {e}")))?;
    let bytes: Vec<u8> = checked.byte_iter().collect();
    from_bytes(&bytes)
}

/// Decode the raw header-prefixed address bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<Address, AdaError> {
    match Address::from_bytes(bytes)? {
        Address::Byron(_) => Err(AdaError::InvalidAddress(
            "byron addresses are not supported".into(),
        )),
        address => Ok(address),
    }
}

/// Encode as bech32, choosing the prefix from the network id and the
/// address type (`addr`/`addr_test` or `stake`/`stake_test`).
pub fn to_bech32(address: &Address) -> Result<String, AdaError> {
    let (network, bytes) = match address {
        Address::Shelley(a) => (a.network(), a.to_vec()),
        Address::Stake(a) => (a.network(), a.to_vec()),
        Address::Byron(_) => {
            return Err(AdaError::InvalidAddress(
                "byron addresses have no bech32 form".into(),
            ))
        }
    };
    let network = AdaNetwork::from_id(network.value())?;
    let hrp = match address {
        Address::Stake(_) => network.stake_hrp(),
        _ => network.address_hrp(),
    };
    encode_bech32(hrp, &bytes)
}

/// Build an enterprise address (payment credential only).
pub fn enterprise_address(network_id: u8, payment: ShelleyPaymentPart) -> Result<Address, AdaError> {
    let network = checked_network(network_id)?;
    Ok(ShelleyAddress::new(network, payment, ShelleyDelegationPart::Null).into())
}

/// Build a reward address for a stake credential.
pub fn reward_address(network_id: u8, stake: StakePayload) -> Result<Address, AdaError> {
    let network = checked_network(network_id)?;
    Ok(StakeAddress::new(network, stake).into())
}

/// The four Shelley address forms, as narrowing accessors.
pub trait AddressForms {
    fn as_base(&self) -> Option<&ShelleyAddress>;
    fn as_pointer(&self) -> Option<&ShelleyAddress>;
    fn as_enterprise(&self) -> Option<&ShelleyAddress>;
    fn as_reward(&self) -> Option<&StakeAddress>;

    /// Network id from the header nibble. `None` for Byron addresses.
    fn network_id(&self) -> Option<u8>;
}

impl AddressForms for Address {
    fn as_base(&self) -> Option<&ShelleyAddress> {
        match self {
            Address::Shelley(a)
                if matches!(
                    a.delegation(),
                    ShelleyDelegationPart::Key(_) | ShelleyDelegationPart::Script(_)
                ) =>
            {
                Some(a)
            }
            _ => None,
        }
    }

    fn as_pointer(&self) -> Option<&ShelleyAddress> {
        match self {
            Address::Shelley(a) if matches!(a.delegation(), ShelleyDelegationPart::Pointer(_)) => {
                Some(a)
            }
            _ => None,
        }
    }

    fn as_enterprise(&self) -> Option<&ShelleyAddress> {
        match self {
            Address::Shelley(a) if matches!(a.delegation(), ShelleyDelegationPart::Null) => Some(a),
            _ => None,
        }
    }

    fn as_reward(&self) -> Option<&StakeAddress> {
        match self {
            Address::Stake(a) => Some(a),
            _ => None,
        }
    }

    fn network_id(&self) -> Option<u8> {
        self.network().map(|network| network.value())
    }
}

/// Bech32-encode `data` under the given human-readable part.
///
/// Cardano payloads routinely exceed the 90-character segwit limit; the
/// plain bech32 code allows up to 1023 characters.
pub(crate) fn encode_bech32(hrp: &str, data: &[u8]) -> Result<String, AdaError> {
    let hrp = Hrp::parse(hrp)
        .map_err(|e| AdaError::SerializationError(format!("invalid bech32 prefix: {e}")))?;
    bech32::encode::<Bech32>(hrp, data)
        .map_err(|e| AdaError::SerializationError(format!("bech32 encode failed: {e}")))
}

fn checked_network(network_id: u8) -> Result<Network, AdaError> {
    AdaNetwork::from_id(network_id)?;
    Ok(Network::from(network_id))
}
