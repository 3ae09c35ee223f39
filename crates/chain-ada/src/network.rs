use crate::error::AdaError;

/// Network id carried in mainnet address headers.
pub const MAINNET_ID: u8 = 1;

/// Network id shared by the public testnets (preprod, preview).
pub const TESTNET_ID: u8 = 0;

/// Largest network id that fits in the low nibble of an address header.
pub const MAX_NETWORK_ID: u8 = 0x0F;

/// Cardano network family, as far as text encodings are concerned.
///
/// Only mainnet has distinct bech32 prefixes; every other network id uses
/// the `_test` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaNetwork {
    Mainnet,
    Testnet,
}

impl AdaNetwork {
    /// Classify a raw network id from an address header.
    pub fn from_id(network_id: u8) -> Result<Self, AdaError> {
        match network_id {
            MAINNET_ID => Ok(AdaNetwork::Mainnet),
            id if id <= MAX_NETWORK_ID => Ok(AdaNetwork::Testnet),
            id => Err(AdaError::InvalidNetworkId(id)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            AdaNetwork::Mainnet => MAINNET_ID,
            AdaNetwork::Testnet => TESTNET_ID,
        }
    }

    /// Human-readable part for payment addresses.
    pub fn address_hrp(self) -> &'static str {
        match self {
            AdaNetwork::Mainnet => "addr",
            AdaNetwork::Testnet => "addr_test",
        }
    }

    /// Human-readable part for reward (stake) addresses.
    pub fn stake_hrp(self) -> &'static str {
        match self {
            AdaNetwork::Mainnet => "stake",
            AdaNetwork::Testnet => "stake_test",
        }
    }
}

impl std::fmt::Display for AdaNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdaNetwork::Mainnet => write!(f, "mainnet"),
            AdaNetwork::Testnet => write!(f, "testnet"),
        }
    }
}
