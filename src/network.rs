//! Network identifiers

use crate::error::{GenesisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Networks with a hardcoded genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Serialize, Deserialize)]
pub enum Network {
    /// Main production network
    #[serde(rename = "mainnet")]
    MainNet,
    /// Regression test network, shares the main network's genesis block
    #[serde(rename = "regtest")]
    RegTest,
    /// Public test network, version 3
    #[serde(rename = "testnet3")]
    TestNet3,
    /// Private simulation network
    #[serde(rename = "simnet")]
    SimNet,
}

impl Network {
    /// Every supported network, in registration order
    pub const ALL: [Network; 4] = [
        Network::MainNet,
        Network::RegTest,
        Network::TestNet3,
        Network::SimNet,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Network::MainNet => "mainnet",
            Network::RegTest => "regtest",
            Network::TestNet3 => "testnet3",
            Network::SimNet => "simnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::MainNet),
            "regtest" => Ok(Network::RegTest),
            "testnet3" | "testnet" => Ok(Network::TestNet3),
            "simnet" | "sim" => Ok(Network::SimNet),
            _ => Err(GenesisError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for network in Network::ALL {
            assert_eq!(network.name().parse::<Network>().unwrap(), network);
            assert_eq!(network.to_string(), network.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("main".parse::<Network>().unwrap(), Network::MainNet);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::TestNet3);
        assert_eq!("SimNet".parse::<Network>().unwrap(), Network::SimNet);
    }

    #[test]
    fn test_unknown_network() {
        assert_eq!(
            "signet".parse::<Network>(),
            Err(GenesisError::UnknownNetwork("signet".to_string()))
        );
        assert!(matches!(
            "".parse::<Network>(),
            Err(GenesisError::UnknownNetwork(_))
        ));
    }
}
