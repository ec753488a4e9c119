//! Record types for the network table.
//!
//! Field names and nesting follow the published JSON shape exactly, so any
//! table serialized by this crate can be read by existing consumers.

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

/// Supported Solana clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Devnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Devnet];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "mainnet-beta" | "main" => Ok(Network::Mainnet),
            "devnet" | "dev" => Ok(Network::Devnet),
            _ => Err(anyhow!("unknown network '{s}'")),
        }
    }
}

/// Human-facing endpoints for a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkMetadata {
    pub default_rpc_url: String,
    pub default_explorer: String,
}

/// An oracle queue deployed on a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QueueConfig {
    /// Display label, conventionally unique per network.
    pub name: String,
    pub address: String,
    pub authority: String,
    pub crank_address: String,
    /// Access-controlled queues only accept allow-listed oracles.
    pub permissioned: bool,
}

/// Deployment record for one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkConfig {
    pub program_id: String,
    pub authority: String,
    pub idl_address: String,
    pub metadata: NetworkMetadata,
    pub queues: Vec<QueueConfig>,
}

impl NetworkConfig {
    /// First queue carrying `name`.
    pub fn queue(&self, name: &str) -> Option<&QueueConfig> {
        self.queues.iter().find(|queue| queue.name == name)
    }

    pub fn queue_by_address(&self, address: &str) -> Option<&QueueConfig> {
        self.queues.iter().find(|queue| queue.address == address)
    }

    pub fn permissioned_queues(&self) -> impl Iterator<Item = &QueueConfig> {
        self.queues.iter().filter(|queue| queue.permissioned)
    }

    pub fn permissionless_queues(&self) -> impl Iterator<Item = &QueueConfig> {
        self.queues.iter().filter(|queue| !queue.permissioned)
    }
}

/// Network name to deployment record, serialized as `{"mainnet": .., "devnet": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolanaConfig {
    pub mainnet: NetworkConfig,
    pub devnet: NetworkConfig,
}

impl SolanaConfig {
    pub fn network(&self, network: Network) -> &NetworkConfig {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Devnet => &self.devnet,
        }
    }

    /// Look up a network by name. Unrecognized names return `None`.
    pub fn get(&self, name: &str) -> Option<&NetworkConfig> {
        name.parse::<Network>()
            .ok()
            .map(|network| self.network(network))
    }

    pub fn networks(&self) -> [(Network, &NetworkConfig); 2] {
        [
            (Network::Mainnet, &self.mainnet),
            (Network::Devnet, &self.devnet),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{network, queue};

    #[test]
    fn parse_network_aliases() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Mainnet-Beta".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("dev".parse::<Network>().unwrap(), Network::Devnet);
        assert!("testnet".parse::<Network>().is_err());
    }

    #[test]
    fn get_unknown_network_returns_none() {
        let table = SolanaConfig {
            mainnet: network("main-auth", vec![]),
            devnet: network("dev-auth", vec![]),
        };
        assert!(table.get("localnet").is_none());
        assert_eq!(
            table.get("DEVNET").map(|cfg| cfg.authority.as_str()),
            Some("dev-auth")
        );
    }

    #[test]
    fn queue_filters_preserve_order() {
        let cfg = network(
            "auth",
            vec![
                queue("a", "addr-a", true),
                queue("b", "addr-b", false),
                queue("c", "addr-c", true),
            ],
        );
        let permissioned: Vec<&str> = cfg
            .permissioned_queues()
            .map(|queue| queue.name.as_str())
            .collect();
        assert_eq!(permissioned, vec!["a", "c"]);
        assert_eq!(cfg.permissionless_queues().count(), 1);
        assert_eq!(
            cfg.queue_by_address("addr-b").map(|q| q.name.as_str()),
            Some("b")
        );
        assert!(cfg.queue("missing").is_none());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let cfg = network("auth", vec![queue("q", "addr", false)]);
        let json = serde_json::to_value(&cfg).expect("serialize");
        assert!(json.get("programId").is_some());
        assert!(json.get("idlAddress").is_some());
        assert!(json["metadata"].get("defaultRpcUrl").is_some());
        assert!(json["queues"][0].get("crankAddress").is_some());
    }
}
