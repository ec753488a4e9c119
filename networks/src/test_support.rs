//! Test-only helpers for constructing network records.

use crate::types::{NetworkConfig, NetworkMetadata, QueueConfig};

pub const TEST_PROGRAM_ID: &str = "SW1TCH7qEPTdLsDHRgPuMQjbQxKdH2aBStViMFnt64f";

/// Create a queue with deterministic authority and crank addresses.
pub fn queue(name: &str, address: &str, permissioned: bool) -> QueueConfig {
    QueueConfig {
        name: name.to_string(),
        address: address.to_string(),
        authority: format!("{} authority", name),
        crank_address: format!("{} crank", name),
        permissioned,
    }
}

/// Create a network record sharing [`TEST_PROGRAM_ID`].
pub fn network(authority: &str, queues: Vec<QueueConfig>) -> NetworkConfig {
    NetworkConfig {
        program_id: TEST_PROGRAM_ID.to_string(),
        authority: authority.to_string(),
        idl_address: "Fi8vncGpNKbq62gPo56G4toCehWNy77GgqGkTaAF5Lkk".to_string(),
        metadata: NetworkMetadata {
            default_rpc_url: "http://127.0.0.1:8899".to_string(),
            default_explorer: "https://explorer.solana.com".to_string(),
        },
        queues,
    }
}
