//! Semantic invariants not expressible via JSON Schema.

use std::collections::HashSet;

use crate::types::{NetworkConfig, SolanaConfig};

/// Check semantic invariants not expressible in JSON Schema:
/// - No duplicate queue address within a network
/// - `programId` identical across networks
pub fn validate_invariants(table: &SolanaConfig) -> Vec<String> {
    let mut errors = Vec::new();
    for (network, config) in table.networks() {
        validate_network(config, network.as_str(), &mut errors);
    }

    if table.mainnet.program_id != table.devnet.program_id {
        errors.push(format!(
            "programId differs across networks: mainnet={} devnet={}",
            table.mainnet.program_id, table.devnet.program_id
        ));
    }
    errors
}

fn validate_network(config: &NetworkConfig, path: &str, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for (index, queue) in config.queues.iter().enumerate() {
        if !seen.insert(queue.address.as_str()) {
            errors.push(format!(
                "{}/queues/{}: duplicate queue address '{}'",
                path, index, queue.address
            ));
        }
    }
}
