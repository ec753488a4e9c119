//! Switchboard deployment addresses for Solana clusters.
//!
//! - **[`types`]**: Record types matching the published JSON shape.
//! - **[`solana`]**: The builtin mainnet/devnet table, immutable after first access.
//! - **[`invariants`]**: Semantic checks (unique queue addresses, shared program id).
//! - **[`store`]**: JSON serialization and schema-validated loading of custom tables.

pub mod invariants;
pub mod logging;
pub mod solana;
pub mod store;
#[cfg(test)]
mod test_support;
pub mod types;

pub use solana::{DEVNET, MAINNET, SOLANA_CONFIG, lookup};
pub use types::{Network, NetworkConfig, NetworkMetadata, QueueConfig, SolanaConfig};
