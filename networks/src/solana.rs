//! Builtin Switchboard deployment table for Solana.
//!
//! The records are built once on first access and never mutated afterwards.
//! Serialized with [`crate::store::to_json_pretty`], the table reads:
//!
//! ```json
//! {
//!   "mainnet": {
//!     "programId": "SW1TCH7qEPTdLsDHRgPuMQjbQxKdH2aBStViMFnt64f",
//!     "authority": "2NvGRFswVx3GXxURNSfjbsWY4iP1ufj8LvAKJWGXSm4D",
//!     "idlAddress": "Fi8vncGpNKbq62gPo56G4toCehWNy77GgqGkTaAF5Lkk",
//!     "metadata": { "defaultRpcUrl": "...", "defaultExplorer": "..." },
//!     "queues": [ { "name": "Permissioned Queue", ... }, ... ]
//!   },
//!   "devnet": { ... }
//! }
//! ```

use std::sync::LazyLock;

use crate::types::{NetworkConfig, NetworkMetadata, QueueConfig, SolanaConfig};

/// Switchboard oracle program, deployed at the same address on every cluster.
pub const PROGRAM_ID: &str = "SW1TCH7qEPTdLsDHRgPuMQjbQxKdH2aBStViMFnt64f";
pub const IDL_ADDRESS: &str = "Fi8vncGpNKbq62gPo56G4toCehWNy77GgqGkTaAF5Lkk";

pub static MAINNET: LazyLock<NetworkConfig> = LazyLock::new(|| NetworkConfig {
    program_id: PROGRAM_ID.to_string(),
    authority: "2NvGRFswVx3GXxURNSfjbsWY4iP1ufj8LvAKJWGXSm4D".to_string(),
    idl_address: IDL_ADDRESS.to_string(),
    metadata: NetworkMetadata {
        default_rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
        default_explorer: "https://explorer.solana.com".to_string(),
    },
    queues: vec![
        queue(
            "Permissioned Queue",
            "3HBb2DQqDfuMdzWxNk1Eo9RTMkFYmuEAd32RiLKn9pAn",
            "31Sof5r1xi7dfcaz4x9Kuwm8J9ueAdDduMcme59sP8gc",
            "GdNVLWzcE6h9SPuSbmu69YzxAj8enim9t6mjzuqTXgLd",
            true,
        ),
        queue(
            "Permissionless Queue",
            "5JYwqvKkqp35w8Nq3ba4z1WYUeJQ1rB36V8XvaGp6zn1",
            "31Sof5r1xi7dfcaz4x9Kuwm8J9ueAdDduMcme59sP8gc",
            "BKtF8yyQsj3Ft6jb2nkfpEKzARZVdGgdEPs6mFmZNmbA",
            false,
        ),
    ],
});

pub static DEVNET: LazyLock<NetworkConfig> = LazyLock::new(|| NetworkConfig {
    program_id: PROGRAM_ID.to_string(),
    authority: "2KgowxogBrGqRcgXQEmqFvC3PGtCu66qERNJevYW8Ajh".to_string(),
    idl_address: IDL_ADDRESS.to_string(),
    metadata: NetworkMetadata {
        default_rpc_url: "https://api.devnet.solana.com".to_string(),
        default_explorer: "https://explorer.solana.com/?cluster=devnet".to_string(),
    },
    queues: vec![
        queue(
            "Permissioned Queue",
            "PeRMnAqNqHQYHUuCBEjhm1XPeVTh4BxjY4t4TPan1pG",
            "2KgowxogBrGqRcgXQEmqFvC3PGtCu66qERNJevYW8Ajh",
            "crnKsPsuP6f7uiDbAYYw66h2RNBrqoazmtZHwazkC6V",
            true,
        ),
        queue(
            "Permissionless Queue",
            "uPeRMdfPmrPqgRWSrjAnAkH78RqAhe5kXoW6vBYRqFX",
            "2KgowxogBrGqRcgXQEmqFvC3PGtCu66qERNJevYW8Ajh",
            "UcrnK4w2HXCEjY8z6TcQ9tysYr3c9VcFLdYAU9YQP5e",
            false,
        ),
    ],
});

/// The full builtin table.
pub static SOLANA_CONFIG: LazyLock<SolanaConfig> = LazyLock::new(|| SolanaConfig {
    mainnet: MAINNET.clone(),
    devnet: DEVNET.clone(),
});

/// Look up a builtin network record by name.
pub fn lookup(name: &str) -> Option<&'static NetworkConfig> {
    SOLANA_CONFIG.get(name)
}

fn queue(
    name: &str,
    address: &str,
    authority: &str,
    crank_address: &str,
    permissioned: bool,
) -> QueueConfig {
    QueueConfig {
        name: name.to_string(),
        address: address.to_string(),
        authority: authority.to_string(),
        crank_address: crank_address.to_string(),
        permissioned,
    }
}
