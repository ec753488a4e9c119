//! Inspect and validate Switchboard Solana network tables.
//!
//! Prints records as JSON on stdout so the output can be piped into other
//! tooling unchanged.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use networks::store::{load_table, to_json_pretty};
use networks::{Network, SOLANA_CONFIG, SolanaConfig, invariants::validate_invariants, logging};

#[derive(Parser)]
#[command(
    name = "networks",
    version,
    about = "Switchboard Solana deployment addresses"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the supported network names.
    List,
    /// Print one network record as JSON.
    Show {
        /// Network name (`mainnet`, `devnet`, or an alias such as `mainnet-beta`).
        network: String,
        /// Print only the queue list.
        #[arg(long)]
        queues_only: bool,
    },
    /// Print the whole builtin table as JSON.
    Dump,
    /// Check a table against the schema and invariants (unique queue addresses, shared program id).
    Validate {
        /// JSON file to validate instead of the builtin table.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::List => cmd_list(),
        Command::Show {
            network,
            queues_only,
        } => cmd_show(&network, queues_only),
        Command::Dump => cmd_dump(),
        Command::Validate { file } => cmd_validate(file),
    }
}

fn cmd_list() -> Result<()> {
    for network in Network::ALL {
        println!("{}", network);
    }
    Ok(())
}

fn cmd_show(name: &str, queues_only: bool) -> Result<()> {
    let config = SOLANA_CONFIG
        .get(name)
        .with_context(|| format!("unknown network '{}'", name))?;
    if queues_only {
        print_json(&config.queues)
    } else {
        print_json(config)
    }
}

fn cmd_dump() -> Result<()> {
    print!("{}", to_json_pretty(&SOLANA_CONFIG)?);
    Ok(())
}

fn cmd_validate(file: Option<PathBuf>) -> Result<()> {
    let table: SolanaConfig = match file {
        // `load_table` runs the invariant checks itself.
        Some(path) => load_table(&path)?,
        None => {
            let errors = validate_invariants(&SOLANA_CONFIG);
            if !errors.is_empty() {
                bail!("invariant violations:\n- {}", errors.join("\n- "));
            }
            SOLANA_CONFIG.clone()
        }
    };
    info!(
        mainnet_queues = table.mainnet.queues.len(),
        devnet_queues = table.devnet.queues.len(),
        "table valid"
    );
    println!("ok");
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_queues_only() {
        let cli = Cli::parse_from(["networks", "show", "devnet", "--queues-only"]);
        assert!(matches!(
            cli.command,
            Command::Show { ref network, queues_only: true } if network == "devnet"
        ));
    }

    #[test]
    fn parse_validate_file() {
        let cli = Cli::parse_from(["networks", "validate", "--file", "table.json"]);
        assert!(matches!(
            cli.command,
            Command::Validate { file: Some(ref path) } if path == &PathBuf::from("table.json")
        ));
    }

    #[test]
    fn show_unknown_network_errors() {
        let err = cmd_show("localnet", false).expect_err("unknown");
        assert!(err.to_string().contains("unknown network 'localnet'"));
    }
}
