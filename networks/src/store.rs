//! Reading and writing network tables as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonschema::Draft;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::invariants::validate_invariants;
use crate::types::SolanaConfig;

/// JSON Schema (Draft 2020-12) for the table wire format.
pub const V1_SCHEMA: &str = include_str!("../../schemas/networks/v1.schema.json");

/// Serialize `table` to pretty-printed JSON with trailing newline.
pub fn to_json_pretty(table: &SolanaConfig) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(table).context("serialize json")?;
    payload.push('\n');
    Ok(payload)
}

/// Load a table from disk: schema conformance + semantic invariants.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_table(path: &Path) -> Result<SolanaConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_table(&raw).with_context(|| format!("load {}", path.display()))
}

/// Parse and validate a table.
///
/// Returns the parsed [`SolanaConfig`] on success, or an error describing violations.
pub fn parse_table(raw: &str) -> Result<SolanaConfig> {
    let table_json: Value = serde_json::from_str(raw).context("parse table json")?;
    let schema_json: Value = serde_json::from_str(V1_SCHEMA).context("parse schema json")?;
    validate_schema(&table_json, &schema_json)?;
    let table: SolanaConfig =
        serde_json::from_value(table_json).context("parse table as v1 struct")?;
    let errors = validate_invariants(&table);
    if !errors.is_empty() {
        bail!("invariant violations:\n- {}", errors.join("\n- "));
    }
    debug!(
        mainnet_queues = table.mainnet.queues.len(),
        devnet_queues = table.devnet.queues.len(),
        "table loaded"
    );
    Ok(table)
}

/// Validate JSON instance against a JSON Schema (Draft 2020-12).
fn validate_schema(instance: &Value, schema: &Value) -> Result<()> {
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .context("compile json schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}
