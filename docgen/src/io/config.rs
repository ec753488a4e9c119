//! Docgen configuration stored in `docgen.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::command::{DEFAULT_ENTRY, DocsRequest, FileManager, ToolSettings};

pub const DEFAULT_CONFIG_FILE: &str = "docgen.toml";

/// Docgen configuration (TOML).
///
/// Edited by humans. Missing fields default to the website layout used by
/// the JavaScript SDKs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DocgenConfig {
    /// Package manager for targets that don't set their own.
    pub file_manager: FileManager,

    /// Tool binary; defaults to `website/node_modules/.bin/typedoc`.
    pub typedoc_bin: Option<PathBuf>,

    /// Replaces `<file_manager> install` for every target.
    pub install_command: Option<String>,

    /// Kill a target's command after this many seconds. Unset waits forever.
    pub timeout_secs: Option<u64>,

    pub targets: Vec<TargetConfig>,
}

/// One module whose API docs are published on the website.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    /// Label for `--only`; defaults to the joined output path.
    #[serde(default)]
    pub name: Option<String>,
    pub module_paths: Vec<String>,
    pub output_paths: Vec<String>,
    #[serde(default = "default_entry")]
    pub entry: String,
    #[serde(default)]
    pub file_manager: Option<FileManager>,
}

fn default_entry() -> String {
    DEFAULT_ENTRY.to_string()
}

impl TargetConfig {
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.output_paths.join("/"),
        }
    }

    /// Request for this target, filling defaults from `config`.
    pub fn request(&self, config: &DocgenConfig, project_root: &Path) -> DocsRequest {
        DocsRequest {
            project_root: project_root.to_path_buf(),
            module_paths: self.module_paths.clone(),
            output_paths: self.output_paths.clone(),
            file_manager: self.file_manager.unwrap_or(config.file_manager),
            entry: self.entry.clone(),
        }
    }
}

impl DocgenConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be > 0"));
        }
        if let Some(command) = &self.install_command
            && command.trim().is_empty()
        {
            return Err(anyhow!("install_command must be non-empty"));
        }
        let mut seen = HashSet::new();
        for target in &self.targets {
            let label = target.label();
            if !seen.insert(label.clone()) {
                return Err(anyhow!("duplicate target '{}'", label));
            }
            if target.module_paths.is_empty() {
                return Err(anyhow!("target '{}': module_paths must be non-empty", label));
            }
            target
                .request(self, Path::new("."))
                .validate()
                .with_context(|| format!("target '{}'", label))?;
        }
        Ok(())
    }

    pub fn settings(&self) -> ToolSettings {
        ToolSettings {
            typedoc_bin: self.typedoc_bin.clone(),
            install_command: self.install_command.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DocgenConfig::default()`.
pub fn load_config(path: &Path) -> Result<DocgenConfig> {
    if !path.exists() {
        let cfg = DocgenConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DocgenConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Starter config for the JavaScript SDKs published under `website/static/api`.
///
/// Installs with pnpm, as the website's docs script always has.
pub fn starter_config() -> DocgenConfig {
    let target = |module: &str| TargetConfig {
        name: None,
        module_paths: vec!["javascript".to_string(), module.to_string()],
        output_paths: vec![module.to_string()],
        entry: default_entry(),
        file_manager: None,
    };
    DocgenConfig {
        file_manager: FileManager::Pnpm,
        targets: vec![target("common"), target("solana.js")],
        ..DocgenConfig::default()
    }
}

/// Write [`starter_config`] to `path` unless it exists and `force` is false.
///
/// Returns whether the file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        return Ok(false);
    }
    write_config(path, &starter_config())?;
    Ok(true)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DocgenConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
