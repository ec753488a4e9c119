//! Planning a documentation run: directories, install step, tool command line.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Error, Result, anyhow, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::path::{api_docs_dir, join_segments, relative_path};

/// Default source entry point, relative to the module directory.
pub const DEFAULT_ENTRY: &str = "./src/index.ts";

/// Flags passed to the tool after `--out <dir>`.
pub const TOOL_FLAGS: [&str; 2] = ["--githubPages", "--cleanOutputDir"];

/// Package manager used for the install step that precedes the tool.
///
/// Defaults to `yarn`, the declared default of the website's docs script.
/// Repos that install with pnpm set `file_manager = "pnpm"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileManager {
    #[default]
    Yarn,
    Npm,
    Pnpm,
}

impl FileManager {
    pub fn as_str(self) -> &'static str {
        match self {
            FileManager::Yarn => "yarn",
            FileManager::Npm => "npm",
            FileManager::Pnpm => "pnpm",
        }
    }

    pub fn install_command(self) -> String {
        format!("{} install", self.as_str())
    }
}

impl fmt::Display for FileManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yarn" => Ok(FileManager::Yarn),
            "npm" => Ok(FileManager::Npm),
            "pnpm" => Ok(FileManager::Pnpm),
            _ => Err(anyhow!("unknown file manager '{s}' (expected yarn, npm or pnpm)")),
        }
    }
}

/// Inputs for one documentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsRequest {
    /// Repository root; the website lives at `<root>/website`.
    pub project_root: PathBuf,
    /// Segments from the root to the module being documented.
    pub module_paths: Vec<String>,
    /// Segments below `website/static/api` receiving the output.
    pub output_paths: Vec<String>,
    pub file_manager: FileManager,
    /// Entry file, relative to the module directory.
    pub entry: String,
}

impl DocsRequest {
    pub fn new(
        project_root: impl Into<PathBuf>,
        module_paths: &[&str],
        output_paths: &[&str],
    ) -> Self {
        Self {
            project_root: project_root.into(),
            module_paths: module_paths.iter().map(|s| s.to_string()).collect(),
            output_paths: output_paths.iter().map(|s| s.to_string()).collect(),
            file_manager: FileManager::default(),
            entry: DEFAULT_ENTRY.to_string(),
        }
    }

    /// Reject requests whose output would not land strictly below the shared API dir.
    ///
    /// The tool runs with `--cleanOutputDir`, so an output path resolving to
    /// the API dir or above it would wipe other modules' docs or the repo.
    pub fn validate(&self) -> Result<()> {
        if self.output_paths.is_empty() {
            bail!("output_paths must be non-empty");
        }
        let mut segments = self.module_paths.iter().chain(&self.output_paths);
        if let Some(bad) = segments.find(|s| s.trim().is_empty()) {
            bail!("path segments must be non-empty (got {:?})", bad);
        }
        if let Some(bad) = self.output_paths.iter().find(|s| !is_plain_segment(s)) {
            bail!(
                "output segment {:?} must be a single directory name (no '.', '..' or separators)",
                bad
            );
        }
        if self.entry.trim().is_empty() {
            bail!("entry must be non-empty");
        }
        Ok(())
    }
}

fn is_plain_segment(segment: &str) -> bool {
    let segment = segment.trim();
    segment != "." && segment != ".." && !segment.contains(['/', '\\'])
}

/// Overrides for the install step and the tool binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSettings {
    /// Tool binary. Bare names are looked up on `PATH`; other relative paths
    /// resolve against the project root.
    pub typedoc_bin: Option<PathBuf>,
    /// Replaces the file manager's `<fm> install`.
    pub install_command: Option<String>,
}

impl ToolSettings {
    /// Tool binary for `project_root`, defaulting to the website's local typedoc.
    pub fn tool_path(&self, project_root: &Path) -> PathBuf {
        match &self.typedoc_bin {
            Some(bin) if bin.is_absolute() || bin.components().count() == 1 => bin.clone(),
            Some(bin) => join_segments(project_root, &[bin.to_string_lossy()]),
            None => join_segments(project_root, &["website", "node_modules", ".bin", "typedoc"]),
        }
    }

    pub fn install_step(&self, file_manager: FileManager) -> String {
        match &self.install_command {
            Some(command) => command.clone(),
            None => file_manager.install_command(),
        }
    }
}

/// Fully computed documentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsPlan {
    /// Module directory; the tool runs with this as its working directory.
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// `output_dir` relative to `source_dir`, as passed to `--out`.
    pub relative_output: PathBuf,
    /// Shell command line: install step, then the tool.
    pub command: String,
}

/// Compute directories and the command line for `request`.
pub fn plan_docs(request: &DocsRequest, settings: &ToolSettings) -> DocsPlan {
    let source_dir = join_segments(&request.project_root, &request.module_paths);
    let output_dir = api_docs_dir(&request.project_root, &request.output_paths);
    let relative_output = relative_path(&source_dir, &output_dir);

    let tool = settings.tool_path(&request.project_root);
    let command = build_command(
        &settings.install_step(request.file_manager),
        &tool.to_string_lossy(),
        &request.entry,
        &relative_output.to_string_lossy(),
    );

    DocsPlan {
        source_dir,
        output_dir,
        relative_output,
        command,
    }
}

/// `<install> && <tool> <entry> --out <out> --githubPages --cleanOutputDir`
pub fn build_command(install: &str, tool: &str, entry: &str, out: &str) -> String {
    format!(
        "{} && {} {} --out {} {}",
        install,
        quote_arg(tool),
        quote_arg(entry),
        quote_arg(out),
        TOOL_FLAGS.join(" ")
    )
}

/// Quote `arg` for the platform shell unless it is made of plain characters.
pub fn quote_arg(arg: &str) -> String {
    quote_for_shell(arg, cfg!(windows))
}

/// `sh` gets single quotes; `cmd.exe` gets double quotes with `"` doubled.
fn quote_for_shell(arg: &str, windows: bool) -> String {
    let plain = !arg.is_empty()
        && arg.chars().all(|c| {
            c.is_ascii_alphanumeric() || "-_./:=@+,%".contains(c) || (windows && c == '\\')
        });
    if plain {
        return arg.to_string();
    }
    if windows {
        format!("\"{}\"", arg.replace('"', "\"\""))
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
