//! Website API docs generator.
//!
//! Runs `<install> && typedoc <entry> --out <dir> --githubPages --cleanOutputDir`
//! from inside each module, writing into `website/static/api/<output>`.
//! Any failure prints one diagnostic and exits with [`exit_codes::FAILED`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use docgen::core::command::{DEFAULT_ENTRY, DocsRequest, FileManager, ToolSettings};
use docgen::exit_codes;
use docgen::generate::{generate_all, generate_api_docs, plan_targets};
use docgen::io::config::{DEFAULT_CONFIG_FILE, init_config, load_config};
use docgen::io::process::SystemShell;
use docgen::logging;

#[derive(Parser)]
#[command(name = "docgen", version, about = "Generate website API docs with typedoc")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate docs for a single module given on the command line.
    Run {
        /// Path segment from the project root to the module (repeatable).
        #[arg(long = "module", required = true)]
        module_paths: Vec<String>,
        /// Path segment below `website/static/api` (repeatable).
        #[arg(long = "output", required = true)]
        output_paths: Vec<String>,
        #[arg(long, default_value = DEFAULT_ENTRY)]
        entry: String,
        #[arg(long, value_enum, default_value_t = FileManager::Yarn)]
        file_manager: FileManager,
        #[arg(long, default_value = ".")]
        project_root: PathBuf,
        /// Tool binary (default: `website/node_modules/.bin/typedoc`).
        #[arg(long)]
        typedoc_bin: Option<PathBuf>,
        /// Replace `<file-manager> install`.
        #[arg(long)]
        install_command: Option<String>,
        /// Kill the command after this many seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Generate docs for every target in the config file.
    Generate {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        #[arg(long, default_value = ".")]
        project_root: PathBuf,
        /// Only generate the target with this name.
        #[arg(long)]
        only: Option<String>,
    },
    /// Print each target's working directory and command without running it.
    Plan {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        #[arg(long, default_value = ".")]
        project_root: PathBuf,
    },
    /// Write a starter config with the `common` and `solana.js` targets.
    Init {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            module_paths,
            output_paths,
            entry,
            file_manager,
            project_root,
            typedoc_bin,
            install_command,
            timeout_secs,
        } => {
            let request = DocsRequest {
                project_root,
                module_paths,
                output_paths,
                file_manager,
                entry,
            };
            let settings = ToolSettings {
                typedoc_bin,
                install_command,
            };
            cmd_run(&request, &settings, timeout_secs)
        }
        Command::Generate {
            config,
            project_root,
            only,
        } => cmd_generate(&config, &project_root, only.as_deref()),
        Command::Plan {
            config,
            project_root,
        } => cmd_plan(&config, &project_root),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_run(
    request: &DocsRequest,
    settings: &ToolSettings,
    timeout_secs: Option<u64>,
) -> Result<()> {
    if timeout_secs == Some(0) {
        bail!("--timeout-secs must be > 0");
    }
    let shell = SystemShell::new(timeout_secs.map(Duration::from_secs));
    generate_api_docs(request, settings, &shell)?;
    Ok(())
}

fn cmd_generate(config_path: &Path, project_root: &Path, only: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let shell = SystemShell::new(config.timeout());
    generate_all(&config, project_root, &shell, only)?;
    Ok(())
}

fn cmd_plan(config_path: &Path, project_root: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    for (label, plan) in plan_targets(&config, project_root, None)? {
        println!("{}: cd {}", label, plan.source_dir.display());
        println!("{}: {}", label, plan.command);
    }
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if init_config(config_path, force)? {
        println!("wrote {}", config_path.display());
    } else {
        println!("{} exists; pass --force to overwrite", config_path.display());
    }
    Ok(())
}
