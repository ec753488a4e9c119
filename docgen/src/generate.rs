//! Orchestration for `docgen run` and `docgen generate`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, instrument};

use crate::core::command::{DocsPlan, DocsRequest, ToolSettings, plan_docs};
use crate::io::config::DocgenConfig;
use crate::io::process::ShellRunner;
use crate::io::workdir::WorkdirGuard;

/// Generate API docs for one module.
///
/// Runs the planned command once from inside the module directory. The
/// working directory is restored before returning, whatever the outcome.
/// A non-zero exit or timeout is fatal: the error names the `--out` path.
#[instrument(skip_all, fields(module = %request.module_paths.join("/")))]
pub fn generate_api_docs<R: ShellRunner + ?Sized>(
    request: &DocsRequest,
    settings: &ToolSettings,
    runner: &R,
) -> Result<DocsPlan> {
    request.validate()?;
    let plan = plan_request(request, settings)?;

    let status = {
        let _workdir = WorkdirGuard::enter(&plan.source_dir)?;
        info!(command = %plan.command, "running documentation tool");
        runner.run(&plan.command)?
    };

    if !status.success() {
        info!(exit_code = ?status.code, timed_out = status.timed_out, "documentation tool failed");
        bail!(
            "Typedoc failed to generate documentation for {}",
            plan.relative_output.display()
        );
    }
    debug!(output = %plan.output_dir.display(), "documentation generated");
    Ok(plan)
}

/// Plan `request` with its project root made absolute.
pub fn plan_request(request: &DocsRequest, settings: &ToolSettings) -> Result<DocsPlan> {
    let project_root = std::path::absolute(&request.project_root)
        .with_context(|| format!("resolve project root {}", request.project_root.display()))?;
    let request = DocsRequest {
        project_root,
        ..request.clone()
    };
    Ok(plan_docs(&request, settings))
}

/// Plan every configured target (or only the one labelled `only`), in order.
pub fn plan_targets(
    config: &DocgenConfig,
    project_root: &Path,
    only: Option<&str>,
) -> Result<Vec<(String, DocsPlan)>> {
    let settings = config.settings();
    select_targets(config, project_root, only)?
        .into_iter()
        .map(|(label, request)| -> Result<(String, DocsPlan)> {
            Ok((label, plan_request(&request, &settings)?))
        })
        .collect()
}

/// Generate docs for every configured target in order, stopping at the first failure.
pub fn generate_all<R: ShellRunner + ?Sized>(
    config: &DocgenConfig,
    project_root: &Path,
    runner: &R,
    only: Option<&str>,
) -> Result<Vec<DocsPlan>> {
    let settings = config.settings();
    let mut plans = Vec::new();
    for (label, request) in select_targets(config, project_root, only)? {
        info!(name = %label, "generating target");
        let plan = generate_api_docs(&request, &settings, runner)
            .with_context(|| format!("target '{}'", label))?;
        plans.push(plan);
    }
    Ok(plans)
}

fn select_targets(
    config: &DocgenConfig,
    project_root: &Path,
    only: Option<&str>,
) -> Result<Vec<(String, DocsRequest)>> {
    if config.targets.is_empty() {
        bail!("no targets configured");
    }
    let selected: Vec<(String, DocsRequest)> = config
        .targets
        .iter()
        .filter(|target| only.is_none_or(|name| target.label() == name))
        .map(|target| (target.label(), target.request(config, project_root)))
        .collect();
    if selected.is_empty()
        && let Some(name) = only
    {
        bail!("no target named '{}'", name);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::core::command::FileManager;
    use crate::io::config::TargetConfig;
    use crate::test_support::{ScriptedShell, cwd_lock};

    fn project() -> tempfile::TempDir {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join("sdk")).expect("sdk dir");
        fs::create_dir_all(temp.path().join("javascript").join("solana.js")).expect("js dir");
        temp
    }

    fn target(name: &str, module: &[&str]) -> TargetConfig {
        TargetConfig {
            name: Some(name.to_string()),
            module_paths: module.iter().map(|s| s.to_string()).collect(),
            output_paths: vec![name.to_string()],
            entry: "./src/index.ts".to_string(),
            file_manager: None,
        }
    }

    #[test]
    fn success_runs_tool_inside_module_dir() {
        let _lock = cwd_lock();
        let temp = project();
        let before = env::current_dir().expect("cwd");
        let request = DocsRequest::new(temp.path(), &["sdk"], &["sdk-docs"]);
        let runner = ScriptedShell::new(vec![0]);

        let plan =
            generate_api_docs(&request, &ToolSettings::default(), &runner).expect("generate");

        assert_eq!(
            plan.relative_output,
            PathBuf::from("..").join("website").join("static").join("api").join("sdk-docs")
        );
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].workdir.canonicalize().expect("canonical"),
            temp.path().join("sdk").canonicalize().expect("canonical")
        );
        assert!(calls[0].command.starts_with("yarn install && "));
        assert!(calls[0].command.ends_with("--githubPages --cleanOutputDir"));
        assert_eq!(env::current_dir().expect("cwd"), before);
    }

    #[test]
    fn failure_names_output_path_and_restores_cwd() {
        let _lock = cwd_lock();
        let temp = project();
        let before = env::current_dir().expect("cwd");
        let request = DocsRequest::new(temp.path(), &["sdk"], &["sdk-docs"]);
        let runner = ScriptedShell::new(vec![2]);

        let err = generate_api_docs(&request, &ToolSettings::default(), &runner)
            .expect_err("tool failure");

        let relative = PathBuf::from("..")
            .join("website")
            .join("static")
            .join("api")
            .join("sdk-docs");
        let message = format!("{err:#}");
        assert_eq!(message.matches(&*relative.to_string_lossy()).count(), 1);
        assert!(message.starts_with("Typedoc failed to generate documentation for"));
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(env::current_dir().expect("cwd"), before);
    }

    #[test]
    fn missing_module_dir_fails_before_running() {
        let _lock = cwd_lock();
        let temp = project();
        let request = DocsRequest::new(temp.path(), &["missing"], &["docs"]);
        let runner = ScriptedShell::new(vec![0]);

        let err = generate_api_docs(&request, &ToolSettings::default(), &runner)
            .expect_err("missing dir");
        assert!(format!("{err:#}").contains("change directory to"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn generate_all_stops_at_first_failure() {
        let _lock = cwd_lock();
        let temp = project();
        let config = DocgenConfig {
            file_manager: FileManager::Npm,
            targets: vec![
                target("sdk", &["sdk"]),
                target("solana.js", &["javascript", "solana.js"]),
            ],
            ..DocgenConfig::default()
        };
        let runner = ScriptedShell::new(vec![1, 0]);

        let err = generate_all(&config, temp.path(), &runner, None).expect_err("first fails");
        assert!(format!("{err:#}").starts_with("target 'sdk': Typedoc failed"));
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].command.starts_with("npm install && "));
    }

    #[test]
    fn generate_all_only_selects_named_target() {
        let _lock = cwd_lock();
        let temp = project();
        let config = DocgenConfig {
            targets: vec![
                target("sdk", &["sdk"]),
                target("solana.js", &["javascript", "solana.js"]),
            ],
            ..DocgenConfig::default()
        };
        let runner = ScriptedShell::new(vec![0]);

        let plans =
            generate_all(&config, temp.path(), &runner, Some("solana.js")).expect("generate");
        assert_eq!(plans.len(), 1);
        assert_eq!(
            plans[0].relative_output,
            PathBuf::from("..")
                .join("..")
                .join("website")
                .join("static")
                .join("api")
                .join("solana.js")
        );

        let err = generate_all(&config, temp.path(), &runner, Some("docs")).expect_err("unknown");
        assert!(err.to_string().contains("no target named 'docs'"));
    }

    #[test]
    fn plan_targets_does_not_touch_cwd_or_shell() {
        let config = DocgenConfig {
            targets: vec![target("sdk", &["sdk"])],
            ..DocgenConfig::default()
        };
        let plans = plan_targets(&config, Path::new("/repo"), None).expect("plan");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].0, "sdk");
        assert!(plans[0].1.source_dir.ends_with("sdk"));
    }

    #[test]
    fn empty_config_is_an_error() {
        let runner = ScriptedShell::new(vec![]);
        let err = generate_all(&DocgenConfig::default(), Path::new("/repo"), &runner, None)
            .expect_err("no targets");
        assert!(err.to_string().contains("no targets configured"));
    }
}
