//! Scoped change of the process working directory.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Holds the process inside a directory until dropped.
///
/// The previous working directory is restored on drop, on success and error
/// paths alike. The working directory is process-global, so callers must not
/// hold two guards from different threads at once.
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct WorkdirGuard {
    original: PathBuf,
}

impl WorkdirGuard {
    /// Save the current directory and change into `dir`.
    pub fn enter(dir: &Path) -> Result<Self> {
        let original = env::current_dir().context("read current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("change directory to {}", dir.display()))?;
        debug!(from = %original.display(), to = %dir.display(), "entered directory");
        Ok(Self { original })
    }

    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        match env::set_current_dir(&self.original) {
            Ok(()) => debug!(to = %self.original.display(), "restored directory"),
            Err(e) => warn!(err = %e, to = %self.original.display(), "failed to restore directory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::cwd_lock;

    #[test]
    fn restores_directory_on_drop() {
        let _lock = cwd_lock();
        let temp = tempfile::tempdir().expect("tempdir");
        let before = env::current_dir().expect("cwd");
        {
            let guard = WorkdirGuard::enter(temp.path()).expect("enter");
            assert_eq!(guard.original(), before.as_path());
            assert_eq!(
                env::current_dir().expect("cwd").canonicalize().expect("canonical"),
                temp.path().canonicalize().expect("canonical")
            );
        }
        assert_eq!(env::current_dir().expect("cwd"), before);
    }

    #[test]
    fn restores_directory_when_scope_errors() {
        let _lock = cwd_lock();
        let temp = tempfile::tempdir().expect("tempdir");
        let before = env::current_dir().expect("cwd");

        let result = (|| -> Result<()> {
            let _guard = WorkdirGuard::enter(temp.path())?;
            anyhow::bail!("tool failed");
        })();

        assert!(result.is_err());
        assert_eq!(env::current_dir().expect("cwd"), before);
    }

    #[test]
    fn missing_directory_leaves_cwd_untouched() {
        let _lock = cwd_lock();
        let temp = tempfile::tempdir().expect("tempdir");
        let before = env::current_dir().expect("cwd");

        let err = WorkdirGuard::enter(&temp.path().join("missing")).expect_err("missing dir");
        assert!(format!("{err:#}").contains("change directory to"));
        assert_eq!(env::current_dir().expect("cwd"), before);
    }
}
