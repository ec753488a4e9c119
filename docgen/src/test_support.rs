//! Test-only helpers: a scripted shell and a lock for working-directory tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};

use crate::io::process::{ShellRunner, ShellStatus};

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that change the process working directory.
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A command observed by [`ScriptedShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCall {
    pub command: String,
    /// Process working directory at the time of the call.
    pub workdir: PathBuf,
}

/// Shell runner that returns queued exit codes and records every call.
#[derive(Debug, Default)]
pub struct ScriptedShell {
    codes: RefCell<VecDeque<i32>>,
    calls: RefCell<Vec<ShellCall>>,
}

impl ScriptedShell {
    pub fn new(codes: Vec<i32>) -> Self {
        Self {
            codes: RefCell::new(codes.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.borrow().clone()
    }
}

impl ShellRunner for ScriptedShell {
    fn run(&self, command: &str) -> Result<ShellStatus> {
        let workdir = env::current_dir()?;
        self.calls.borrow_mut().push(ShellCall {
            command: command.to_string(),
            workdir,
        });
        let code = self
            .codes
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("scripted shell exhausted"))?;
        Ok(ShellStatus::exited(code))
    }
}
