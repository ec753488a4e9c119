//! Generate website API docs for JavaScript modules with typedoc.
//!
//! - **[`core`]**: Pure planning logic (directories, relative `--out` path, command line).
//! - **[`io`]**: Side-effecting operations (config file, shell, working directory).
//!   Isolated behind [`io::process::ShellRunner`] so orchestration can be tested
//!   without spawning processes.
//!
//! [`generate`] coordinates the two to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
