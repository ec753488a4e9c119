//! I/O helpers for docgen commands.

pub mod config;
pub mod process;
pub mod workdir;
