//! Deterministic, pure logic for planning documentation runs.
//!
//! Core modules must be free of I/O side effects. Paths are handled
//! lexically, so results depend only on the inputs.

pub mod command;
pub mod path;
