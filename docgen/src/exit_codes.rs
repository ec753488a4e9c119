//! Stable exit codes for docgen CLI commands.

/// Every requested target generated successfully.
pub const OK: i32 = 0;
/// The documentation tool failed, or the config/arguments were invalid.
pub const FAILED: i32 = 1;
