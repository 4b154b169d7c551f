//! Global constants for the command-line tool

/// File the log records are written to
pub const LOG_FILE: &str = "./validador.log";
/// Optional JSON settings file
pub const CONFIG_FILE: &str = "./validador.json";
/// Log level used when the settings don't name one
pub const DEFAULT_LOG_LEVEL: &str = "info";
