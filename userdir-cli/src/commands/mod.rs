//! CLI command implementations

pub mod browse;
pub mod config;
pub mod demo;
pub mod list;
pub mod logs;

use std::path::PathBuf;

use anyhow::{Context, Result};
use userdir_core::{DirectoryContext, EntryPoint, LogEvent, LoggingService};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger(entry_point: EntryPoint) -> Option<LoggingService> {
    let userdir_dir = get_userdir_dir().ok()?;
    std::fs::create_dir_all(&userdir_dir).ok()?;
    LoggingService::new(&userdir_dir, entry_point, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Record that a command ran, ignoring logging errors
pub fn log_command(logger: &Option<LoggingService>, command: &str) {
    if let Some(l) = logger {
        let _ = l.log_command(command);
    }
}

/// Get the userdir directory from environment or default
pub fn get_userdir_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("USERDIR_DIR") {
        return Ok(PathBuf::from(dir));
    }

    dirs::home_dir()
        .map(|home| home.join(".userdir"))
        .context("Could not find home directory; set USERDIR_DIR")
}

/// Build the context from the userdir directory
pub fn get_context() -> Result<DirectoryContext> {
    let userdir_dir = get_userdir_dir()?;

    std::fs::create_dir_all(&userdir_dir)
        .with_context(|| format!("Failed to create userdir directory: {:?}", userdir_dir))?;

    DirectoryContext::new(&userdir_dir).context("Failed to initialize user directory")
}
