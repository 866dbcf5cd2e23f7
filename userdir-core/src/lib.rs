//! Userdir Core - fetch, search, sort and inspect a user directory
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: the user record and sort keys
//! - **ports**: the `UserSource` trait the shell fetches through
//! - **services**: the application shell, the directory view, logging
//! - **adapters**: concrete sources (HTTP API, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::demo::DemoUserSource;
use adapters::http::HttpUserSource;
use config::Config;
use ports::UserSource;
use services::AppShell;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Address, Company, SortDirection, SortField, User};
pub use services::{
    DirectoryPage, DirectoryView, EntryPoint, FetchOutcome, LogEvent, LoggingService, Rendered,
    ShellState,
};

/// Main context for userdir operations
///
/// Holds the loaded configuration and the user source selected by it.
/// Each call to `shell()` yields an independent, unmounted shell.
pub struct DirectoryContext {
    pub config: Config,
    pub source: Arc<dyn UserSource>,
}

impl DirectoryContext {
    /// Create a context from the settings in `userdir_dir`
    pub fn new(userdir_dir: &Path) -> Result<Self> {
        let config = Config::load(userdir_dir)?;

        let source: Arc<dyn UserSource> = if config.demo_mode {
            Arc::new(DemoUserSource::new())
        } else {
            Arc::new(HttpUserSource::new(
                config.effective_api_url(),
                config.timeout(),
            )?)
        };

        Ok(Self { config, source })
    }

    /// Create a context around an explicit source
    pub fn with_source(config: Config, source: Arc<dyn UserSource>) -> Self {
        Self { config, source }
    }

    /// A fresh application shell over this context's source
    pub fn shell(&self) -> AppShell {
        AppShell::new(Arc::clone(&self.source))
    }
}
