//! Demo service - manage demo mode
//!
//! In demo mode the directory is served from canned records instead of the
//! configured API, so the viewer works offline.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;

/// Demo service for managing demo mode
pub struct DemoService {
    userdir_dir: PathBuf,
}

impl DemoService {
    pub fn new(userdir_dir: &Path) -> Self {
        Self {
            userdir_dir: userdir_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        Ok(Config::load(&self.userdir_dir)?.demo_mode)
    }

    pub fn enable(&self) -> Result<()> {
        self.update(Config::enable_demo_mode)
    }

    pub fn disable(&self) -> Result<()> {
        self.update(Config::disable_demo_mode)
    }

    fn update(&self, change: impl FnOnce(&mut Config)) -> Result<()> {
        let mut config = Config::load_file(&self.userdir_dir)?;
        change(&mut config);
        config.save(&self.userdir_dir)
    }
}
