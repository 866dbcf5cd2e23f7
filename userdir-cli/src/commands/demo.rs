//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_userdir_dir;
use crate::output;
use userdir_core::services::DemoService;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Serve the built-in sample users instead of calling the API
    #[command(name = "on")]
    On,
    /// Go back to the configured API
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let userdir_dir = get_userdir_dir()?;
    std::fs::create_dir_all(&userdir_dir)?;
    let demo_service = DemoService::new(&userdir_dir);

    match command {
        Some(DemoCommands::On) => {
            demo_service.enable()?;
            println!("{}", "Demo mode enabled".green());
            println!("Run 'userdir list' to see the sample directory.");
        }
        Some(DemoCommands::Off) => {
            demo_service.disable()?;
            println!("{}", "Demo mode disabled".yellow());
        }
        Some(DemoCommands::Status) | None => {
            println!("Demo mode is {}", output::on_off(demo_service.is_enabled()?));
        }
    }

    Ok(())
}
