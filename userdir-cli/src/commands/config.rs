//! Config command - view and change the API endpoint and timeout

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_userdir_dir;
use crate::output;
use userdir_core::config::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Point the directory at a different users endpoint
    SetUrl {
        /// Absolute http(s) URL returning a JSON array of users
        url: String,
    },
    /// Go back to the default endpoint
    ResetUrl,
    /// Set the request timeout in seconds
    SetTimeout {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        seconds: u64,
    },
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    let userdir_dir = get_userdir_dir()?;
    std::fs::create_dir_all(&userdir_dir)?;

    match command {
        Some(ConfigCommands::Show { json }) => show(&Config::load(&userdir_dir)?, json),
        None => show(&Config::load(&userdir_dir)?, false),
        Some(change) => {
            let mut config = Config::load_file(&userdir_dir)?;
            let message = apply(&mut config, change)?;
            config.save(&userdir_dir)?;
            output::success(&message);
            Ok(())
        }
    }
}

/// Apply a change to the file-backed config, returning the confirmation
fn apply(config: &mut Config, change: ConfigCommands) -> Result<String> {
    let message = match change {
        ConfigCommands::Show { .. } => String::new(),
        ConfigCommands::SetUrl { url } => {
            config.set_api_url(&url)?;
            format!("API URL set to {}", url)
        }
        ConfigCommands::ResetUrl => {
            config.reset_api_url();
            format!("API URL reset to {}", config.effective_api_url())
        }
        ConfigCommands::SetTimeout { seconds } => {
            config.timeout_secs = Some(seconds);
            format!("Timeout set to {} seconds", seconds)
        }
    };
    Ok(message)
}

fn show(config: &Config, json: bool) -> Result<()> {
    let timeout_secs = config.timeout().as_secs();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "apiUrl": config.effective_api_url(),
                "customUrl": config.api_url.is_some(),
                "timeoutSecs": timeout_secs,
                "demoMode": config.demo_mode,
            }))?
        );
        return Ok(());
    }

    let url_note = if config.api_url.is_some() {
        ""
    } else {
        " (default)"
    };

    println!("{}", "Configuration".bold());
    println!("  API URL: {}{}", config.effective_api_url(), url_note.dimmed());
    println!("  Timeout: {}s", timeout_secs);
    println!("  Demo mode: {}", output::on_off(config.demo_mode));
    Ok(())
}
