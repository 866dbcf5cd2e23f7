//! Userdir CLI - browse a user directory in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;
mod render;

use commands::{browse, config, demo, list, logs};
use userdir_core::{EntryPoint, SortField};

/// Userdir - search, sort and inspect a user directory
#[derive(Parser)]
#[command(name = "userdir", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the directory and print it once
    List {
        /// Case-insensitive filter on name or email
        #[arg(short, long)]
        search: Option<String>,
        /// Column to sort by
        #[arg(long, default_value = "name")]
        sort: SortField,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Show the detail panel for this user id
        #[arg(long)]
        expand: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the directory interactively
    Browse,

    /// Show or change the API endpoint and timeout
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            if let Some(logger) = commands::get_logger(EntryPoint::Cli) {
                let _ = logger.log_error("command_failed", &e.to_string(), Some(&format!("{:#}", e)));
            }
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::List {
            search,
            sort,
            desc,
            expand,
            json,
        } => list::run(list::ListOptions {
            search,
            sort,
            descending: desc,
            expand,
            json,
        }),
        Commands::Browse => browse::run().map(|_| ExitCode::SUCCESS),
        Commands::Config { command } => config::run(command).map(|_| ExitCode::SUCCESS),
        Commands::Demo { command } => demo::run(command).map(|_| ExitCode::SUCCESS),
        Commands::Logs { command } => logs::run(command).map(|_| ExitCode::SUCCESS),
    }
}
