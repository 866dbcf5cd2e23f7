//! Browse command - interactive directory session

use std::time::Duration;

use anyhow::{bail, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use super::{get_context, get_logger, log_command, log_event};
use crate::output;
use crate::render::print_page;
use userdir_core::services::directory::LOADING_MESSAGE;
use userdir_core::services::ViewProps;
use userdir_core::{DirectoryView, EntryPoint, LogEvent, Rendered, SortField};

/// A single line typed at the browse prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    Sort(SortField),
    Toggle(usize),
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(input: &str) -> BrowseCommand {
    let trimmed = input.trim();

    if let Some(query) = trimmed.strip_prefix('/') {
        return BrowseCommand::Search(query.to_string());
    }

    match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        "?" | "h" | "help" => BrowseCommand::Help,
        "n" | "name" => BrowseCommand::Sort(SortField::Name),
        "e" | "email" => BrowseCommand::Sort(SortField::Email),
        "" => BrowseCommand::Help,
        other => match other.parse::<usize>() {
            Ok(index) if index > 0 => BrowseCommand::Toggle(index),
            _ => BrowseCommand::Unknown(trimmed.to_string()),
        },
    }
}

fn print_help() {
    output::info("Commands:");
    println!("  /text   search by name or email");
    println!("  /       clear the search");
    println!("  n, e    sort by Name / Email (again to reverse)");
    println!("  <num>   show or hide details for that row");
    println!("  q       quit");
}

pub fn run() -> Result<()> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!("browse needs an interactive terminal; use `userdir list` instead");
    }

    let logger = get_logger(EntryPoint::Interactive);
    log_command(&logger, "browse");

    let ctx = get_context()?;
    let mut shell = ctx.shell();
    let mut view = DirectoryView::new();

    print_page(&view.render(ViewProps::from(shell.state())), true);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(LOADING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let outcome = shell.mount();
    spinner.finish_and_clear();

    if let Some(outcome) = outcome {
        log_event(&logger, LogEvent::for_fetch(&outcome, shell.source_name()));
    }

    loop {
        let rendered = view.render(ViewProps::from(shell.state()));
        println!();
        print_page(&rendered, true);

        let page = match rendered {
            Rendered::Directory(page) => page,
            // Nothing to interact with once the fetch has failed
            Rendered::Error(_) | Rendered::Loading => return Ok(()),
        };

        println!();
        let line: String = Input::new()
            .with_prompt("userdir (? for help)")
            .allow_empty(true)
            .interact_text()?;

        match parse_command(&line) {
            BrowseCommand::Search(query) => view.set_search_query(query),
            BrowseCommand::Sort(field) => view.click_sort_header(field),
            BrowseCommand::Toggle(index) => match page.rows.get(index - 1) {
                Some(row) => view.click_user(row.user.id),
                None => output::warning(&format!("No row {}", index)),
            },
            BrowseCommand::Help => print_help(),
            BrowseCommand::Quit => return Ok(()),
            BrowseCommand::Unknown(text) => {
                output::warning(&format!("Unknown command: {} (type ? for help)", text))
            }
        }
    }
}
