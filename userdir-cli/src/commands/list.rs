//! List command - fetch the directory once and print a single page

use std::collections::HashMap;
use std::process::ExitCode;

use anyhow::Result;

use super::{get_context, get_logger, log_command, log_event};
use crate::render::print_page;
use userdir_core::services::ViewProps;
use userdir_core::{DirectoryView, EntryPoint, LogEvent, OperationResult, Rendered, SortField, User};

/// Options for a one-shot listing
pub struct ListOptions {
    pub search: Option<String>,
    pub sort: SortField,
    pub descending: bool,
    pub expand: Option<i64>,
    pub json: bool,
}

pub fn run(options: ListOptions) -> Result<ExitCode> {
    let logger = get_logger(EntryPoint::Cli);
    log_command(&logger, "list");

    let ctx = get_context()?;
    let mut shell = ctx.shell();
    if let Some(outcome) = shell.mount() {
        log_event(&logger, LogEvent::for_fetch(&outcome, shell.source_name()));
    }

    let view = build_view(&options);
    let rendered = view.render(ViewProps::from(shell.state()));

    if options.json {
        print_json(&view, &rendered)?;
    } else {
        print_page(&rendered, false);
    }

    match rendered {
        Rendered::Error(_) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

/// Replay the command-line flags as view events
fn build_view(options: &ListOptions) -> DirectoryView {
    let mut view = DirectoryView::new();

    if let Some(query) = &options.search {
        view.set_search_query(query.as_str());
    }
    if options.sort != view.sort_field() {
        view.click_sort_header(options.sort);
    }
    if options.descending {
        view.click_sort_header(options.sort);
    }
    if let Some(id) = options.expand {
        view.click_user(id);
    }

    view
}

fn print_json(view: &DirectoryView, rendered: &Rendered<'_>) -> Result<()> {
    let result: OperationResult<Vec<&User>> = match rendered {
        Rendered::Directory(page) => {
            let mut context = HashMap::new();
            context.insert(
                "searchQuery".to_string(),
                serde_json::json!(view.search_query()),
            );
            context.insert("sortField".to_string(), serde_json::json!(view.sort_field()));
            context.insert(
                "sortDirection".to_string(),
                serde_json::json!(view.sort_direction()),
            );
            context.insert(
                "expandedUserId".to_string(),
                serde_json::json!(page.expanded().map(|u| u.id)),
            );
            OperationResult::ok_with_context(page.users().collect(), context)
        }
        Rendered::Error(message) => OperationResult::fail(message.as_str()),
        Rendered::Loading => OperationResult::fail("Users are still loading"),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir_core::SortDirection;

    fn options() -> ListOptions {
        ListOptions {
            search: None,
            sort: SortField::Name,
            descending: false,
            expand: None,
            json: false,
        }
    }

    #[test]
    fn test_default_flags_keep_default_view() {
        let view = build_view(&options());
        assert_eq!(view.sort_field(), SortField::Name);
        assert_eq!(view.sort_direction(), SortDirection::Ascending);
        assert_eq!(view.search_query(), "");
        assert_eq!(view.selected_user_id(), None);
    }

    #[test]
    fn test_email_descending() {
        let view = build_view(&ListOptions {
            sort: SortField::Email,
            descending: true,
            ..options()
        });
        assert_eq!(view.sort_field(), SortField::Email);
        assert_eq!(view.sort_direction(), SortDirection::Descending);
    }

    #[test]
    fn test_name_descending() {
        let view = build_view(&ListOptions {
            descending: true,
            ..options()
        });
        assert_eq!(view.sort_field(), SortField::Name);
        assert_eq!(view.sort_direction(), SortDirection::Descending);
    }

    #[test]
    fn test_search_and_expand() {
        let view = build_view(&ListOptions {
            search: Some("bret".to_string()),
            expand: Some(1),
            ..options()
        });
        assert_eq!(view.search_query(), "bret");
        assert_eq!(view.selected_user_id(), Some(1));
    }
}
