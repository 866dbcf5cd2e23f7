//! Terminal rendering of the directory page

use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

use userdir_core::services::directory::{LOADING_MESSAGE, SEARCH_PLACEHOLDER};
use userdir_core::services::PAGE_TITLE;
use userdir_core::{DirectoryPage, Rendered, SortField, User};

use crate::output::create_table;

/// Print the page header followed by the current branch of the view
///
/// With `numbered`, rows carry the index the browse prompt accepts.
pub fn print_page(rendered: &Rendered<'_>, numbered: bool) {
    println!("{}", PAGE_TITLE.bold());
    println!();

    match rendered {
        Rendered::Loading => println!("{}", LOADING_MESSAGE.dimmed()),
        Rendered::Error(message) => println!("{}", format!("Error: {}", message).red()),
        Rendered::Directory(page) => print_directory(page, numbered),
    }
}

fn print_directory(page: &DirectoryPage<'_>, numbered: bool) {
    if page.search_query.is_empty() {
        println!("Search: {}", SEARCH_PLACEHOLDER.dimmed());
    } else {
        println!("Search: {}", page.search_query);
    }
    println!();

    if page.rows.is_empty() {
        println!("{}", "No users match your search.".yellow());
        return;
    }

    println!("{}", build_table(page, numbered));
}

fn build_table(page: &DirectoryPage<'_>, numbered: bool) -> Table {
    let mut table = create_table();

    let mut header = Vec::new();
    if numbered {
        header.push(Cell::new("#"));
    }
    header.push(Cell::new(header_label(page, SortField::Name)));
    header.push(Cell::new(header_label(page, SortField::Email)));
    table.set_header(header);

    let lead = |cells: &mut Vec<Cell>, text: String| {
        if numbered {
            cells.push(Cell::new(text));
        }
    };

    for (index, row) in page.rows.iter().enumerate() {
        let mut cells = Vec::new();
        lead(&mut cells, (index + 1).to_string());
        cells.push(
            Cell::new(&row.user.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        );
        cells.push(Cell::new(&row.user.email).fg(Color::DarkGrey));
        table.add_row(cells);

        if row.expanded {
            for detail in detail_rows(row.user) {
                let mut cells = Vec::new();
                lead(&mut cells, String::new());
                cells.extend(detail);
                table.add_row(cells);
            }
        }
    }

    table
}

/// Column label with the direction arrow on the active field
fn header_label(page: &DirectoryPage<'_>, field: SortField) -> String {
    if page.sort_field == field {
        format!("{} {}", field.label(), page.sort_direction.arrow())
    } else {
        field.label().to_string()
    }
}

/// The detail panel as table rows: heading, labels, values, phone
///
/// Styling goes through comfy-table so cell widths stay exact.
fn detail_rows(user: &User) -> Vec<[Cell; 2]> {
    let label = |text: &str| Cell::new(text).add_attribute(Attribute::Dim);

    vec![
        [
            Cell::new("User Details").add_attribute(Attribute::Bold),
            Cell::new(""),
        ],
        [label("Address"), label("Company")],
        [
            Cell::new(format!(
                "{}\n{}",
                user.address.street_line(),
                user.address.city_line()
            )),
            Cell::new(format!(
                "{}\n{}",
                user.company.name, user.company.catch_phrase
            )),
        ],
        [label("Phone"), Cell::new(&user.phone)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir_core::adapters::demo::generate_demo_users;
    use userdir_core::services::ViewProps;
    use userdir_core::DirectoryView;

    fn rendered_page(view: &DirectoryView, users: &[User]) -> String {
        let props = ViewProps {
            users,
            loading: false,
            error: None,
        };
        match view.render(props) {
            Rendered::Directory(page) => {
                let mut table = build_table(&page, true);
                table.force_no_tty().set_width(400);
                table.to_string()
            }
            other => panic!("expected directory, got {:?}", other),
        }
    }

    #[test]
    fn test_table_lists_every_row() {
        let users = generate_demo_users();
        let output = rendered_page(&DirectoryView::new(), &users);

        for user in &users {
            assert!(output.contains(&user.email), "missing {}", user.email);
        }
        assert!(output.contains("Name ▲"));
    }

    #[test]
    fn test_expanded_row_shows_details() {
        let users = generate_demo_users();
        let mut view = DirectoryView::new();
        view.click_user(1);

        let output = rendered_page(&view, &users);
        assert!(output.contains("Kulas Light, Apt. 556"));
        assert!(output.contains("Romaguera-Crona"));
        assert!(output.contains("1-770-736-8031 x56442"));
        assert!(output.contains("User Details"));
        assert!(output.contains("Address"));
        assert!(output.contains("Phone"));
    }

    #[test]
    fn test_detail_cells_carry_no_escape_codes() {
        let users = generate_demo_users();

        for cells in detail_rows(&users[0]) {
            for cell in cells.iter() {
                assert!(!cell.content().contains('\u{1b}'), "{:?}", cell.content());
            }
        }
    }

    #[test]
    fn test_narrow_table_rows_align() {
        let users = generate_demo_users();
        let mut view = DirectoryView::new();
        view.click_user(1);

        let table = match view.render(ViewProps {
            users: &users,
            loading: false,
            error: None,
        }) {
            Rendered::Directory(page) => {
                let mut table = build_table(&page, true);
                table.force_no_tty().set_width(50);
                table.to_string()
            }
            other => panic!("expected directory, got {:?}", other),
        };

        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn test_descending_arrow_on_email() {
        let users = generate_demo_users();
        let mut view = DirectoryView::new();
        view.click_sort_header(SortField::Email);
        view.click_sort_header(SortField::Email);

        let output = rendered_page(&view, &users);
        assert!(output.contains("Email ▼"));
        assert!(!output.contains("Name ▲"));
    }
}
