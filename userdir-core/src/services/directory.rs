//! Directory view - search, sort and row selection over the shell's users
//!
//! The view owns only interaction state (query, sort, selection). Rows are
//! derived from the users it is given on every render and never cached.

use serde::Serialize;

use crate::domain::{locale_compare, SortDirection, SortField, User};

use super::shell::ShellState;

/// Placeholder shown while the fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading users...";

/// Hint shown in an empty search box
pub const SEARCH_PLACEHOLDER: &str = "Search by name or email...";

/// Read-only inputs passed down from the shell
#[derive(Debug, Clone, Copy)]
pub struct ViewProps<'a> {
    pub users: &'a [User],
    pub loading: bool,
    pub error: Option<&'a str>,
}

impl<'a> From<&'a ShellState> for ViewProps<'a> {
    fn from(state: &'a ShellState) -> Self {
        Self {
            users: &state.users,
            loading: state.loading,
            error: state.error.as_deref(),
        }
    }
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<'a> {
    pub user: &'a User,
    pub expanded: bool,
}

/// The interactive directory branch of a render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryPage<'a> {
    pub search_query: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub rows: Vec<Row<'a>>,
}

impl<'a> DirectoryPage<'a> {
    /// The user whose detail panel is open, if it is among the rows
    pub fn expanded(&self) -> Option<&'a User> {
        self.rows.iter().find(|r| r.expanded).map(|r| r.user)
    }

    pub fn users(&self) -> impl Iterator<Item = &'a User> + '_ {
        self.rows.iter().map(|r| r.user)
    }
}

/// Result of rendering the view; exactly one branch applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<'a> {
    Loading,
    Error(String),
    Directory(DirectoryPage<'a>),
}

/// Directory view interaction state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryView {
    search_query: String,
    sort_field: SortField,
    sort_direction: SortDirection,
    selected_user_id: Option<i64>,
}

impl DirectoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn selected_user_id(&self) -> Option<i64> {
        self.selected_user_id
    }

    // === Events ===

    /// Replace the search text (one edit of the search box)
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Click on a column header
    ///
    /// The active field toggles direction; another field becomes active in
    /// ascending order.
    pub fn click_sort_header(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Click on a user's name: expand it, or collapse it if already expanded
    pub fn click_user(&mut self, user_id: i64) {
        self.selected_user_id = if self.selected_user_id == Some(user_id) {
            None
        } else {
            Some(user_id)
        };
    }

    // === Derivations ===

    /// Filtered and sorted users for the current interaction state
    pub fn visible_users<'u>(&self, users: &'u [User]) -> Vec<&'u User> {
        let mut rows = filter_users(users, &self.search_query);
        sort_users(&mut rows, self.sort_field, self.sort_direction);
        rows
    }

    /// Render the view for the given props
    pub fn render<'u>(&self, props: ViewProps<'u>) -> Rendered<'u> {
        if props.loading {
            return Rendered::Loading;
        }

        if let Some(error) = props.error {
            return Rendered::Error(error.to_string());
        }

        let rows = self
            .visible_users(props.users)
            .into_iter()
            .map(|user| Row {
                user,
                expanded: self.selected_user_id == Some(user.id),
            })
            .collect();

        Rendered::Directory(DirectoryPage {
            search_query: self.search_query.clone(),
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            rows,
        })
    }
}

/// Users whose name or email contains the query, ignoring case
///
/// An empty query matches everyone. Input order is preserved.
pub fn filter_users<'u>(users: &'u [User], query: &str) -> Vec<&'u User> {
    let needle = query.to_lowercase();

    users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort rows by a field; the sort is stable so ties keep their input order
pub fn sort_users(rows: &mut [&User], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| direction.apply(locale_compare(field.key(a), field.key(b))));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo::generate_demo_users;

    fn two_users() -> Vec<User> {
        vec![
            User::new(1, "Leanne Graham", "Sincere@april.biz"),
            User::new(2, "Ervin Howell", "Shanna@melissa.tv"),
        ]
    }

    fn loaded(users: &[User]) -> ViewProps<'_> {
        ViewProps {
            users,
            loading: false,
            error: None,
        }
    }

    fn page<'u>(view: &DirectoryView, users: &'u [User]) -> DirectoryPage<'u> {
        match view.render(loaded(users)) {
            Rendered::Directory(page) => page,
            other => panic!("expected directory, got {:?}", other),
        }
    }

    fn names(page: &DirectoryPage<'_>) -> Vec<String> {
        page.users().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let users = two_users();
        let result = filter_users(&users, "howell");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ervin Howell");
    }

    #[test]
    fn test_filter_by_email() {
        let users = two_users();
        let result = filter_users(&users, "APRIL.BIZ");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let users = generate_demo_users();
        assert_eq!(filter_users(&users, "").len(), users.len());
    }

    #[test]
    fn test_filter_no_match() {
        let users = two_users();
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn test_default_sort_is_name_ascending() {
        let users = generate_demo_users();
        let view = DirectoryView::new();
        let page = page(&view, &users);

        assert_eq!(page.sort_field, SortField::Name);
        assert_eq!(page.sort_direction, SortDirection::Ascending);
        assert_eq!(
            &names(&page)[..3],
            ["Chelsey Dietrich", "Clementina DuBuque", "Clementine Bauch"]
        );
        assert_eq!(names(&page).last().unwrap(), "Patricia Lebsack");
    }

    #[test]
    fn test_sort_header_state_machine() {
        let mut view = DirectoryView::new();

        view.click_sort_header(SortField::Email);
        assert_eq!(view.sort_field(), SortField::Email);
        assert_eq!(view.sort_direction(), SortDirection::Ascending);

        view.click_sort_header(SortField::Email);
        assert_eq!(view.sort_direction(), SortDirection::Descending);

        view.click_sort_header(SortField::Name);
        assert_eq!(view.sort_field(), SortField::Name);
        assert_eq!(view.sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_email_descending_order() {
        let users = generate_demo_users();
        let mut view = DirectoryView::new();
        view.click_sort_header(SortField::Email);
        view.click_sort_header(SortField::Email);

        let page = page(&view, &users);
        let emails: Vec<&str> = page.users().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.first(), Some(&"Telly.Hoeger@billy.biz"));
        assert_eq!(emails.last(), Some(&"Chaim_McDermott@dana.io"));
        for pair in emails.windows(2) {
            assert_ne!(locale_compare(pair[0], pair[1]), std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn test_toggle_twice_restores_order() {
        let users = generate_demo_users();
        let mut view = DirectoryView::new();
        let before = names(&page(&view, &users));

        view.click_sort_header(SortField::Name);
        let reversed = names(&page(&view, &users));
        view.click_sort_header(SortField::Name);
        let after = names(&page(&view, &users));

        assert_ne!(before, reversed);
        assert_eq!(before, after);
    }

    #[test]
    fn test_accented_names_sort_by_base_letter() {
        let users = vec![
            User::new(1, "Zoe Adams", "zoe@example.com"),
            User::new(2, "Émile Zola", "emile@example.com"),
            User::new(3, "Fred Smith", "fred@example.com"),
        ];
        let mut rows: Vec<&User> = users.iter().collect();

        sort_users(&mut rows, SortField::Name, SortDirection::Ascending);
        assert_eq!(rows.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let users = vec![
            User::new(1, "Same", "b@example.com"),
            User::new(2, "Same", "a@example.com"),
        ];
        let mut rows: Vec<&User> = users.iter().collect();

        sort_users(&mut rows, SortField::Name, SortDirection::Ascending);
        assert_eq!(rows.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);

        sort_users(&mut rows, SortField::Name, SortDirection::Descending);
        assert_eq!(rows.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_selection_toggles_and_is_exclusive() {
        let users = generate_demo_users();
        let mut view = DirectoryView::new();

        view.click_user(3);
        let page1 = page(&view, &users);
        assert_eq!(page1.rows.iter().filter(|r| r.expanded).count(), 1);
        assert_eq!(page1.expanded().map(|u| u.id), Some(3));

        view.click_user(5);
        let page2 = page(&view, &users);
        assert_eq!(page2.rows.iter().filter(|r| r.expanded).count(), 1);
        assert_eq!(page2.expanded().map(|u| u.id), Some(5));

        view.click_user(5);
        let page3 = page(&view, &users);
        assert!(page3.expanded().is_none());
        assert_eq!(view.selected_user_id(), None);
    }

    #[test]
    fn test_stale_selection_shows_nothing() {
        let users = two_users();
        let mut view = DirectoryView::new();
        view.click_user(99);

        assert!(page(&view, &users).expanded().is_none());
    }

    #[test]
    fn test_filtered_out_selection_is_hidden_then_restored() {
        let users = two_users();
        let mut view = DirectoryView::new();
        view.click_user(1);

        view.set_search_query("howell");
        assert!(page(&view, &users).expanded().is_none());

        view.set_search_query("");
        assert_eq!(page(&view, &users).expanded().map(|u| u.id), Some(1));
    }

    #[test]
    fn test_loading_branch_wins() {
        let users = two_users();
        let view = DirectoryView::new();
        let rendered = view.render(ViewProps {
            users: &users,
            loading: true,
            error: Some("ignored"),
        });
        assert_eq!(rendered, Rendered::Loading);
    }

    #[test]
    fn test_error_branch() {
        let view = DirectoryView::new();
        let rendered = view.render(ViewProps {
            users: &[],
            loading: false,
            error: Some("Failed to fetch users"),
        });
        assert_eq!(rendered, Rendered::Error("Failed to fetch users".to_string()));
    }

    #[test]
    fn test_render_does_not_touch_users() {
        let users = generate_demo_users();
        let snapshot = users.clone();
        let mut view = DirectoryView::new();
        view.click_sort_header(SortField::Email);
        view.set_search_query("e");
        let _ = view.render(loaded(&users));

        assert_eq!(users, snapshot);
    }
}
