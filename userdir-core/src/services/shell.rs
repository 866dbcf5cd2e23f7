//! Application shell - owns the fetch lifecycle
//!
//! The shell starts in the loading state, issues exactly one fetch when
//! mounted and records either the user collection or an error message.
//! It never retries; mounting again is a no-op.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::UserSource;

/// Page header rendered above the directory view
pub const PAGE_TITLE: &str = "User Directory";

/// The state the shell exposes to the directory view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Terminal outcome of the single fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Number of users loaded
    Loaded(usize),
    /// Failure category and the message stored in the shell state
    Failed { kind: &'static str, message: String },
}

/// Application shell
pub struct AppShell {
    source: Arc<dyn UserSource>,
    state: ShellState,
    mounted: bool,
}

impl AppShell {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self {
            source,
            state: ShellState::default(),
            mounted: false,
        }
    }

    /// Current loading/error/users triple
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Name of the source the shell fetches from
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Mount the shell, fetching the user collection once
    ///
    /// Returns the outcome of the fetch, or `None` when the shell was
    /// already mounted and no request was issued.
    pub fn mount(&mut self) -> Option<FetchOutcome> {
        if self.mounted {
            return None;
        }
        self.mounted = true;

        let result = self.source.fetch_users();
        Some(self.resolve(result))
    }

    fn resolve(&mut self, result: Result<Vec<User>>) -> FetchOutcome {
        self.state.loading = false;

        match result {
            Ok(users) => {
                let count = users.len();
                self.state.users = users;
                self.state.error = None;
                FetchOutcome::Loaded(count)
            }
            Err(e) => {
                let message = e.user_message();
                self.state.error = Some(message.clone());
                FetchOutcome::Failed {
                    kind: e.kind(),
                    message,
                }
            }
        }
    }
}
