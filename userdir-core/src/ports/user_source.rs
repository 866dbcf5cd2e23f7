//! User source port
//!
//! Defines the interface for obtaining the user collection from an external
//! directory (the HTTP API, canned demo data, test stubs).

use crate::domain::result::Result;
use crate::domain::User;

/// User source trait
///
/// The application shell calls `fetch_users` exactly once per mount and
/// never retries. Implementations report every failure (transport, status,
/// payload) through the returned error.
pub trait UserSource: Send + Sync {
    /// Source name (e.g., "http", "demo")
    fn name(&self) -> &str;

    /// Fetch the complete user collection
    fn fetch_users(&self) -> Result<Vec<User>>;
}
