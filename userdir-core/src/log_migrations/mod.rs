//! Log database migrations - embedded SQL files
//!
//! Each migration is a (name, sql) pair compiled in with include_str!.
//! The bootstrap migration creates the bookkeeping table and runs first;
//! the rest are applied in list order.

/// Creates `sys_migrations`
pub const MIGRATIONS_BOOTSTRAP: (&str, &str) =
    ("000_migrations.sql", include_str!("000_migrations.sql"));

/// Schema migrations for logs.duckdb, in order.
///
/// When adding one, create NNN_description.sql next to this file and append
/// it here.
pub const LOG_MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial_schema.sql",
    include_str!("001_initial_schema.sql"),
)];
