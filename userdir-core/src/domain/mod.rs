//! Core domain entities
//!
//! Pure data structures with no I/O: the user record and the sort keys the
//! directory view orders by.

mod sort;
mod user;
pub mod result;

pub use sort::{locale_compare, SortDirection, SortField};
pub use user::{Address, Company, User};
