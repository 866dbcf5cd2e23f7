//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the UserSource port
//! - Canned demo records for offline use

pub mod demo;
pub mod http;

#[cfg(test)]
pub mod mock_server;
