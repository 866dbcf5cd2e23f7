//! Service layer
//!
//! The shell and the directory view are the two components of the viewer;
//! logging and demo mode are the supporting services around them.

mod demo;
pub mod directory;
pub mod logging;
pub mod shell;

pub use demo::DemoService;
pub use directory::{DirectoryPage, DirectoryView, Rendered, Row, ViewProps};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use shell::{AppShell, FetchOutcome, ShellState, PAGE_TITLE};
