//! Terminal output helpers shared by the commands

use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

pub fn success(msg: &str) {
    println!("{}", msg.green());
}

pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Report a failed command on stderr
pub fn error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

/// Colored ON/OFF badge for a toggle
pub fn on_off(enabled: bool) -> ColoredString {
    if enabled {
        "ON".green()
    } else {
        "OFF".yellow()
    }
}

/// Condensed UTF-8 table that wraps to the terminal width
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Human-readable file size
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = None;
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = Some(next);
    }

    match unit {
        Some(unit) => format!("{:.1} {}", value, unit),
        None => format!("{} bytes", bytes),
    }
}
