//! Terminal output helpers.

use colored::Colorize;

use jex_core::{StatusObserver, StatusUpdate};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Streams crawl progress to stderr as it arrives.
///
/// Progress lines are dimmed; the terminal updates get the same ✓/✗
/// marks as the rest of the CLI output.
pub struct ConsoleObserver;

impl StatusObserver for ConsoleObserver {
    fn on_status(&self, update: StatusUpdate) {
        if update.error {
            error(&update.text);
        } else if update.done {
            eprintln!("{} {}", "✓".green(), update.text);
        } else {
            eprintln!("{}", update.text.dimmed());
        }
    }
}
