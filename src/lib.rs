//! bpmlist library
//!
//! Keeps personal playlists of songs picked by tempo and mood. The heart of
//! the crate is the [`playlist`] aggregate, an immutable value whose
//! operations add, remove and reorder tracks while keeping positions
//! contiguous and the cover image in sync with the first track.
//!
//! # Modules
//!
//! - `catalog` - Track lookup seam used before adding tracks
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration from environment variables and `.env`
//! - `management` - Local JSON stores and owner-checked playlist edits
//! - `playlist` - The playlist aggregate
//! - `types` - Track value object and table rows
//! - `utils` - Utility functions and helpers

pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod playlist;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with status 1. Only for failures the command cannot recover from.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
