//! Music Advisor Library
//!
//! An interactive client for the browse endpoints of the Spotify Web API.
//! After an OAuth 2.0 authorization-code handshake the user pages through
//! featured playlists, new releases, categories and the playlists of a
//! category, a few items at a time.
//!
//! # Modules
//!
//! - `api` - HTTP endpoint of the local redirect listener
//! - `cli` - the interactive command loop
//! - `config` - configuration management and environment variables
//! - `error` - error types
//! - `logging` - tracing setup
//! - `management` - browsing session, caches and page cursor
//! - `render` - output of listings
//! - `server` - local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client, request builders and parsers
//! - `types` - data structures and type definitions
//! - `utils` - utility functions and helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod management;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used where the exact error does not matter to the caller, e.g. the
/// command loop, which only fails when stdin does.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("waiting for code...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("code received");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for startup failures the session cannot run without, such as
/// missing client credentials. Command failures are reported with
/// [`warning!`] and the loop goes on.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// This is how every failed command is reported to the user.
///
/// # Example
///
/// ```
/// warning!("No more pages.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
