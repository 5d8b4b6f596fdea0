//! spotictl library
//!
//! Remote control for the Spotify desktop application through its local
//! HTTP control server ("SpotiLocal"). The library builds the requests,
//! performs the OAuth/CSRF token handshake and dispatches playback commands;
//! the binary maps command-line arguments onto it.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration defaults and `.env` overrides
//! - `management` - In-memory token status
//! - `spotify` - Local control server client
//! - `types` - Token pair and response bodies
//! - `utils` - Random hostnames and output helpers
//!
//! # Example
//!
//! ```
//! use spotictl::spotify::{Command, Endpoints, HttpExecutor, SpotifyRepository};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut repository =
//!         SpotifyRepository::new(HttpExecutor::new(), Endpoints::default());
//!     let body = repository.execute(&Command::Status).await;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints a status line with a blue `o` marker.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Position: {}", position);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line with a green `✓` marker.
///
/// ```
/// success!("Playing: {}", summary);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line with a red `!` marker and exits the process with code 1.
///
/// Used for failed request chains; the expression never returns, so it can
/// stand in any `match` arm.
///
/// ```
/// let body = match result {
///     Ok(body) => body,
///     Err(e) => error!("Command failed: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a line with a yellow `!` marker.
///
/// ```
/// warning!("Please provide a valid command");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
