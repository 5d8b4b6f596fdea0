//! # CLI Module
//!
//! User-facing commands of spotictl. Each function runs one request chain
//! against the desktop client's local control server, prints the outcome
//! and terminates the process.
//!
//! ## Commands
//!
//! - [`control`] - Runs any [`crate::spotify::Command`] and prints the
//!   response body (pretty JSON when possible, raw text otherwise)
//! - [`playing`] - Reads the player status and prints the current song
//!
//! ## Exit Codes
//!
//! - `0` - the body was printed
//! - `1` - the request chain failed; the error is printed with `error!`
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotictl pause
//! spotictl resume
//! spotictl playing
//! spotictl play spotify:track:4uLU6hMCjMI75M1A2tKUQC
//! spotictl custom /remote/open.json
//! ```

mod control;
mod playing;

pub use control::control;
pub use playing::playing;
