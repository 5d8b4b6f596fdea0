//! # SpotiLocal Integration Module
//!
//! Client for the undocumented HTTP control server that the Spotify desktop
//! application exposes on loopback. The server listens on a fixed port and
//! is reached through a wildcard domain (`*.spotilocal.com`) resolving to
//! `127.0.0.1`.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! SpotifyRepository (orchestrator, owns the token status)
//!     ├── auth      OAuth + CSRF handshake, both fetched concurrently
//!     ├── command   fixed path / parameters / auth flag per request
//!     └── endpoints random local hostname + port + path + query
//!     ↓
//! Executor (reqwest GET with Origin / User-Agent headers)
//!     ↓
//! Spotify desktop client
//! ```
//!
//! ## Authentication
//!
//! Every command except `csrf-token` needs two tokens:
//!
//! 1. **OAuth token**: field `t` of `GET http://open.spotify.com/token`
//! 2. **CSRF token**: field `token` of `GET /simplecsrf/token.json` on the
//!    local server
//!
//! Both requests run at the same time and the repository waits for both.
//! The pair is appended as `oauth=..&csrf=..` after the command's own
//! query parameters and kept in memory for the rest of the process.
//!
//! ## Errors
//!
//! All operations return [`SpotifyError`]:
//! - **Transport**: reqwest failure, kept verbatim
//! - **NoData**: empty response body
//! - **Serialization**: body is not JSON or misses a token field
//! - **Url**: a configured endpoint does not form a valid URL
//!
//! Nothing is retried.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let executor = HttpExecutor::new();
//! let mut repository = SpotifyRepository::new(executor, Endpoints::default());
//! let body = repository.execute(&Command::Pause).await?;
//! ```

pub mod auth;
pub mod command;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod repository;

pub use command::Command;
pub use endpoints::Endpoints;
pub use error::SpotifyError;
pub use executor::{Executor, HttpExecutor};
pub use repository::SpotifyRepository;
