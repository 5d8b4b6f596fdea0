//! Configuration for spotictl.
//!
//! The client works out of the box against the desktop application's local
//! control server. An optional `.env`-style file in the local data directory
//! can point it at another endpoint, which is mostly useful for a
//! non-standard port or a local stand-in server:
//!
//! - Linux: `~/.local/share/spotictl/.env`
//! - macOS: `~/Library/Application Support/spotictl/.env`
//! - Windows: `%LOCALAPPDATA%/spotictl/.env`
//!
//! The file is only read, never created. The process environment is not
//! consulted, and the `Origin` / `User-Agent` headers are not configurable.

use std::path::PathBuf;

/// Parent domain whose wildcard DNS record resolves to loopback.
pub const DEFAULT_SPOTILOCAL_DOMAIN: &str = "spotilocal.com";

/// Port the desktop client binds its control server to.
pub const DEFAULT_SPOTILOCAL_PORT: u16 = 4381;

/// Public endpoint handing out the OAuth token (`{"t": "..."}`).
pub const DEFAULT_OAUTH_URL: &str = "http://open.spotify.com/token";

/// `Origin` header the local server expects from the web player.
pub const SPOTIFY_ORIGIN: &str = "https://open.spotify.com";

/// Desktop browser `User-Agent` accepted by the local server.
pub const SPOTIFY_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/53.0.2785.148 Safari/537.36 Vivaldi/1.4.589.38";

/// Endpoint overrides read from the config file.
///
/// Unset values keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `SPOTILOCAL_DOMAIN`
    pub spotilocal_domain: Option<String>,
    /// `SPOTILOCAL_PORT`
    pub spotilocal_port: Option<u16>,
    /// `SPOTIFY_OAUTH_URL`
    pub spotify_oauth_url: Option<String>,
}

impl Overrides {
    /// Parses `.env` syntax. Unknown keys and empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error string for malformed lines or a port that is not a
    /// number.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut overrides = Overrides::default();

        for item in dotenv::from_read_iter(content.as_bytes()) {
            let (key, value) = item.map_err(|e| e.to_string())?;
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                "SPOTILOCAL_DOMAIN" => overrides.spotilocal_domain = Some(value.to_string()),
                "SPOTILOCAL_PORT" => {
                    let port = value
                        .parse()
                        .map_err(|_| format!("SPOTILOCAL_PORT is not a port number: {}", value))?;
                    overrides.spotilocal_port = Some(port);
                }
                "SPOTIFY_OAUTH_URL" => overrides.spotify_oauth_url = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(overrides)
    }
}

/// Reads the config file from the local data directory.
///
/// A missing file yields the defaults. Nothing is written.
///
/// # Errors
///
/// Returns an error string if an existing file cannot be read or parsed.
pub async fn load() -> Result<Overrides, String> {
    let Some(path) = config_path() else {
        return Ok(Overrides::default());
    };
    if !path.is_file() {
        return Ok(Overrides::default());
    }

    let content = async_fs::read_to_string(&path)
        .await
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    Overrides::parse(&content).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the config file, if the platform has a local data directory.
pub fn config_path() -> Option<PathBuf> {
    let mut path = dirs::data_local_dir()?;
    path.push("spotictl/.env");
    Some(path)
}
