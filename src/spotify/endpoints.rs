use url::Url;

use crate::{config, utils};

use super::SpotifyError;

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Wildcard parent domain of the local control server.
    pub local_domain: String,
    pub local_port: u16,
    /// Public endpoint handing out the OAuth token.
    pub oauth_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            local_domain: config::DEFAULT_SPOTILOCAL_DOMAIN.to_string(),
            local_port: config::DEFAULT_SPOTILOCAL_PORT,
            oauth_url: config::DEFAULT_OAUTH_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Defaults with the values set in `overrides` applied.
    pub fn from_overrides(overrides: &config::Overrides) -> Self {
        let defaults = Endpoints::default();
        Endpoints {
            local_domain: overrides
                .spotilocal_domain
                .clone()
                .unwrap_or(defaults.local_domain),
            local_port: overrides.spotilocal_port.unwrap_or(defaults.local_port),
            oauth_url: overrides
                .spotify_oauth_url
                .clone()
                .unwrap_or(defaults.oauth_url),
        }
    }

    /// URL on the local control server, under a fresh random hostname.
    pub fn local_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, SpotifyError> {
        let host = utils::random_local_hostname(&self.local_domain);
        build_url(&host, self.local_port, path, params)
    }

    pub fn oauth_url(&self) -> Result<Url, SpotifyError> {
        Ok(Url::parse(&self.oauth_url)?)
    }
}

/// Builds `http://{host}:{port}{path}?{params}`.
///
/// Parameters keep their order. No `?` is appended when there are none.
pub fn build_url(
    host: &str,
    port: u16,
    path: &str,
    params: &[(&str, String)],
) -> Result<Url, SpotifyError> {
    let mut url = Url::parse(&format!("http://{}:{}", host, port))?;
    url.set_path(path);
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())));
    }
    Ok(url)
}
