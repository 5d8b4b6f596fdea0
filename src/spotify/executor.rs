use reqwest::{
    Client,
    header::{ORIGIN, USER_AGENT},
};
use url::Url;

use crate::config;

use super::SpotifyError;

/// Issues a single GET request and resolves with the raw response body.
pub trait Executor {
    fn get(&self, url: Url) -> impl Future<Output = Result<Vec<u8>, SpotifyError>> + Send;
}

/// [`Executor`] backed by reqwest.
///
/// Every request carries the `Origin` and `User-Agent` headers the local
/// server checks before it answers cross-origin calls. There are no retries
/// and no timeouts beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
    origin: String,
    user_agent: String,
}

impl HttpExecutor {
    /// Executor sending the fixed web player `Origin` and `User-Agent`.
    pub fn new() -> Self {
        Self::with_client(Client::new(), config::SPOTIFY_ORIGIN, config::SPOTIFY_USER_AGENT)
    }

    pub fn with_client(
        client: Client,
        origin: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        HttpExecutor {
            client,
            origin: origin.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for HttpExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for HttpExecutor {
    async fn get(&self, url: Url) -> Result<Vec<u8>, SpotifyError> {
        let response = self
            .client
            .get(url)
            .header(ORIGIN, &self.origin)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(SpotifyError::NoData);
        }

        Ok(body.to_vec())
    }
}
