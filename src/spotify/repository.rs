use url::Url;

use crate::{
    management::{AuthStatus, TokenManager},
    types::TokenPair,
};

use super::{Command, Endpoints, Executor, SpotifyError, auth};

/// Entry point for running commands against the local control server.
///
/// Authenticated commands trigger the token handshake on first use; the
/// pair is then reused for every later command of this repository.
pub struct SpotifyRepository<E: Executor> {
    executor: E,
    endpoints: Endpoints,
    tokens: TokenManager,
}

impl<E: Executor> SpotifyRepository<E> {
    pub fn new(executor: E, endpoints: Endpoints) -> Self {
        SpotifyRepository {
            executor,
            endpoints,
            tokens: TokenManager::new(),
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn auth_status(&self) -> &AuthStatus {
        self.tokens.status()
    }

    /// Runs `command` and resolves with the raw response body.
    ///
    /// No authenticated request leaves before both tokens are known. A
    /// failed handshake leaves the status uninitialized, so the next call
    /// starts over.
    pub async fn execute(&mut self, command: &Command) -> Result<Vec<u8>, SpotifyError> {
        if !command.requires_authentication() {
            return dispatch(&self.executor, &self.endpoints, command, None).await;
        }

        let tokens = self.ensure_tokens().await?;
        dispatch(&self.executor, &self.endpoints, command, Some(&tokens)).await
    }

    async fn ensure_tokens(&mut self) -> Result<TokenPair, SpotifyError> {
        if let Some(tokens) = self.tokens.current() {
            return Ok(tokens.clone());
        }

        let tokens = auth::fetch_tokens(&self.executor, &self.endpoints).await?;
        self.tokens.store(tokens.clone());
        Ok(tokens)
    }
}

/// URL for `command`; with `tokens`, `oauth` and `csrf` follow the
/// command's own parameters.
pub fn command_url(
    endpoints: &Endpoints,
    command: &Command,
    tokens: Option<&TokenPair>,
) -> Result<Url, SpotifyError> {
    let mut params = command.params();
    if let Some(tokens) = tokens {
        params.push(("oauth", tokens.oauth.clone()));
        params.push(("csrf", tokens.csrf.clone()));
    }

    endpoints.local_url(command.path(), &params)
}

pub(crate) async fn dispatch<E: Executor>(
    executor: &E,
    endpoints: &Endpoints,
    command: &Command,
    tokens: Option<&TokenPair>,
) -> Result<Vec<u8>, SpotifyError> {
    let url = command_url(endpoints, command, tokens)?;
    executor.get(url).await
}
