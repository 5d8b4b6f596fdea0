use crate::types::{CsrfTokenResponse, OauthTokenResponse, TokenPair};

use super::{Command, Endpoints, Executor, SpotifyError, repository};

/// Fetches the OAuth token from the public token endpoint (field `t`).
pub async fn fetch_oauth_token<E: Executor>(
    executor: &E,
    endpoints: &Endpoints,
) -> Result<String, SpotifyError> {
    let body = executor.get(endpoints.oauth_url()?).await?;
    let response: OauthTokenResponse = serde_json::from_slice(&body)?;
    Ok(response.t)
}

/// Fetches the CSRF token from the local server (field `token`).
pub async fn fetch_csrf_token<E: Executor>(
    executor: &E,
    endpoints: &Endpoints,
) -> Result<String, SpotifyError> {
    let body = repository::dispatch(executor, endpoints, &Command::CsrfToken, None).await?;
    let response: CsrfTokenResponse = serde_json::from_slice(&body)?;
    Ok(response.token)
}

/// Runs both token fetches concurrently and waits for both of them.
///
/// Neither fetch is cancelled when the other fails. The handshake only
/// succeeds when both do; otherwise the OAuth error is reported first.
pub async fn fetch_tokens<E: Executor>(
    executor: &E,
    endpoints: &Endpoints,
) -> Result<TokenPair, SpotifyError> {
    let (oauth, csrf) = tokio::join!(
        fetch_oauth_token(executor, endpoints),
        fetch_csrf_token(executor, endpoints)
    );

    Ok(TokenPair {
        oauth: oauth?,
        csrf: csrf?,
    })
}
