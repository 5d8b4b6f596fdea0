use std::{error::Error, fmt};

/// Failure of a request chain against the local control server.
#[derive(Debug)]
pub enum SpotifyError {
    /// The HTTP layer failed; the underlying error is kept verbatim.
    Transport(Box<dyn Error + Send + Sync>),
    /// The request completed but returned an empty body.
    NoData,
    /// The body was not JSON or lacked an expected field.
    Serialization(serde_json::Error),
    /// An endpoint could not be turned into a URL.
    Url(url::ParseError),
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Transport(e) => write!(f, "transport error: {}", e),
            SpotifyError::NoData => write!(f, "no data received"),
            SpotifyError::Serialization(e) => write!(f, "serialization error: {}", e),
            SpotifyError::Url(e) => write!(f, "invalid url: {}", e),
        }
    }
}

impl Error for SpotifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SpotifyError::Transport(e) => Some(e.as_ref()),
            SpotifyError::NoData => None,
            SpotifyError::Serialization(e) => Some(e),
            SpotifyError::Url(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for SpotifyError {
    fn from(err: serde_json::Error) -> Self {
        SpotifyError::Serialization(err)
    }
}

impl From<url::ParseError> for SpotifyError {
    fn from(err: url::ParseError) -> Self {
        SpotifyError::Url(err)
    }
}
