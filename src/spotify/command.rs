//! The closed set of requests understood by the local control server.

/// Ordered query parameters of a request.
pub type QueryParams = Vec<(&'static str, String)>;

/// A single request against the local control server.
///
/// Each variant maps to a fixed path, optional fixed query parameters and
/// whether the request needs the OAuth/CSRF token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    Pause,
    Resume,
    /// Start playback; with a Spotify URI, play that URI instead.
    Play { uri: Option<String> },
    CsrfToken,
    Version,
    /// Status of the player, read for the currently playing song.
    SongInfo,
    /// Any other path, authenticated and without parameters.
    Custom(String),
}

impl Command {
    pub fn path(&self) -> &str {
        match self {
            Command::Status | Command::SongInfo => "/remote/status.json",
            Command::Pause | Command::Resume => "/remote/pause.json",
            Command::Play { .. } => "/remote/play.json",
            Command::CsrfToken => "/simplecsrf/token.json",
            Command::Version => "/service/version.json",
            Command::Custom(path) => path,
        }
    }

    pub fn params(&self) -> QueryParams {
        match self {
            Command::Pause => vec![("pause", "true".to_string())],
            Command::Resume => vec![("pause", "false".to_string())],
            Command::Version => vec![("service", "remote".to_string())],
            Command::Play { uri: Some(uri) } => {
                vec![("uri", uri.clone()), ("context", uri.clone())]
            }
            _ => Vec::new(),
        }
    }

    pub fn requires_authentication(&self) -> bool {
        !matches!(self, Command::CsrfToken)
    }

    /// Name used for this command on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Play { .. } => "play",
            Command::CsrfToken => "csrf-token",
            Command::Version => "version",
            Command::SongInfo => "playing",
            Command::Custom(_) => "custom",
        }
    }
}
