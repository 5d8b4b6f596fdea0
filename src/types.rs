use serde::{Deserialize, Serialize};

/// OAuth and CSRF tokens authorizing calls to the local control server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub oauth: String,
    pub csrf: String,
}

/// Body of the public token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OauthTokenResponse {
    pub t: String,
}

/// Body of `/simplecsrf/token.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfTokenResponse {
    pub token: String,
}

/// The parts of `/remote/status.json` needed to describe the current song.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStatus {
    #[serde(default)]
    pub playing: bool,
    #[serde(default)]
    pub playing_position: Option<f64>,
    #[serde(default)]
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub track_resource: Option<Resource>,
    #[serde(default)]
    pub artist_resource: Option<Resource>,
    #[serde(default)]
    pub album_resource: Option<Resource>,
    #[serde(default)]
    pub length: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl PlayerStatus {
    /// `Artist - Title (Album)` of the loaded track, if there is one.
    pub fn summary(&self) -> Option<String> {
        let track = self.track.as_ref()?;
        let title = resource_name(&track.track_resource)?;
        let artist = resource_name(&track.artist_resource).unwrap_or("Unknown artist");

        Some(match resource_name(&track.album_resource) {
            Some(album) => format!("{} - {} ({})", artist, title, album),
            None => format!("{} - {}", artist, title),
        })
    }

    pub fn track_uri(&self) -> Option<&str> {
        self.track
            .as_ref()?
            .track_resource
            .as_ref()?
            .uri
            .as_deref()
    }
}

fn resource_name(resource: &Option<Resource>) -> Option<&str> {
    resource.as_ref()?.name.as_deref().filter(|n| !n.is_empty())
}
