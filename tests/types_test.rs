use spotictl::management::{AuthStatus, TokenManager};
use spotictl::types::{CsrfTokenResponse, OauthTokenResponse, PlayerStatus, TokenPair};

// Trimmed `/remote/status.json` body as returned by the desktop client
const STATUS_JSON: &str = r#"{
    "version": 9,
    "client_version": "1.0.64.407.g9bd02c2d",
    "playing": true,
    "shuffle": false,
    "repeat": false,
    "play_enabled": true,
    "prev_enabled": true,
    "next_enabled": true,
    "track": {
        "track_resource": {
            "name": "Paranoid Android",
            "uri": "spotify:track:6LgJvl0Xdtc73RJ1mmpotq"
        },
        "artist_resource": { "name": "Radiohead", "uri": "spotify:artist:4Z8W4fKeB5YxbusRsdQVPb" },
        "album_resource": { "name": "OK Computer", "uri": "spotify:album:6dVIqQ8qmQ5GBnJ9shOYGE" },
        "length": 387,
        "track_type": "normal"
    },
    "playing_position": 42.17,
    "server_time": 1507050000,
    "volume": 1,
    "online": true,
    "running": true
}"#;

fn pair(oauth: &str, csrf: &str) -> TokenPair {
    TokenPair {
        oauth: oauth.to_string(),
        csrf: csrf.to_string(),
    }
}

#[test]
fn test_token_responses() {
    let oauth: OauthTokenResponse = serde_json::from_str(r#"{"t":"ABC"}"#).unwrap();
    assert_eq!(oauth.t, "ABC");

    let csrf: CsrfTokenResponse = serde_json::from_str(r#"{"token":"XYZ"}"#).unwrap();
    assert_eq!(csrf.token, "XYZ");

    assert!(serde_json::from_str::<OauthTokenResponse>(r#"{"token":"XYZ"}"#).is_err());
    assert!(serde_json::from_str::<CsrfTokenResponse>(r#"{"token":null}"#).is_err());
}

#[test]
fn test_player_status_summary() {
    let status: PlayerStatus = serde_json::from_str(STATUS_JSON).unwrap();

    assert!(status.playing);
    assert_eq!(status.playing_position, Some(42.17));
    assert_eq!(
        status.summary().as_deref(),
        Some("Radiohead - Paranoid Android (OK Computer)")
    );
    assert_eq!(
        status.track_uri(),
        Some("spotify:track:6LgJvl0Xdtc73RJ1mmpotq")
    );
}

#[test]
fn test_player_status_without_track() {
    let status: PlayerStatus =
        serde_json::from_str(r#"{"version":9,"playing":false,"running":true}"#).unwrap();

    assert!(!status.playing);
    assert_eq!(status.summary(), None);
    assert_eq!(status.track_uri(), None);
}

#[test]
fn test_player_status_partial_track() {
    let status: PlayerStatus = serde_json::from_str(
        r#"{"playing":true,"track":{"track_resource":{"name":"Intro"},"album_resource":{"name":""}}}"#,
    )
    .unwrap();

    assert_eq!(status.summary().as_deref(), Some("Unknown artist - Intro"));
}

#[test]
fn test_token_manager_starts_uninitialized() {
    let manager = TokenManager::new();

    assert_eq!(manager.status(), &AuthStatus::Uninitialized);
    assert!(manager.current().is_none());
}

#[test]
fn test_token_manager_keeps_first_pair() {
    let mut manager = TokenManager::new();

    assert!(manager.store(pair("ABC", "XYZ")));
    assert!(!manager.store(pair("other", "other")));
    assert_eq!(manager.current(), Some(&pair("ABC", "XYZ")));
    assert_eq!(manager.status(), &AuthStatus::Ready(pair("ABC", "XYZ")));
}
