use crate::{
    error, info,
    spotify::{Command, Endpoints},
    success,
    types::PlayerStatus,
    utils, warning,
};

use super::control;

/// Shows the song currently loaded in the desktop client.
///
/// Reads `/remote/status.json` and prints artist, title and album along
/// with the play state and position. When the status carries no track
/// (nothing loaded, or an error body from the client) the raw body is
/// printed instead.
pub async fn playing(endpoints: Endpoints) {
    let body = match control::run(endpoints, &Command::SongInfo).await {
        Ok(body) => body,
        Err(e) => error!("Cannot read player status: {}", e),
    };

    let status = serde_json::from_slice::<PlayerStatus>(&body).unwrap_or_default();
    match status.summary() {
        Some(summary) => {
            let state = if status.playing { "Playing" } else { "Paused" };
            success!("{}: {}", state, summary);

            let length = status.track.as_ref().and_then(|t| t.length);
            if let (Some(position), Some(length)) = (status.playing_position, length) {
                info!(
                    "Position: {} / {}",
                    utils::format_duration(position),
                    utils::format_duration(length as f64)
                );
            }
            if let Some(uri) = status.track_uri() {
                info!("URI: {}", uri);
            }
        }
        None => {
            warning!("No track information in player status.");
            println!("{}", utils::render_body(&body));
        }
    }

    std::process::exit(0);
}
