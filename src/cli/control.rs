use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    spotify::{Command, Endpoints, HttpExecutor, SpotifyError, SpotifyRepository},
    utils,
};

/// Runs `command` and prints the response body, then exits.
///
/// JSON bodies are pretty-printed, anything else is printed as text. The
/// process exits with `0` once the body is printed and with `1` if the
/// command fails.
pub async fn control(endpoints: Endpoints, command: Command) {
    match run(endpoints, &command).await {
        Ok(body) => {
            println!("{}", utils::render_body(&body));
            std::process::exit(0);
        }
        Err(e) => error!("Command {} failed: {}", command.name(), e),
    }
}

/// Executes `command` against `endpoints` while a spinner is shown.
pub(crate) async fn run(endpoints: Endpoints, command: &Command) -> Result<Vec<u8>, SpotifyError> {
    let mut repository = SpotifyRepository::new(HttpExecutor::new(), endpoints);

    let pb = spinner(format!("Sending {} to Spotify...", command.name()));
    let result = repository.execute(command).await;
    pb.finish_and_clear();

    result
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
