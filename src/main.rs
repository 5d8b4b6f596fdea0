use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotictl::{
    cli, config,
    spotify::{Command, Endpoints},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Show the player status
    Status,

    /// Pause playback
    Pause,

    /// Resume playback
    Resume,

    /// Start playback, optionally of a Spotify URI
    Play(PlayOptions),

    /// Show the song currently playing
    #[clap(alias = "song-info")]
    Playing,

    /// Show the version of the local control server
    Version,

    /// Fetch a CSRF token from the local control server
    CsrfToken,

    /// Send an authenticated request to an arbitrary path
    Custom(CustomOptions),

    /// Get shell completions
    Completions(CompletionsOption),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Spotify URI to play, e.g. spotify:track:4uLU6hMCjMI75M1A2tKUQC
    uri: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CustomOptions {
    /// Path on the local control server, e.g. /remote/open.json
    path: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

/// Prints usage and the valid command names.
///
/// Exits with code 0: a missing or unknown command is not treated as a
/// failure.
fn usage(message: &str) -> ! {
    let mut cmd = Cli::command();
    warning!("{}", message);
    println!("{}", cmd.render_usage());

    let names: Vec<&str> = cmd.get_subcommands().map(|s| s.get_name()).collect();
    println!("Valid commands: {}", names.join(", "));
    std::process::exit(0);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let Some(action) = cli.action else {
        usage("Please provide a command.");
    };

    let overrides = match config::load().await {
        Ok(overrides) => overrides,
        Err(e) => {
            warning!("Ignoring config file. Err: {}", e);
            config::Overrides::default()
        }
    };
    let endpoints = Endpoints::from_overrides(&overrides);

    match action {
        Action::Status => cli::control(endpoints, Command::Status).await,
        Action::Pause => cli::control(endpoints, Command::Pause).await,
        Action::Resume => cli::control(endpoints, Command::Resume).await,
        Action::Play(opt) => cli::control(endpoints, Command::Play { uri: opt.uri }).await,
        Action::Playing => cli::playing(endpoints).await,
        Action::Version => cli::control(endpoints, Command::Version).await,
        Action::CsrfToken => cli::control(endpoints, Command::CsrfToken).await,
        Action::Custom(opt) => cli::control(endpoints, Command::Custom(opt.path)).await,
        Action::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        Action::Unknown(args) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            usage(&format!("Please provide a valid command, got '{}'.", name))
        }
    }
}
