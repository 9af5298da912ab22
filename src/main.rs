use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bpmlist::{cli, config, error, warning};

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
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Handle playlists
    Playlists(PlaylistsOptions),

    /// Handle the local track catalog
    Tracks(TracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Handle playlists")]
pub struct PlaylistsOptions {
    /// Subcommands under `playlists`; lists own playlists when omitted
    #[command(subcommand)]
    pub command: Option<PlaylistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistsSubcommand {
    /// Create an empty playlist
    Create {
        #[clap(long)]
        name: String,
        #[clap(long)]
        desc: Option<String>,
    },

    /// Show the tracks of a playlist
    Show { playlist_id: String },

    /// Change name and description
    Rename {
        playlist_id: String,
        #[clap(long)]
        name: String,
        #[clap(long)]
        desc: Option<String>,
    },

    /// Delete a playlist
    Delete { playlist_id: String },

    /// Append a catalog track
    Add {
        playlist_id: String,
        spotify_id: String,
    },

    /// Remove a playlist entry by its id
    Remove {
        playlist_id: String,
        playlist_track_id: String,
    },

    /// Move the track at one position to another
    Move {
        playlist_id: String,
        #[clap(long)]
        from: usize,
        #[clap(long)]
        to: usize,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle the local track catalog",
    args_conflicts_with_subcommands = true // disallow mixing --search with subcommands
)]
pub struct TracksOptions {
    /// Search tracks by song, artist or album
    #[clap(long)]
    pub search: Option<String>,

    /// Subcommands under `tracks` (e.g., `import`)
    #[command(subcommand)]
    pub command: Option<TracksSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TracksSubcommand {
    /// Merge a JSON array of tracks into the catalog
    Import { file: PathBuf },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    if let Err(e) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(config::log_filter()))
        .try_init()
    {
        error!("Cannot initialise logging. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Playlists(opt) => match opt.command {
            None => cli::list_playlists().await,
            Some(PlaylistsSubcommand::Create { name, desc }) => {
                cli::create_playlist(name, desc).await
            }
            Some(PlaylistsSubcommand::Show { playlist_id }) => cli::show_playlist(playlist_id).await,
            Some(PlaylistsSubcommand::Rename {
                playlist_id,
                name,
                desc,
            }) => cli::rename_playlist(playlist_id, name, desc).await,
            Some(PlaylistsSubcommand::Delete { playlist_id }) => {
                cli::delete_playlist(playlist_id).await
            }
            Some(PlaylistsSubcommand::Add {
                playlist_id,
                spotify_id,
            }) => cli::add_track(playlist_id, spotify_id).await,
            Some(PlaylistsSubcommand::Remove {
                playlist_id,
                playlist_track_id,
            }) => cli::remove_track(playlist_id, playlist_track_id).await,
            Some(PlaylistsSubcommand::Move {
                playlist_id,
                from,
                to,
            }) => cli::move_track(playlist_id, from, to).await,
        },

        Command::Tracks(opt) => match opt.command {
            Some(TracksSubcommand::Import { file }) => cli::import_tracks(file).await,
            None => cli::list_tracks(opt.search).await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
