use clap::{Parser, Subcommand};
use lastfm_info::clients::{LastFmClient, errors::Result};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "lastfm-info")]
#[command(version, about = "Fetch artist and track info from Last.fm", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show artist.getInfo for an artist
    Artist {
        name: String,
        /// Biography language (not sent yet)
        #[arg(long)]
        lang: Option<String>,
        /// Last.fm username (not sent yet)
        #[arg(long)]
        username: Option<String>,
    },
    /// Show track.getInfo for a track
    Track {
        track: String,
        artist: String,
        /// Last.fm username (not sent yet)
        #[arg(long)]
        username: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let lastfm = LastFmClient::try_default()?;

    match &cli.command {
        Commands::Artist {
            name,
            lang,
            username,
        } => {
            info!("Fetching artist info for {name} ...");
            let artist = lastfm
                .artist_info_by_name(name, lang.as_deref(), username.as_deref())
                .await?;
            print_json(&artist)?;
        }
        Commands::Track {
            track,
            artist,
            username,
        } => {
            info!("Fetching track info for {artist} - {track} ...");
            let track = lastfm
                .track_info_by_name(track, artist, username.as_deref())
                .await?;
            print_json(&track)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
