use std::path::PathBuf;

use clap::Subcommand;

use super::subcommands::{
    AlbumCommands, ArtistCommands, BandsArgs, SongArgs, SongsArgs, UserArgs, UsersArgs,
};

/// Top-level subcommands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Interactive statistics browser
    Dashboard,
    /// List users, optionally the most active ones
    Users(UsersArgs),
    /// One user's spotlight report
    User(UserArgs),
    /// List songs, optionally the most played ones
    Songs(SongsArgs),
    /// One song's spotlight report
    Song(SongArgs),
    /// Artist release and membership reports
    Artists {
        #[command(subcommand)]
        action: ArtistCommands,
    },
    /// List bands, or the bands behind a genre's hits
    Bands(BandsArgs),
    /// Album reports
    Albums {
        #[command(subcommand)]
        action: AlbumCommands,
    },
    /// List the distinct song genres
    Genres,
    /// Create a local DuckDB file filled with a small sample store
    SeedDemo {
        /// Database file to create
        #[arg(default_value = "wrapped-demo.duckdb")]
        path: PathBuf,
    },
}
