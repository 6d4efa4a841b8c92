use wrapped_core::SongKey;
use wrapped_db::SongSpotlight;

use crate::bootstrap::AppReports;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SongArgs, SongsArgs};
use crate::output::{output, output_titled};

pub fn handle_list(args: &SongsArgs, reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    let songs = reports.songs(args.most_played)?;
    output(&songs, flags.format)
}

pub fn handle_spotlight(
    args: &SongArgs,
    reports: &AppReports,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let song = SongKey::new(args.name.clone(), args.release);
    let spotlight = SongSpotlight::from(args.view);
    let title = format!("Spotlight | {song} | {}", spotlight.title(&song));
    let result = reports.run(&spotlight.request(song))?;
    output_titled(&title, &result, None, flags.format)
}
