use wrapped_core::YearRange;

use crate::bootstrap::AppReports;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ArtistCommands, ReleasesArgs};
use crate::messages::{ALBUM_RELEASES, ARTISTS_IN_BANDS, NO_ARTISTS, SONG_RELEASES};
use crate::output::output_titled;

pub fn handle(action: &ArtistCommands, reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ArtistCommands::Releases(args) => handle_releases(args, reports, flags),
        ArtistCommands::InBands => {
            output_titled(ARTISTS_IN_BANDS, &*reports.artists_in_bands()?, None, flags.format)
        }
    }
}

fn handle_releases(args: &ReleasesArgs, reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Rejected before any query runs.
    let years = YearRange::new(args.from, args.to)?;
    let award = args.award.filter();

    let (title, result) = if args.albums {
        (ALBUM_RELEASES, reports.artists_with_most_album_releases(years, award)?)
    } else {
        (SONG_RELEASES, reports.artists_with_most_song_releases(years, award)?)
    };
    output_titled(title, &result, Some(NO_ARTISTS), flags.format)
}
