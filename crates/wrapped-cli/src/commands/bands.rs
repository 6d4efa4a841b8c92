use crate::bootstrap::AppReports;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{BandCommands, BandsArgs};
use crate::messages::{NO_BANDS, band_hits_title};
use crate::output::{output, output_titled};

pub fn handle(args: &BandsArgs, reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &args.action {
        None => output(&*reports.bands(args.most_albums)?, flags.format),
        Some(BandCommands::Hits(hits)) => {
            let result = reports.bands_with_most_song_plays(hits.year, &hits.genre)?;
            output_titled(
                &band_hits_title(&hits.genre, hits.year),
                &result,
                Some(NO_BANDS),
                flags.format,
            )
        }
    }
}
