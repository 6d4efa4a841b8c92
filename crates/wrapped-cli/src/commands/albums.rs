use crate::bootstrap::AppReports;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AlbumCommands;
use crate::messages::{NO_ALBUMS, featured_albums_title};
use crate::output::output_titled;

pub fn handle(action: &AlbumCommands, reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AlbumCommands::Featured(args) => {
            let result = reports.albums_most_featured_in_libraries(args.year, &args.genre)?;
            output_titled(
                &featured_albums_title(&args.genre, args.year),
                &result,
                Some(NO_ALBUMS),
                flags.format,
            )
        }
    }
}
