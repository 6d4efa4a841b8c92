use crate::bootstrap::AppReports;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(reports),
        Commands::Users(args) => commands::users::handle_list(&args, reports, flags),
        Commands::User(args) => commands::users::handle_spotlight(&args, reports, flags),
        Commands::Songs(args) => commands::songs::handle_list(&args, reports, flags),
        Commands::Song(args) => commands::songs::handle_spotlight(&args, reports, flags),
        Commands::Artists { action } => commands::artists::handle(&action, reports, flags),
        Commands::Bands(args) => commands::bands::handle(&args, reports, flags),
        Commands::Albums { action } => commands::albums::handle(&action, reports, flags),
        Commands::Genres => commands::genres::handle(reports, flags),
        Commands::SeedDemo { .. } => {
            unreachable!("seed-demo is pre-dispatched in main")
        }
    }
}
