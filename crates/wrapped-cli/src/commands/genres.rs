use crate::bootstrap::AppReports;
use crate::cli::GlobalFlags;
use crate::output::output;

pub fn handle(reports: &AppReports, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&*reports.genres()?, flags.format)
}
