use crate::bootstrap::AppReports;
use crate::dashboard::{Dashboard, TerminalSurface};

/// Run the interactive dashboard on the process terminal.
pub fn handle(reports: &AppReports) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let surface = TerminalSurface::new(stdin.lock(), stdout.lock());
    Dashboard::new(reports, surface).run()
}
