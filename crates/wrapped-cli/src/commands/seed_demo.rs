use std::path::Path;

use anyhow::Context;
use wrapped_db::DuckDbExecutor;

/// Create a local database file holding the sample store.
pub fn handle(path: &Path, quiet: bool) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists; remove it or choose another path", path.display());
    }
    let target = path.to_string_lossy();
    let executor = DuckDbExecutor::open_local(&target)
        .with_context(|| format!("failed to create {}", path.display()))?;
    wrapped_db::demo::install(executor.conn())?;

    if !quiet {
        println!("sample store written to {}", path.display());
        println!("browse it with: wrapped --database {} dashboard", path.display());
    }
    Ok(())
}
