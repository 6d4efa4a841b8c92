use wrapped_db::ResultTable;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Shown in place of a table with no rows.
pub const NO_ROWS: &str = "(no rows)";

/// Render a report result in the requested format.
///
/// JSON formats emit an array of row objects; an empty result is `[]`.
pub fn render(result: &ResultTable, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.to_records())?),
        OutputFormat::Raw => Ok(serde_json::to_string(&result.to_records())?),
        OutputFormat::Table if result.is_empty() => Ok(NO_ROWS.to_string()),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            Ok(table::render_result_table(
                result,
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.table_color,
                },
            ))
        }
    }
}

/// Print a report result in the requested format.
pub fn output(result: &ResultTable, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(result, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a titled report, or `empty_message` when it has no rows.
///
/// Titles and empty messages only accompany table output; JSON output stays
/// machine-readable.
pub fn output_titled(
    title: &str,
    result: &ResultTable,
    empty_message: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(result, format);
    }
    if result.is_empty()
        && let Some(message) = empty_message
    {
        println!("{message}");
        return Ok(());
    }
    println!("{title}");
    output(result, format)
}
