//! Plain-text table layout for report results.

use wrapped_core::timestamp::decode_play_ts;
use wrapped_db::{Cell, ResultTable};

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN_WIDTH: usize = 4;

const PLAYED_AT: &str = "played_at";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Lay out a result table with one line per row, columns in result order.
///
/// Integer and float cells are right-aligned; text is left-aligned. Play
/// timestamps in a `played_at` column are shown as date and time.
#[must_use]
pub fn render_result_table(table: &ResultTable, options: TableOptions) -> String {
    let cells: Vec<Vec<(String, bool)>> = table
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    row.get(index)
                        .map_or_else(|| ("-".to_string(), false), |cell| display(column, cell))
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(index, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(index))
                .map(|(text, _)| text.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    fit_widths(&mut widths, options.max_width);

    let header_line = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());
    let header_line = if options.color {
        format!("\u{1b}[1m{header_line}\u{1b}[0m")
    } else {
        header_line
    };

    let mut lines = Vec::with_capacity(2 + cells.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(cells.iter().map(|row| {
        row.iter()
            .zip(&widths)
            .map(|((text, numeric), width)| pad(&truncate_text(text, *width), *width, *numeric))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }));
    lines.join("\n")
}

/// Text of one cell and whether it aligns right.
fn display(column: &str, cell: &Cell) -> (String, bool) {
    if column == PLAYED_AT
        && let Cell::Int(play_ts) = cell
        && let Some(at) = decode_play_ts(*play_ts)
    {
        return (at.format("%Y-%m-%d %H:%M:%S").to_string(), false);
    }
    (cell.to_string(), matches!(cell, Cell::Int(_) | Cell::Float(_)))
}

/// Shrink the widest columns one character at a time until the line fits.
fn fit_widths(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|(idx, width)| (**width, std::cmp::Reverse(*idx)))
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}
