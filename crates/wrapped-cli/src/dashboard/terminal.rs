use std::io::{BufRead, Write};

use wrapped_db::ResultTable;

use super::Surface;
use crate::output::{NO_ROWS, table};
use crate::ui;

/// Line-oriented [`Surface`] over a reader and a writer.
///
/// Choices are numbered from 1. An empty line, `q` or end of input backs out.
pub struct TerminalSurface<R, W> {
    input: R,
    output: W,
    options: table::TableOptions,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        let prefs = ui::prefs();
        Self::with_options(
            input,
            output,
            table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            },
        )
    }

    pub const fn with_options(input: R, output: W, options: table::TableOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_answer(&mut self) -> anyhow::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Surface for TerminalSurface<R, W> {
    fn choose(&mut self, prompt: &str, options: &[String]) -> anyhow::Result<Option<usize>> {
        writeln!(self.output, "{prompt}")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {option}", index + 1)?;
        }

        loop {
            write!(self.output, "> ")?;
            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(
                    self.output,
                    "enter a number between 1 and {}, or q to go back",
                    options.len()
                )?,
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        write!(self.output, "{prompt}? [y/N] ")?;
        let answer = self.read_answer()?.unwrap_or_default();
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn table(&mut self, title: &str, result: &ResultTable) -> anyhow::Result<()> {
        writeln!(self.output, "\n{title}")?;
        if result.is_empty() {
            writeln!(self.output, "{NO_ROWS}\n")?;
        } else {
            let rendered = table::render_result_table(result, self.options);
            writeln!(self.output, "{rendered}\n")?;
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn error(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "error: {text}")?;
        Ok(())
    }

    fn validation(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "invalid selection: {text}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use wrapped_db::{Cell, ResultTable};

    use super::TerminalSurface;
    use crate::dashboard::Surface;
    use crate::output::table::TableOptions;

    fn surface(input: &str) -> TerminalSurface<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalSurface::with_options(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            TableOptions::default(),
        )
    }

    fn options() -> Vec<String> {
        vec!["Users".to_string(), "Songs".to_string()]
    }

    #[test]
    fn numbered_choice_maps_to_index() {
        let mut surface = surface("2\n");
        assert_eq!(surface.choose("Area", &options()).unwrap(), Some(1));
        let out = String::from_utf8(surface.into_output()).unwrap();
        assert!(out.starts_with("Area\n   1) Users\n   2) Songs\n"));
    }

    #[test]
    fn out_of_range_answer_asks_again() {
        let mut surface = surface("7\nabc\n1\n");
        assert_eq!(surface.choose("Area", &options()).unwrap(), Some(0));
        let out = String::from_utf8(surface.into_output()).unwrap();
        assert_eq!(out.matches("enter a number between 1 and 2").count(), 2);
    }

    #[test]
    fn blank_quit_or_eof_backs_out() {
        assert_eq!(surface("\n").choose("Area", &options()).unwrap(), None);
        assert_eq!(surface("q\n").choose("Area", &options()).unwrap(), None);
        assert_eq!(surface("").choose("Area", &options()).unwrap(), None);
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(surface("y\n").confirm("most active users").unwrap());
        assert!(surface("YES\n").confirm("most active users").unwrap());
        assert!(!surface("\n").confirm("most active users").unwrap());
        assert!(!surface("").confirm("most active users").unwrap());
    }

    #[test]
    fn tables_are_titled() {
        let mut surface = surface("");
        let genres = ResultTable::new(vec!["genre".into()], vec![vec![Cell::from("jazz")]]);
        surface.table("Most Played Genres", &genres).unwrap();
        surface
            .table("Song Releases:", &ResultTable::empty(["artist"]))
            .unwrap();
        let out = String::from_utf8(surface.into_output()).unwrap();
        assert_eq!(
            out,
            "\nMost Played Genres\ngenre\n-----\njazz\n\n\nSong Releases:\n(no rows)\n\n"
        );
    }
}
