//! Interactive statistics browser.
//!
//! The flow picks an area, shows its reports and lets the user drill down
//! from a listed user or song into that entity's spotlight. All input and
//! output goes through a [`Surface`], so the flow runs the same against a
//! terminal or a scripted test double.

mod terminal;

pub use terminal::TerminalSurface;

use std::fmt;
use std::sync::Arc;

use wrapped_core::{AwardFilter, YearRange};
use wrapped_db::navigation::{song_options, user_options};
use wrapped_db::{QueryError, QueryExecutor, Reports, ResultTable, SongSpotlight, UserSpotlight};

use crate::messages;

/// Years offered for artist release ranges.
const RELEASE_YEARS: std::ops::RangeInclusive<i32> = 1991..=2021;
/// Years offered for band hits.
const HIT_YEARS: std::ops::RangeInclusive<i32> = 2017..=2020;
/// Years offered for library additions.
const LIBRARY_YEARS: std::ops::RangeInclusive<i32> = 2018..=2021;

/// Input and output primitives the dashboard is drawn with.
pub trait Surface {
    /// Offer `options` and return the chosen index, or `None` to go back.
    fn choose(&mut self, prompt: &str, options: &[String]) -> anyhow::Result<Option<usize>>;

    /// A yes/no toggle.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;

    fn table(&mut self, title: &str, table: &ResultTable) -> anyhow::Result<()>;

    fn message(&mut self, text: &str) -> anyhow::Result<()>;

    /// A failed report.
    fn error(&mut self, text: &str) -> anyhow::Result<()>;

    /// Parameters rejected before any report ran.
    fn validation(&mut self, text: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Users,
    Songs,
    Artists,
    Bands,
    Albums,
}

impl Area {
    pub const ALL: [Self; 5] = [
        Self::Users,
        Self::Songs,
        Self::Artists,
        Self::Bands,
        Self::Albums,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Songs => "Songs",
            Self::Artists => "Artists",
            Self::Bands => "Bands",
            Self::Albums => "Albums",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The selection chain over one report session.
pub struct Dashboard<'a, E: QueryExecutor, S: Surface> {
    reports: &'a Reports<E>,
    surface: S,
}

impl<'a, E: QueryExecutor, S: Surface> Dashboard<'a, E, S> {
    pub const fn new(reports: &'a Reports<E>, surface: S) -> Self {
        Self { reports, surface }
    }

    #[cfg(test)]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Offer areas until the user backs out of the area prompt.
    ///
    /// Report failures are shown on the surface and the loop continues;
    /// only surface I/O errors end it early.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let labels = labels(&Area::ALL);
        while let Some(index) = self
            .surface
            .choose("Which statistics would you like to look at?", &labels)?
        {
            let Some(area) = Area::ALL.get(index).copied() else {
                continue;
            };
            tracing::debug!(%area, "dashboard area selected");
            self.area(area)?;
        }
        Ok(())
    }

    pub fn area(&mut self, area: Area) -> anyhow::Result<()> {
        match area {
            Area::Users => self.users(),
            Area::Songs => self.songs(),
            Area::Artists => self.artists(),
            Area::Bands => self.bands(),
            Area::Albums => self.albums(),
        }
    }

    fn users(&mut self) -> anyhow::Result<()> {
        let most_active = self.surface.confirm("most active users")?;
        let Some(users) = self.show("Users", self.reports.users(most_active), None)? else {
            return Ok(());
        };
        let options = match user_options(&users) {
            Ok(options) => options,
            Err(err) => return self.surface.error(&err.to_string()),
        };
        let Some(user) = self.pick("Select a User to view their Spotlight!", &options)? else {
            return Ok(());
        };

        let spotlights = labels(&UserSpotlight::ALL);
        let Some(index) = self
            .surface
            .choose(&format!("Spotlight | {user}"), &spotlights)?
        else {
            return Ok(());
        };
        let Some(spotlight) = UserSpotlight::ALL.get(index).copied() else {
            return Ok(());
        };
        let result = self.reports.run(&spotlight.request(user));
        self.show(spotlight.title(), result, None)?;
        Ok(())
    }

    fn songs(&mut self) -> anyhow::Result<()> {
        let most_played = self.surface.confirm("most played songs")?;
        let Some(songs) = self.show("Songs", self.reports.songs(most_played), None)? else {
            return Ok(());
        };
        let options = match song_options(&songs) {
            Ok(options) => options,
            Err(err) => return self.surface.error(&err.to_string()),
        };
        let Some(song) = self.pick("Select a Song to view its Spotlight!", &options)? else {
            return Ok(());
        };

        let spotlights: Vec<String> = SongSpotlight::ALL
            .iter()
            .map(|spotlight| spotlight.label(&song))
            .collect();
        let Some(index) = self
            .surface
            .choose(&format!("Spotlight | {song}"), &spotlights)?
        else {
            return Ok(());
        };
        let Some(spotlight) = SongSpotlight::ALL.get(index).copied() else {
            return Ok(());
        };
        let title = spotlight.title(&song);
        let result = self.reports.run(&spotlight.request(song));
        self.show(&title, result, None)?;
        Ok(())
    }

    fn artists(&mut self) -> anyhow::Result<()> {
        self.show(
            messages::ARTISTS_IN_BANDS,
            self.reports.artists_in_bands(),
            None,
        )?;

        let Some(start) = self.pick("Start Year", &RELEASE_YEARS.collect::<Vec<_>>())? else {
            return Ok(());
        };
        let Some(end) = self.pick("End Year", &RELEASE_YEARS.collect::<Vec<_>>())? else {
            return Ok(());
        };
        let Some(award) = self.pick("Award won?", &[AwardFilter::Won, AwardFilter::NotWon])?
        else {
            return Ok(());
        };

        let years = match YearRange::new(start, end) {
            Ok(years) => years,
            Err(err) => return self.surface.validation(&err.to_string()),
        };
        self.show(
            messages::SONG_RELEASES,
            self.reports.artists_with_most_song_releases(years, award),
            Some(messages::NO_ARTISTS),
        )?;
        self.show(
            messages::ALBUM_RELEASES,
            self.reports.artists_with_most_album_releases(years, award),
            Some(messages::NO_ARTISTS),
        )?;
        Ok(())
    }

    fn bands(&mut self) -> anyhow::Result<()> {
        let most_albums = self.surface.confirm("bands with most albums")?;
        self.show("Bands", self.reports.bands(most_albums), None)?;

        let Some(genre) = self.pick_genre("Genre")? else {
            return Ok(());
        };
        let Some(year) = self.pick("year", &HIT_YEARS.collect::<Vec<_>>())? else {
            return Ok(());
        };
        self.show(
            &messages::band_hits_title(&genre, year),
            self.reports.bands_with_most_song_plays(year, &genre),
            Some(messages::NO_BANDS),
        )?;
        Ok(())
    }

    fn albums(&mut self) -> anyhow::Result<()> {
        let Some(genre) = self.pick_genre("Genre")? else {
            return Ok(());
        };
        let Some(year) = self.pick("Year", &LIBRARY_YEARS.collect::<Vec<_>>())? else {
            return Ok(());
        };
        self.show(
            &messages::featured_albums_title(&genre, year),
            self.reports.albums_most_featured_in_libraries(year, &genre),
            Some(messages::NO_ALBUMS),
        )?;
        Ok(())
    }

    /// Render a report outcome and hand back the table when there is one.
    ///
    /// An empty result shows `empty_message` instead of the table when given.
    fn show(
        &mut self,
        title: &str,
        result: Result<Arc<ResultTable>, QueryError>,
        empty_message: Option<&str>,
    ) -> anyhow::Result<Option<Arc<ResultTable>>> {
        match result {
            Ok(table) => {
                match empty_message {
                    Some(message) if table.is_empty() => self.surface.message(message)?,
                    _ => self.surface.table(title, &table)?,
                }
                Ok(Some(table))
            }
            Err(err) => {
                tracing::warn!(%err, title, "report failed");
                self.surface.error(&format!("Could not load '{title}': {err}"))?;
                Ok(None)
            }
        }
    }

    fn pick<T: Clone + fmt::Display>(
        &mut self,
        prompt: &str,
        options: &[T],
    ) -> anyhow::Result<Option<T>> {
        let index = self.surface.choose(prompt, &labels(options))?;
        Ok(index.and_then(|i| options.get(i).cloned()))
    }

    fn pick_genre(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.reports.genre_names() {
            Ok(genres) => self.pick(prompt, &genres),
            Err(err) => {
                self.surface.error(&format!("Could not load genres: {err}"))?;
                Ok(None)
            }
        }
    }
}

fn labels<T: fmt::Display>(options: &[T]) -> Vec<String> {
    options.iter().map(ToString::to_string).collect()
}
