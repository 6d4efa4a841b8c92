//! Drill-down glue between a rendered report and the next one.
//!
//! The users table feeds a [`UserKey`] into the user spotlight and the songs
//! table feeds a [`SongKey`] into the song spotlight. Projections are pure and
//! only read the named key columns, so they work for both toggle variants.

use std::fmt;

use wrapped_core::{SongKey, UserKey};

use crate::catalog::ReportRequest;
use crate::error::NavigationError;
use crate::table::{Cell, ResultTable};

fn text_at(table: &ResultTable, row: usize, column: &str) -> Result<String, NavigationError> {
    let cell = cell_at(table, row, column)?;
    cell.as_str()
        .map(str::to_string)
        .ok_or_else(|| NavigationError::InvalidValue {
            column: column.to_string(),
            expected: "text",
            found: cell.type_name().to_string(),
        })
}

fn int_at(table: &ResultTable, row: usize, column: &str) -> Result<i64, NavigationError> {
    let cell = cell_at(table, row, column)?;
    match cell {
        Cell::Int(v) => Ok(*v),
        Cell::Text(s) => s.trim().parse().map_err(|_| NavigationError::InvalidValue {
            column: column.to_string(),
            expected: "integer",
            found: format!("text '{s}'"),
        }),
        other => Err(NavigationError::InvalidValue {
            column: column.to_string(),
            expected: "integer",
            found: other.type_name().to_string(),
        }),
    }
}

fn cell_at<'t>(
    table: &'t ResultTable,
    row: usize,
    column: &str,
) -> Result<&'t Cell, NavigationError> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| NavigationError::MissingColumn(column.to_string()))?;
    table
        .rows
        .get(row)
        .and_then(|r| r.get(idx))
        .ok_or(NavigationError::RowOutOfRange {
            index: row,
            len: table.len(),
        })
}

/// The user on row `row` of a users report (columns `name`, `dob`).
///
/// # Errors
///
/// Returns [`NavigationError`] if the row does not exist or lacks a usable key.
pub fn select_user(table: &ResultTable, row: usize) -> Result<UserKey, NavigationError> {
    Ok(UserKey::new(
        text_at(table, row, "name")?,
        int_at(table, row, "dob")?,
    ))
}

/// The song on row `row` of a songs report (columns `song`, `release`).
///
/// # Errors
///
/// Returns [`NavigationError`] if the row does not exist or lacks a usable key.
pub fn select_song(table: &ResultTable, row: usize) -> Result<SongKey, NavigationError> {
    Ok(SongKey::new(
        text_at(table, row, "song")?,
        int_at(table, row, "release")?,
    ))
}

/// Every user of a users report, in row order.
///
/// # Errors
///
/// Returns [`NavigationError`] if any row lacks a usable key.
pub fn user_options(table: &ResultTable) -> Result<Vec<UserKey>, NavigationError> {
    (0..table.len()).map(|row| select_user(table, row)).collect()
}

/// Every song of a songs report, in row order.
///
/// # Errors
///
/// Returns [`NavigationError`] if any row lacks a usable key.
pub fn song_options(table: &ResultTable) -> Result<Vec<SongKey>, NavigationError> {
    (0..table.len()).map(|row| select_song(table, row)).collect()
}

// ---------------------------------------------------------------------------
// Spotlights
// ---------------------------------------------------------------------------

/// Follow-up reports for a selected user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSpotlight {
    RecentlyPlayedSongs,
    MostPlayedSongs,
    MostPlayedGenres,
    SongRecommendations,
}

impl UserSpotlight {
    pub const ALL: [Self; 4] = [
        Self::RecentlyPlayedSongs,
        Self::MostPlayedSongs,
        Self::MostPlayedGenres,
        Self::SongRecommendations,
    ];

    /// Menu entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RecentlyPlayedSongs => "recently played songs",
            Self::MostPlayedSongs => "most played songs",
            Self::MostPlayedGenres => "most played genres",
            Self::SongRecommendations => "song recommendations",
        }
    }

    /// Heading over the rendered table.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::RecentlyPlayedSongs => "Recently Played Songs",
            Self::MostPlayedSongs => "Most Played Songs",
            Self::MostPlayedGenres => "Most Played Genres",
            Self::SongRecommendations => "Song Recommendations",
        }
    }

    #[must_use]
    pub fn request(self, user: UserKey) -> ReportRequest {
        match self {
            Self::RecentlyPlayedSongs => ReportRequest::RecentlyPlayedSongs(user),
            Self::MostPlayedSongs => ReportRequest::MostPlayedSongs(user),
            Self::MostPlayedGenres => ReportRequest::MostPlayedGenres(user),
            Self::SongRecommendations => ReportRequest::RecommendedSongs(user),
        }
    }
}

impl fmt::Display for UserSpotlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Follow-up reports for a selected song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongSpotlight {
    TopListeners,
    CommonListeners,
}

impl SongSpotlight {
    pub const ALL: [Self; 2] = [Self::TopListeners, Self::CommonListeners];

    /// Menu entry. The common-listeners entry names the song.
    #[must_use]
    pub fn label(self, song: &SongKey) -> String {
        match self {
            Self::TopListeners => "top listeners".to_string(),
            Self::CommonListeners => format!("users who listen to '{song}' also listen..."),
        }
    }

    /// Heading over the rendered table.
    #[must_use]
    pub fn title(self, song: &SongKey) -> String {
        match self {
            Self::TopListeners => "Top Listeners".to_string(),
            Self::CommonListeners => format!("Users who listen to '{song}' also listen..."),
        }
    }

    #[must_use]
    pub fn request(self, song: SongKey) -> ReportRequest {
        match self {
            Self::TopListeners => ReportRequest::TopListeners(song),
            Self::CommonListeners => ReportRequest::SongsWithCommonListeners(song),
        }
    }
}
