//! Headings and empty-result messages shared by commands and the dashboard.

pub const NO_ARTISTS: &str = "No artists meet the given criteria";
pub const NO_BANDS: &str = "No bands meet the given criteria!";
pub const NO_ALBUMS: &str = "No albums meet the given criteria!";

pub const ARTISTS_IN_BANDS: &str = "Artists who are member of a band:";
pub const SONG_RELEASES: &str = "Song Releases:";
pub const ALBUM_RELEASES: &str = "Album Releases:";

#[must_use]
pub fn band_hits_title(genre: &str, year: i32) -> String {
    format!("Most played '{genre}' songs in year {year} belonged to the following bands:")
}

#[must_use]
pub fn featured_albums_title(genre: &str, year: i32) -> String {
    format!(
        "Following albums (with some '{genre}' songs) were added the most by users in their personal libraries since {year}:"
    )
}
