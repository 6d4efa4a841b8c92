//! Report identifiers and report filter enums.
//!
//! A [`ReportKind`] names one entry of the query catalog. It doubles as the
//! function identity half of a result-cache key and as the report name in logs.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ReportKind
// ---------------------------------------------------------------------------

/// Every report in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Users,
    RecentlyPlayedSongs,
    MostPlayedSongs,
    MostPlayedGenres,
    RecommendedSongs,
    Songs,
    TopListeners,
    SongsWithCommonListeners,
    ArtistsWithMostSongReleases,
    ArtistsWithMostAlbumReleases,
    ArtistsInBands,
    Bands,
    Genres,
    BandsWithMostSongPlays,
    AlbumsMostFeaturedInLibraries,
}

impl ReportKind {
    pub const ALL: [Self; 15] = [
        Self::Users,
        Self::RecentlyPlayedSongs,
        Self::MostPlayedSongs,
        Self::MostPlayedGenres,
        Self::RecommendedSongs,
        Self::Songs,
        Self::TopListeners,
        Self::SongsWithCommonListeners,
        Self::ArtistsWithMostSongReleases,
        Self::ArtistsWithMostAlbumReleases,
        Self::ArtistsInBands,
        Self::Bands,
        Self::Genres,
        Self::BandsWithMostSongPlays,
        Self::AlbumsMostFeaturedInLibraries,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::RecentlyPlayedSongs => "recently_played_songs",
            Self::MostPlayedSongs => "most_played_songs",
            Self::MostPlayedGenres => "most_played_genres",
            Self::RecommendedSongs => "recommended_songs",
            Self::Songs => "songs",
            Self::TopListeners => "top_listeners",
            Self::SongsWithCommonListeners => "songs_with_common_listeners",
            Self::ArtistsWithMostSongReleases => "artists_with_most_song_releases",
            Self::ArtistsWithMostAlbumReleases => "artists_with_most_album_releases",
            Self::ArtistsInBands => "artists_in_bands",
            Self::Bands => "bands",
            Self::Genres => "genres",
            Self::BandsWithMostSongPlays => "bands_with_most_song_plays",
            Self::AlbumsMostFeaturedInLibraries => "albums_most_featured_in_libraries",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AwardFilter
// ---------------------------------------------------------------------------

/// Splits artists by whether they appear among award winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardFilter {
    Won,
    NotWon,
}

impl AwardFilter {
    /// The answer shown in the "Award won?" selection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Won => "yes",
            Self::NotWon => "no",
        }
    }

    #[must_use]
    pub const fn from_bool(won: bool) -> Self {
        if won { Self::Won } else { Self::NotWon }
    }
}

impl fmt::Display for AwardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
