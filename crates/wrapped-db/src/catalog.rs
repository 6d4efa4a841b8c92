//! The report catalog.
//!
//! Each report is one SQL statement built from typed parameters. Toggle reports
//! pick between two statement bodies that produce the same columns; drill-down
//! reports take the natural key of a previously selected row.
//!
//! All user-supplied values are bound as `?` parameters. Only table names and
//! fixed `LIMIT`s are part of the SQL text.

use wrapped_core::timestamp::{library_since_lower_bound, play_ts_year_bounds};
use wrapped_core::{AwardFilter, ReportKind, SongKey, Table, TableNames, UserKey, YearRange};

use crate::cache::CacheKey;
use crate::statement::{SqlParam, Statement};

/// Row cap of "most active users" and "most played songs".
pub const TOP_LIMIT: u32 = 10;
/// Row cap of a user's recently played songs.
pub const RECENT_LIMIT: u32 = 5;
/// Row cap of a user's most played songs.
pub const USER_TOP_SONGS_LIMIT: u32 = 8;
/// Number of genres that count as a user's favourites.
pub const TOP_GENRES_LIMIT: u32 = 3;
/// Row cap of song recommendations.
pub const RECOMMEND_LIMIT: u32 = 10;
/// Row cap of a song's top listeners.
pub const TOP_LISTENERS_LIMIT: u32 = 5;
/// Row cap of songs sharing listeners with a song.
pub const COMMON_LISTENERS_LIMIT: u32 = 20;

/// A report together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRequest {
    Users { most_active: bool },
    RecentlyPlayedSongs(UserKey),
    MostPlayedSongs(UserKey),
    MostPlayedGenres(UserKey),
    RecommendedSongs(UserKey),
    Songs { most_played: bool },
    TopListeners(SongKey),
    SongsWithCommonListeners(SongKey),
    ArtistsWithMostSongReleases { years: YearRange, award: AwardFilter },
    ArtistsWithMostAlbumReleases { years: YearRange, award: AwardFilter },
    ArtistsInBands,
    Bands { most_albums: bool },
    Genres,
    BandsWithMostSongPlays { year: i32, genre: String },
    AlbumsMostFeaturedInLibraries { year: i32, genre: String },
}

impl ReportRequest {
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::Users { .. } => ReportKind::Users,
            Self::RecentlyPlayedSongs(_) => ReportKind::RecentlyPlayedSongs,
            Self::MostPlayedSongs(_) => ReportKind::MostPlayedSongs,
            Self::MostPlayedGenres(_) => ReportKind::MostPlayedGenres,
            Self::RecommendedSongs(_) => ReportKind::RecommendedSongs,
            Self::Songs { .. } => ReportKind::Songs,
            Self::TopListeners(_) => ReportKind::TopListeners,
            Self::SongsWithCommonListeners(_) => ReportKind::SongsWithCommonListeners,
            Self::ArtistsWithMostSongReleases { .. } => ReportKind::ArtistsWithMostSongReleases,
            Self::ArtistsWithMostAlbumReleases { .. } => ReportKind::ArtistsWithMostAlbumReleases,
            Self::ArtistsInBands => ReportKind::ArtistsInBands,
            Self::Bands { .. } => ReportKind::Bands,
            Self::Genres => ReportKind::Genres,
            Self::BandsWithMostSongPlays { .. } => ReportKind::BandsWithMostSongPlays,
            Self::AlbumsMostFeaturedInLibraries { .. } => {
                ReportKind::AlbumsMostFeaturedInLibraries
            }
        }
    }

    /// The argument tuple of this request, in declaration order.
    #[must_use]
    pub fn args(&self) -> Vec<SqlParam> {
        match self {
            Self::Users { most_active } => vec![(*most_active).into()],
            Self::Songs { most_played } => vec![(*most_played).into()],
            Self::Bands { most_albums } => vec![(*most_albums).into()],
            Self::RecentlyPlayedSongs(user)
            | Self::MostPlayedSongs(user)
            | Self::MostPlayedGenres(user)
            | Self::RecommendedSongs(user) => vec![user.name.as_str().into(), user.dob.into()],
            Self::TopListeners(song) | Self::SongsWithCommonListeners(song) => {
                vec![song.name.as_str().into(), song.release.into()]
            }
            Self::ArtistsWithMostSongReleases { years, award }
            | Self::ArtistsWithMostAlbumReleases { years, award } => vec![
                years.start().into(),
                years.end().into(),
                award.as_str().into(),
            ],
            Self::ArtistsInBands | Self::Genres => Vec::new(),
            Self::BandsWithMostSongPlays { year, genre }
            | Self::AlbumsMostFeaturedInLibraries { year, genre } => {
                vec![(*year).into(), genre.as_str().into()]
            }
        }
    }

    /// Result-cache key: report identity plus arguments.
    #[must_use]
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(self.kind(), self.args())
    }
}

/// Builds report statements against one set of table names.
#[derive(Debug, Clone, Default)]
pub struct ReportCatalog {
    tables: TableNames,
}

impl ReportCatalog {
    #[must_use]
    pub const fn new(tables: TableNames) -> Self {
        Self { tables }
    }

    #[must_use]
    pub const fn tables(&self) -> &TableNames {
        &self.tables
    }

    fn t(&self, table: Table) -> String {
        self.tables.get(table).into_owned()
    }

    /// The statement for any request.
    #[must_use]
    pub fn statement(&self, request: &ReportRequest) -> Statement {
        match request {
            ReportRequest::Users { most_active } => self.users(*most_active),
            ReportRequest::RecentlyPlayedSongs(user) => self.recently_played_songs(user),
            ReportRequest::MostPlayedSongs(user) => self.most_played_songs(user),
            ReportRequest::MostPlayedGenres(user) => self.most_played_genres(user),
            ReportRequest::RecommendedSongs(user) => self.recommended_songs(user),
            ReportRequest::Songs { most_played } => self.songs(*most_played),
            ReportRequest::TopListeners(song) => self.top_listeners(song),
            ReportRequest::SongsWithCommonListeners(song) => {
                self.songs_with_common_listeners(song)
            }
            ReportRequest::ArtistsWithMostSongReleases { years, award } => {
                self.artists_with_most_song_releases(*years, *award)
            }
            ReportRequest::ArtistsWithMostAlbumReleases { years, award } => {
                self.artists_with_most_album_releases(*years, *award)
            }
            ReportRequest::ArtistsInBands => self.artists_in_bands(),
            ReportRequest::Bands { most_albums } => self.bands(*most_albums),
            ReportRequest::Genres => self.genres(),
            ReportRequest::BandsWithMostSongPlays { year, genre } => {
                self.bands_with_most_song_plays(*year, genre)
            }
            ReportRequest::AlbumsMostFeaturedInLibraries { year, genre } => {
                self.albums_most_featured_in_libraries(*year, genre)
            }
        }
    }

    // ── Users ──────────────────────────────────────────────────────────

    /// Users with their play counts. Columns: `name, dob, plays`.
    ///
    /// `most_active` keeps the ten heaviest listeners, ties broken by name.
    #[must_use]
    pub fn users(&self, most_active: bool) -> Statement {
        let order = if most_active {
            format!("ORDER BY COUNT(*) DESC, U.name, U.dob\nLIMIT {TOP_LIMIT}")
        } else {
            "ORDER BY U.name, U.dob".to_string()
        };
        Statement::new(format!(
            "SELECT U.name AS name, U.dob AS dob, COUNT(*) AS plays
FROM {users} U, {plays} SP
WHERE U.name = SP.uname
AND U.dob = SP.udob
GROUP BY U.name, U.dob
{order}",
            users = self.t(Table::Users),
            plays = self.t(Table::SongPlays),
        ))
    }

    /// A user's latest plays. Columns: `song, played_at`.
    #[must_use]
    pub fn recently_played_songs(&self, user: &UserKey) -> Statement {
        Statement::new(format!(
            "SELECT sname AS song, play_ts AS played_at
FROM {plays}
WHERE uname = ?
AND udob = ?
ORDER BY play_ts DESC, sname
LIMIT {RECENT_LIMIT}",
            plays = self.t(Table::SongPlays),
        ))
        .bind(user.name.as_str())
        .bind(user.dob)
    }

    /// A user's most played song titles. Columns: `song, numPlays`.
    #[must_use]
    pub fn most_played_songs(&self, user: &UserKey) -> Statement {
        Statement::new(format!(
            "SELECT sname AS song, COUNT(*) AS numPlays
FROM {plays}
WHERE uname = ?
AND udob = ?
GROUP BY sname
ORDER BY COUNT(*) DESC, sname
LIMIT {USER_TOP_SONGS_LIMIT}",
            plays = self.t(Table::SongPlays),
        ))
        .bind(user.name.as_str())
        .bind(user.dob)
    }

    /// A user's favourite genres. Columns: `genre, numPlays`.
    #[must_use]
    pub fn most_played_genres(&self, user: &UserKey) -> Statement {
        Statement::new(format!(
            "SELECT S.genre AS genre, COUNT(*) AS numPlays
{top_genres_body}
LIMIT {TOP_GENRES_LIMIT}",
            top_genres_body = self.top_genres_body(),
        ))
        .bind(user.name.as_str())
        .bind(user.dob)
    }

    /// Unplayed songs from a user's favourite genres. Columns: `song, genre`.
    ///
    /// A song is excluded when the user played any song with the same title.
    #[must_use]
    pub fn recommended_songs(&self, user: &UserKey) -> Statement {
        Statement::new(format!(
            "SELECT name AS song, genre
FROM {songs}
WHERE genre IN (
    SELECT S.genre
    {top_genres_body}
    LIMIT {TOP_GENRES_LIMIT}
)
AND name NOT IN (
    SELECT sname
    FROM {plays}
    WHERE uname = ?
    AND udob = ?
)
ORDER BY name
LIMIT {RECOMMEND_LIMIT}",
            songs = self.t(Table::Songs),
            plays = self.t(Table::SongPlays),
            top_genres_body = self.top_genres_body(),
        ))
        .bind(user.name.as_str())
        .bind(user.dob)
        .bind(user.name.as_str())
        .bind(user.dob)
    }

    /// Shared FROM/WHERE/GROUP/ORDER of the top-genre queries. Two parameters.
    fn top_genres_body(&self) -> String {
        format!(
            "FROM {songs} S, {plays} SP
WHERE SP.uname = ?
AND SP.udob = ?
AND S.name = SP.sname
AND S.release_date = SP.srelease_date
GROUP BY S.genre
ORDER BY COUNT(*) DESC, S.genre",
            songs = self.t(Table::Songs),
            plays = self.t(Table::SongPlays),
        )
    }

    // ── Songs ──────────────────────────────────────────────────────────

    /// Played songs. Columns: `song, numPlays, genre, release`.
    #[must_use]
    pub fn songs(&self, most_played: bool) -> Statement {
        let order = if most_played {
            format!("ORDER BY COUNT(*) DESC, S.name, S.release_date\nLIMIT {TOP_LIMIT}")
        } else {
            "ORDER BY S.name, S.release_date".to_string()
        };
        Statement::new(format!(
            "SELECT S.name AS song, COUNT(*) AS numPlays, S.genre AS genre, S.release_date AS \"release\"
FROM {songs} S, {plays} SP
WHERE S.name = SP.sname
AND S.release_date = SP.srelease_date
GROUP BY S.name, S.release_date, S.genre
{order}",
            songs = self.t(Table::Songs),
            plays = self.t(Table::SongPlays),
        ))
    }

    /// The heaviest listeners of one song. Columns: `user, numPlays`.
    ///
    /// Plays are summed per listener name, so users sharing a name are one row.
    #[must_use]
    pub fn top_listeners(&self, song: &SongKey) -> Statement {
        Statement::new(format!(
            "SELECT uname AS \"user\", COUNT(*) AS numPlays
FROM {plays}
WHERE sname = ?
AND srelease_date = ?
GROUP BY uname
ORDER BY COUNT(*) DESC, uname
LIMIT {TOP_LISTENERS_LIMIT}",
            plays = self.t(Table::SongPlays),
        ))
        .bind(song.name.as_str())
        .bind(song.release)
    }

    /// Songs played by anyone who played `song`. Columns: `song, release`.
    ///
    /// Another release of the same title counts as a different song.
    #[must_use]
    pub fn songs_with_common_listeners(&self, song: &SongKey) -> Statement {
        let plays = self.t(Table::SongPlays);
        Statement::new(format!(
            "SELECT SP2.sname AS song, SP2.srelease_date AS \"release\"
FROM {plays} SP1, {plays} SP2
WHERE SP1.uname = SP2.uname
AND SP1.udob = SP2.udob
AND SP1.sname = ?
AND SP1.srelease_date = ?
AND SP2.sname <> ?
UNION
SELECT SP2.sname AS song, SP2.srelease_date AS \"release\"
FROM {plays} SP1, {plays} SP2
WHERE SP1.uname = SP2.uname
AND SP1.udob = SP2.udob
AND SP1.sname = ?
AND SP1.srelease_date = ?
AND SP2.srelease_date <> ?
ORDER BY \"release\" DESC, song
LIMIT {COMMON_LISTENERS_LIMIT}"
        ))
        .bind(song.name.as_str())
        .bind(song.release)
        .bind(song.name.as_str())
        .bind(song.name.as_str())
        .bind(song.release)
        .bind(song.release)
    }

    // ── Artists ────────────────────────────────────────────────────────

    /// Artists by songs released within `years`. Columns: `artist, dob, numSongReleased`.
    #[must_use]
    pub fn artists_with_most_song_releases(
        &self,
        years: YearRange,
        award: AwardFilter,
    ) -> Statement {
        Statement::new(format!(
            "SELECT ACS.aname AS artist, ACS.adob AS dob, COUNT(*) AS numSongReleased
FROM {created} ACS
WHERE ACS.aname {membership} (
    SELECT aname
    FROM {awards}
)
AND ACS.srelease_date >= ?
AND ACS.srelease_date <= ?
GROUP BY ACS.aname, ACS.adob
ORDER BY COUNT(*) DESC, ACS.aname, ACS.adob
LIMIT {TOP_LIMIT}",
            created = self.t(Table::ArtistsCreateSongs),
            awards = self.t(Table::ArtistsWinAwards),
            membership = award_membership(award),
        ))
        .bind(years.start())
        .bind(years.end())
    }

    /// Artists by albums released within `years`. Columns: `artist, dob, numAlbumReleased`.
    #[must_use]
    pub fn artists_with_most_album_releases(
        &self,
        years: YearRange,
        award: AwardFilter,
    ) -> Statement {
        Statement::new(format!(
            "SELECT ACA.artist_name AS artist, ACA.artist_dob AS dob, COUNT(*) AS numAlbumReleased
FROM {created} ACA
WHERE ACA.artist_name {membership} (
    SELECT aname
    FROM {awards}
)
AND ACA.album_release_date >= ?
AND ACA.album_release_date <= ?
GROUP BY ACA.artist_name, ACA.artist_dob
ORDER BY COUNT(*) DESC, ACA.artist_name, ACA.artist_dob
LIMIT {TOP_LIMIT}",
            created = self.t(Table::ArtistsCreateAlbums),
            awards = self.t(Table::ArtistsWinAwards),
            membership = award_membership(award),
        ))
        .bind(years.start())
        .bind(years.end())
    }

    /// Band membership. Columns: `artist, band`.
    #[must_use]
    pub fn artists_in_bands(&self) -> Statement {
        Statement::new(format!(
            "SELECT AFB.aname AS artist, AFB.bname AS band
FROM {formed} AFB
ORDER BY AFB.aname, AFB.bname",
            formed = self.t(Table::ArtistsFormBands),
        ))
    }

    // ── Bands, genres, albums ──────────────────────────────────────────

    /// Bands with their album counts. Columns: `band, since, numAlbums`.
    ///
    /// `most_albums` keeps the ten most prolific bands; otherwise every band is
    /// listed, including those without albums.
    #[must_use]
    pub fn bands(&self, most_albums: bool) -> Statement {
        let sql = if most_albums {
            format!(
                "SELECT bname AS band, bsince AS since, COUNT(*) AS numAlbums
FROM {albums}
GROUP BY bname, bsince
ORDER BY COUNT(*) DESC, bname, bsince
LIMIT {TOP_LIMIT}",
                albums = self.t(Table::BandsCreateAlbums),
            )
        } else {
            format!(
                "SELECT B.name AS band, B.since AS since, COUNT(BCA.aname) AS numAlbums
FROM {bands} B
LEFT JOIN {albums} BCA
ON B.name = BCA.bname
AND B.since = BCA.bsince
GROUP BY B.name, B.since
ORDER BY B.name, B.since",
                bands = self.t(Table::Bands),
                albums = self.t(Table::BandsCreateAlbums),
            )
        };
        Statement::new(sql)
    }

    /// Every distinct genre. Column: `genre`.
    #[must_use]
    pub fn genres(&self) -> Statement {
        Statement::new(format!(
            "SELECT DISTINCT genre AS genre
FROM {songs}
ORDER BY genre",
            songs = self.t(Table::Songs),
        ))
    }

    /// Bands by plays of their `genre` songs during `year`. Columns: `band, since, numHits`.
    #[must_use]
    pub fn bands_with_most_song_plays(&self, year: i32, genre: &str) -> Statement {
        let (after, before) = play_ts_year_bounds(year);
        Statement::new(format!(
            "SELECT BCS.bname AS band, BCS.bsince AS since, COUNT(*) AS numHits
FROM {songs} S, {plays} SP, {created} BCS
WHERE BCS.sname = S.name
AND BCS.srelease_date = S.release_date
AND SP.sname = S.name
AND SP.srelease_date = S.release_date
AND S.genre = ?
AND SP.play_ts > ?
AND SP.play_ts < ?
GROUP BY BCS.bname, BCS.bsince
ORDER BY COUNT(*) DESC, BCS.bname, BCS.bsince",
            songs = self.t(Table::Songs),
            plays = self.t(Table::SongPlays),
            created = self.t(Table::BandsCreateSongs),
        ))
        .bind(genre)
        .bind(after)
        .bind(before)
    }

    /// Albums whose `genre` songs were added to libraries after `year` began.
    /// Columns: `album, release, timesAdded`.
    #[must_use]
    pub fn albums_most_featured_in_libraries(&self, year: i32, genre: &str) -> Statement {
        Statement::new(format!(
            "SELECT ALS.aname AS album, ALS.arelease_date AS \"release\", COUNT(*) AS timesAdded
FROM {songs} S, {listed} ALS, {libraries} UL
WHERE UL.sname = ALS.sname
AND UL.srelease_date = ALS.srelease_date
AND UL.sname = S.name
AND UL.srelease_date = S.release_date
AND UL.since > ?
AND S.genre = ?
GROUP BY ALS.aname, ALS.arelease_date
ORDER BY COUNT(*) DESC, ALS.aname, ALS.arelease_date DESC",
            songs = self.t(Table::Songs),
            listed = self.t(Table::AlbumsListSongs),
            libraries = self.t(Table::UserLibraries),
        ))
        .bind(library_since_lower_bound(year))
        .bind(genre)
    }
}

const fn award_membership(award: AwardFilter) -> &'static str {
    match award {
        AwardFilter::Won => "IN",
        AwardFilter::NotWon => "NOT IN",
    }
}
