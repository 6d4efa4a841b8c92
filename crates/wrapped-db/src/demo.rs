//! Demo schema and seed data.
//!
//! The listening store normally belongs to someone else. This module creates a
//! small but complete copy of it so the CLI can be tried without a server
//! (`wrapped seed-demo`) and so report tests have known answers.

use duckdb::{Connection, params};

use wrapped_core::Table;
use wrapped_core::timestamp::PLAY_TS_YEAR_SCALE;

use crate::error::QueryError;

/// DDL for every store table. Dates and timestamps are integers.
pub const CREATE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS Users (
    name TEXT NOT NULL,
    dob BIGINT NOT NULL,
    PRIMARY KEY (name, dob)
);
CREATE TABLE IF NOT EXISTS Songs (
    name TEXT NOT NULL,
    release_date BIGINT NOT NULL,
    genre TEXT NOT NULL,
    PRIMARY KEY (name, release_date)
);
CREATE TABLE IF NOT EXISTS Artists (
    name TEXT NOT NULL,
    dob BIGINT NOT NULL,
    PRIMARY KEY (name, dob)
);
CREATE TABLE IF NOT EXISTS Bands (
    name TEXT NOT NULL,
    since BIGINT NOT NULL,
    PRIMARY KEY (name, since)
);
CREATE TABLE IF NOT EXISTS Albums (
    name TEXT NOT NULL,
    release_date BIGINT NOT NULL,
    PRIMARY KEY (name, release_date)
);
CREATE TABLE IF NOT EXISTS Song_Plays (
    uname TEXT NOT NULL,
    udob BIGINT NOT NULL,
    sname TEXT NOT NULL,
    srelease_date BIGINT NOT NULL,
    play_ts BIGINT NOT NULL,
    PRIMARY KEY (uname, udob, sname, srelease_date, play_ts)
);
CREATE TABLE IF NOT EXISTS Users_Libraries (
    uname TEXT NOT NULL,
    udob BIGINT NOT NULL,
    sname TEXT NOT NULL,
    srelease_date BIGINT NOT NULL,
    since BIGINT NOT NULL,
    PRIMARY KEY (uname, udob, sname, srelease_date)
);
CREATE TABLE IF NOT EXISTS Artists_Create_Songs (
    aname TEXT NOT NULL,
    adob BIGINT NOT NULL,
    sname TEXT NOT NULL,
    srelease_date BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS Artists_Create_Albums (
    artist_name TEXT NOT NULL,
    artist_dob BIGINT NOT NULL,
    album_name TEXT NOT NULL,
    album_release_date BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS Bands_Create_Albums (
    bname TEXT NOT NULL,
    bsince BIGINT NOT NULL,
    aname TEXT NOT NULL,
    arelease_date BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS Bands_Create_Songs (
    bname TEXT NOT NULL,
    bsince BIGINT NOT NULL,
    sname TEXT NOT NULL,
    srelease_date BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS Albums_List_Songs (
    aname TEXT NOT NULL,
    arelease_date BIGINT NOT NULL,
    sname TEXT NOT NULL,
    srelease_date BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS Artists_Win_Awards (
    aname TEXT NOT NULL,
    adob BIGINT NOT NULL,
    award TEXT NOT NULL,
    year BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS Artists_Form_Bands (
    aname TEXT NOT NULL,
    adob BIGINT NOT NULL,
    bname TEXT NOT NULL,
    bsince BIGINT NOT NULL
);
";

// ── Entities ───────────────────────────────────────────────────────────────

const USERS: &[(&str, i64)] = &[
    ("Alice", 19_900_101),
    ("Bob", 19_851_212),
    ("Carol", 19_920_505),
    ("Dave", 19_781_120),
    ("Erin", 20_000_229),
    ("Frank", 19_950_707),
    ("Grace", 19_881_010),
    ("Heidi", 19_930_303),
    ("Ivan", 19_991_111),
    ("Judy", 19_870_606),
    ("Mallory", 19_910_909),
    ("Alice", 19_750_415),
    ("Niaj", 20_010_101),
];

const SONGS: &[(&str, i64, &str)] = &[
    ("Imagine", 1971, "rock"),
    ("Bohemian Rhapsody", 1975, "rock"),
    ("Wonderwall", 1995, "rock"),
    ("Creep", 1992, "rock"),
    ("Everlong", 1997, "rock"),
    ("Paranoid Android", 1997, "rock"),
    ("Smells Like Teen Spirit", 1991, "rock"),
    ("Yesterday", 1965, "pop"),
    ("Hey Jude", 1968, "pop"),
    ("Hallelujah", 1984, "pop"),
    ("Yesterday", 2000, "jazz"),
    ("So What", 1959, "jazz"),
    ("Take Five", 1959, "jazz"),
    ("Blue in Green", 1959, "jazz"),
    ("Lose Yourself", 2002, "hiphop"),
    ("Juicy", 1994, "hiphop"),
    ("One More Time", 2000, "electronic"),
    ("Windowlicker", 1999, "electronic"),
    ("Around the World", 1997, "electronic"),
    ("Teardrop", 1998, "electronic"),
];

const ARTISTS: &[(&str, i64)] = &[
    ("John Lennon", 19_401_009),
    ("Paul McCartney", 19_420_618),
    ("Freddie Mercury", 19_460_905),
    ("Thom Yorke", 19_681_007),
    ("Dave Grohl", 19_690_114),
    ("Eminem", 19_721_017),
    ("Miles Davis", 19_260_526),
    ("Leonard Cohen", 19_340_921),
    ("Kurt Cobain", 19_670_220),
    ("Noel Gallagher", 19_670_529),
    ("Thomas Bangalter", 19_750_103),
    ("Notorious B.I.G.", 19_720_521),
    ("Dave Brubeck", 19_201_206),
    ("Aphex Twin", 19_710_818),
];

const BANDS: &[(&str, i64)] = &[
    ("The Beatles", 1960),
    ("Queen", 1970),
    ("Radiohead", 1985),
    ("Foo Fighters", 1994),
    ("Daft Punk", 1993),
    ("Nirvana", 1987),
    ("Oasis", 1991),
    ("The Quiet Ones", 2015),
];

/// `(band, album, release)`.
const BAND_ALBUMS: &[(&str, &str, i64)] = &[
    ("The Beatles", "Help!", 1965),
    ("The Beatles", "Abbey Road", 1969),
    ("The Beatles", "Let It Be", 1970),
    ("Queen", "A Night at the Opera", 1975),
    ("Radiohead", "Pablo Honey", 1993),
    ("Radiohead", "OK Computer", 1997),
    ("Foo Fighters", "The Colour and the Shape", 1997),
    ("Daft Punk", "Homework", 1997),
    ("Daft Punk", "Discovery", 2001),
    ("Oasis", "(What's the Story) Morning Glory?", 1995),
];

/// `(artist, album, release)`.
const ARTIST_ALBUMS: &[(&str, &str, i64)] = &[
    ("Eminem", "The Marshall Mathers LP", 2000),
    ("Eminem", "The Eminem Show", 2002),
    ("Thom Yorke", "The Eraser", 2006),
    ("Aphex Twin", "Drukqs", 2001),
    ("Notorious B.I.G.", "Ready to Die", 1994),
    ("Miles Davis", "Kind of Blue", 1959),
    ("John Lennon", "Imagine", 1971),
];

// ── Relationships ──────────────────────────────────────────────────────────

/// `(band, song, release)`.
const BAND_SONGS: &[(&str, &str, i64)] = &[
    ("The Beatles", "Yesterday", 1965),
    ("The Beatles", "Hey Jude", 1968),
    ("Queen", "Bohemian Rhapsody", 1975),
    ("Radiohead", "Creep", 1992),
    ("Radiohead", "Paranoid Android", 1997),
    ("Foo Fighters", "Everlong", 1997),
    ("Daft Punk", "One More Time", 2000),
    ("Daft Punk", "Around the World", 1997),
    ("Oasis", "Wonderwall", 1995),
];

/// `(artist, song, release)`.
const ARTIST_SONGS: &[(&str, &str, i64)] = &[
    ("John Lennon", "Imagine", 1971),
    ("Paul McCartney", "Yesterday", 1965),
    ("Paul McCartney", "Hey Jude", 1968),
    ("Freddie Mercury", "Bohemian Rhapsody", 1975),
    ("Thom Yorke", "Creep", 1992),
    ("Thom Yorke", "Paranoid Android", 1997),
    ("Dave Grohl", "Everlong", 1997),
    ("Eminem", "Lose Yourself", 2002),
    ("Miles Davis", "So What", 1959),
    ("Miles Davis", "Blue in Green", 1959),
    ("Leonard Cohen", "Hallelujah", 1984),
    ("Kurt Cobain", "Smells Like Teen Spirit", 1991),
    ("Noel Gallagher", "Wonderwall", 1995),
    ("Thomas Bangalter", "One More Time", 2000),
    ("Thomas Bangalter", "Around the World", 1997),
    ("Notorious B.I.G.", "Juicy", 1994),
    ("Dave Brubeck", "Take Five", 1959),
    ("Dave Brubeck", "Yesterday", 2000),
    ("Aphex Twin", "Windowlicker", 1999),
];

/// `(artist, award, year)`.
const AWARDS: &[(&str, &str, i64)] = &[
    ("Paul McCartney", "Grammy Lifetime Achievement", 1990),
    ("Eminem", "Academy Award for Best Original Song", 2003),
    ("Miles Davis", "Grammy Lifetime Achievement", 1990),
    ("Thom Yorke", "Grammy Best Alternative Music Album", 2001),
    ("Dave Grohl", "Grammy Best Rock Song", 2008),
];

/// `(artist, band)`.
const MEMBERSHIPS: &[(&str, &str)] = &[
    ("John Lennon", "The Beatles"),
    ("Paul McCartney", "The Beatles"),
    ("Freddie Mercury", "Queen"),
    ("Thom Yorke", "Radiohead"),
    ("Dave Grohl", "Foo Fighters"),
    ("Dave Grohl", "Nirvana"),
    ("Kurt Cobain", "Nirvana"),
    ("Noel Gallagher", "Oasis"),
    ("Thomas Bangalter", "Daft Punk"),
];

/// `(album, album release, song, song release)`.
const TRACK_LISTINGS: &[(&str, i64, &str, i64)] = &[
    ("Help!", 1965, "Yesterday", 1965),
    ("Let It Be", 1970, "Hey Jude", 1968),
    ("Imagine", 1971, "Imagine", 1971),
    ("A Night at the Opera", 1975, "Bohemian Rhapsody", 1975),
    ("Pablo Honey", 1993, "Creep", 1992),
    ("OK Computer", 1997, "Paranoid Android", 1997),
    ("The Colour and the Shape", 1997, "Everlong", 1997),
    ("(What's the Story) Morning Glory?", 1995, "Wonderwall", 1995),
    ("Homework", 1997, "Around the World", 1997),
    ("Discovery", 2001, "One More Time", 2000),
    ("Kind of Blue", 1959, "So What", 1959),
    ("Kind of Blue", 1959, "Blue in Green", 1959),
    ("Ready to Die", 1994, "Juicy", 1994),
    ("The Eminem Show", 2002, "Lose Yourself", 2002),
];

/// `(user, dob, song, release, plays, year)`.
const PLAYS: &[(&str, i64, &str, i64, u32, i32)] = &[
    ("Alice", 19_900_101, "Imagine", 1971, 5, 2019),
    ("Alice", 19_900_101, "Yesterday", 1965, 3, 2019),
    ("Alice", 19_900_101, "Hey Jude", 1968, 2, 2018),
    ("Alice", 19_900_101, "Wonderwall", 1995, 1, 2020),
    ("Bob", 19_851_212, "Imagine", 1971, 4, 2019),
    ("Bob", 19_851_212, "Yesterday", 2000, 2, 2018),
    ("Bob", 19_851_212, "So What", 1959, 3, 2019),
    ("Carol", 19_920_505, "Imagine", 1971, 2, 2020),
    ("Carol", 19_920_505, "Lose Yourself", 2002, 6, 2019),
    ("Carol", 19_920_505, "Juicy", 1994, 2, 2019),
    ("Dave", 19_781_120, "Yesterday", 1965, 4, 2017),
    ("Dave", 19_781_120, "Hey Jude", 1968, 4, 2017),
    ("Dave", 19_781_120, "Hallelujah", 1984, 1, 2018),
    ("Erin", 20_000_229, "One More Time", 2000, 5, 2020),
    ("Erin", 20_000_229, "Around the World", 1997, 3, 2020),
    ("Erin", 20_000_229, "Windowlicker", 1999, 2, 2019),
    ("Frank", 19_950_707, "Imagine", 1971, 1, 2018),
    ("Frank", 19_950_707, "Bohemian Rhapsody", 1975, 3, 2018),
    ("Frank", 19_950_707, "Creep", 1992, 2, 2019),
    ("Frank", 19_950_707, "Everlong", 1997, 2, 2019),
    ("Grace", 19_881_010, "Take Five", 1959, 2, 2017),
    ("Grace", 19_881_010, "Blue in Green", 1959, 2, 2017),
    ("Grace", 19_881_010, "So What", 1959, 1, 2018),
    ("Heidi", 19_930_303, "Imagine", 1971, 3, 2019),
    ("Heidi", 19_930_303, "Wonderwall", 1995, 1, 2019),
    ("Ivan", 19_991_111, "Juicy", 1994, 1, 2020),
    ("Judy", 19_870_606, "Yesterday", 1965, 1, 2019),
    ("Judy", 19_870_606, "Yesterday", 2000, 1, 2019),
    ("Judy", 19_870_606, "Juicy", 1994, 3, 2018),
    ("Judy", 19_870_606, "One More Time", 2000, 2, 2018),
    ("Mallory", 19_910_909, "Hallelujah", 1984, 1, 2020),
    ("Alice", 19_750_415, "Imagine", 1971, 1, 2017),
    ("Alice", 19_750_415, "Take Five", 1959, 1, 2017),
];

/// `(user, dob, song, release, since)`.
const LIBRARIES: &[(&str, i64, &str, i64, i64)] = &[
    ("Alice", 19_900_101, "Imagine", 1971, 20_180_305),
    ("Alice", 19_900_101, "Wonderwall", 1995, 20_190_610),
    ("Alice", 19_900_101, "Yesterday", 1965, 20_170_101),
    ("Bob", 19_851_212, "Imagine", 1971, 20_190_220),
    ("Bob", 19_851_212, "So What", 1959, 20_200_101),
    ("Carol", 19_920_505, "Lose Yourself", 2002, 20_190_101),
    ("Carol", 19_920_505, "Juicy", 1994, 20_210_315),
    ("Erin", 20_000_229, "One More Time", 2000, 20_200_505),
    ("Erin", 20_000_229, "Around the World", 1997, 20_200_506),
    ("Frank", 19_950_707, "Creep", 1992, 20_190_909),
    ("Frank", 19_950_707, "Everlong", 1997, 20_191_010),
    ("Frank", 19_950_707, "Imagine", 1971, 20_210_101),
    ("Heidi", 19_930_303, "Wonderwall", 1995, 20_210_707),
    ("Heidi", 19_930_303, "Imagine", 1971, 20_190_303),
    ("Grace", 19_881_010, "So What", 1959, 20_180_808),
    ("Grace", 19_881_010, "Blue in Green", 1959, 20_180_809),
];

/// A `YYYYMMDDhhmmss` timestamp inside `year`, distinct for each `seq` below 840.
const fn play_ts(year: i32, seq: i64) -> i64 {
    let month = 1 + seq % 12;
    let day = 1 + seq % 28;
    let hour = seq % 24;
    let minute = seq % 60;
    year as i64 * PLAY_TS_YEAR_SCALE + month * 100_000_000 + day * 1_000_000 + hour * 10_000
        + minute * 100
}

fn lookup<'a>(pairs: &'a [(&'a str, i64)], name: &str) -> i64 {
    pairs
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(0, |(_, key)| *key)
}

/// Create the store tables and fill them with the demo data.
///
/// # Errors
///
/// Returns [`QueryError::DuckDb`] if the DDL or an append fails, e.g. when the
/// tables already hold the demo rows.
pub fn install(conn: &Connection) -> Result<(), QueryError> {
    conn.execute_batch(CREATE_SCHEMA)?;

    let mut users = conn.appender(Table::Users.as_str())?;
    for (name, dob) in USERS {
        users.append_row(params![name, dob])?;
    }
    users.flush()?;

    let mut songs = conn.appender(Table::Songs.as_str())?;
    for (name, release, genre) in SONGS {
        songs.append_row(params![name, release, genre])?;
    }
    songs.flush()?;

    let mut artists = conn.appender(Table::Artists.as_str())?;
    for (name, dob) in ARTISTS {
        artists.append_row(params![name, dob])?;
    }
    artists.flush()?;

    let mut bands = conn.appender(Table::Bands.as_str())?;
    for (name, since) in BANDS {
        bands.append_row(params![name, since])?;
    }
    bands.flush()?;

    let mut albums = conn.appender(Table::Albums.as_str())?;
    for (_, album, release) in BAND_ALBUMS.iter().chain(ARTIST_ALBUMS) {
        albums.append_row(params![album, release])?;
    }
    albums.flush()?;

    let mut band_albums = conn.appender(Table::BandsCreateAlbums.as_str())?;
    for (band, album, release) in BAND_ALBUMS {
        band_albums.append_row(params![band, lookup(BANDS, band), album, release])?;
    }
    band_albums.flush()?;

    let mut artist_albums = conn.appender(Table::ArtistsCreateAlbums.as_str())?;
    for (artist, album, release) in ARTIST_ALBUMS {
        artist_albums.append_row(params![artist, lookup(ARTISTS, artist), album, release])?;
    }
    artist_albums.flush()?;

    let mut band_songs = conn.appender(Table::BandsCreateSongs.as_str())?;
    for (band, song, release) in BAND_SONGS {
        band_songs.append_row(params![band, lookup(BANDS, band), song, release])?;
    }
    band_songs.flush()?;

    let mut artist_songs = conn.appender(Table::ArtistsCreateSongs.as_str())?;
    for (artist, song, release) in ARTIST_SONGS {
        artist_songs.append_row(params![artist, lookup(ARTISTS, artist), song, release])?;
    }
    artist_songs.flush()?;

    let mut awards = conn.appender(Table::ArtistsWinAwards.as_str())?;
    for (artist, award, year) in AWARDS {
        awards.append_row(params![artist, lookup(ARTISTS, artist), award, year])?;
    }
    awards.flush()?;

    let mut members = conn.appender(Table::ArtistsFormBands.as_str())?;
    for (artist, band) in MEMBERSHIPS {
        members.append_row(params![artist, lookup(ARTISTS, artist), band, lookup(BANDS, band)])?;
    }
    members.flush()?;

    let mut listings = conn.appender(Table::AlbumsListSongs.as_str())?;
    for (album, album_release, song, song_release) in TRACK_LISTINGS {
        listings.append_row(params![album, album_release, song, song_release])?;
    }
    listings.flush()?;

    let mut plays = conn.appender(Table::SongPlays.as_str())?;
    let mut seq: i64 = 0;
    for (user, dob, song, release, count, year) in PLAYS {
        for _ in 0..*count {
            plays.append_row(params![user, dob, song, release, play_ts(*year, seq)])?;
            seq += 1;
        }
    }
    plays.flush()?;

    let mut libraries = conn.appender(Table::UserLibraries.as_str())?;
    for (user, dob, song, release, since) in LIBRARIES {
        libraries.append_row(params![user, dob, song, release, since])?;
    }
    libraries.flush()?;

    tracing::info!(
        users = USERS.len(),
        songs = SONGS.len(),
        plays = seq,
        "demo store installed"
    );
    Ok(())
}
