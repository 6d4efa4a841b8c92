//! Report behaviour against the demo store.

use std::cell::Cell as Counter;

use pretty_assertions::assert_eq;
use rstest::rstest;
use wrapped_core::timestamp::decode_play_ts;
use wrapped_core::{AwardFilter, SongKey, UserKey, ValidationError, YearRange};
use wrapped_db::navigation::{select_song, select_user};
use wrapped_db::{
    Cell, DuckDbExecutor, QueryError, QueryExecutor, ReportRequest, Reports, ResultTable,
    Statement, demo,
};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Delegates to an inner executor and counts statements.
struct Counting<E> {
    inner: E,
    calls: Counter<usize>,
}

impl<E: QueryExecutor> QueryExecutor for Counting<E> {
    fn execute(&self, statement: &Statement) -> Result<ResultTable, QueryError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.execute(statement)
    }
}

fn demo_executor() -> DuckDbExecutor {
    let executor = DuckDbExecutor::open_in_memory().expect("open in-memory store");
    demo::install(executor.conn()).expect("install demo data");
    executor
}

fn reports() -> Reports<DuckDbExecutor> {
    Reports::new(demo_executor())
}

fn counting_reports() -> Reports<Counting<DuckDbExecutor>> {
    Reports::new(Counting {
        inner: demo_executor(),
        calls: Counter::new(0),
    })
}

fn texts(table: &ResultTable, column: &str) -> Vec<String> {
    table
        .column(column)
        .expect("column present")
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

fn ints(table: &ResultTable, column: &str) -> Vec<i64> {
    table
        .column(column)
        .expect("column present")
        .into_iter()
        .map(|c| c.as_i64().expect("integer cell"))
        .collect()
}

fn alice() -> UserKey {
    UserKey::new("Alice", 19_900_101)
}

fn judy() -> UserKey {
    UserKey::new("Judy", 19_870_606)
}

// ── Toggle reports ──────────────────────────────────────────────────────

#[rstest]
#[case(ReportRequest::Users { most_active: true }, ReportRequest::Users { most_active: false })]
#[case(ReportRequest::Songs { most_played: true }, ReportRequest::Songs { most_played: false })]
#[case(ReportRequest::Bands { most_albums: true }, ReportRequest::Bands { most_albums: false })]
fn toggle_variants_share_columns(#[case] on: ReportRequest, #[case] off: ReportRequest) {
    let reports = reports();
    let on = reports.run(&on).unwrap();
    let off = reports.run(&off).unwrap();
    assert_eq!(on.columns, off.columns);
    assert!(!on.is_empty());
    assert!(off.len() >= on.len());
}

#[test]
fn most_active_users_are_ranked_by_plays_then_name() {
    let table = reports().users(true).unwrap();
    assert_eq!(table.columns, vec!["name", "dob", "plays"]);
    assert_eq!(
        texts(&table, "name"),
        vec![
            "Alice", "Carol", "Erin", "Bob", "Dave", "Frank", "Judy", "Grace", "Heidi", "Alice"
        ]
    );
    assert_eq!(ints(&table, "plays"), vec![11, 10, 10, 9, 9, 8, 7, 5, 4, 2]);
}

#[test]
fn all_users_are_listed_by_name_then_birth_date() {
    let table = reports().users(false).unwrap();
    assert_eq!(table.len(), 12);
    assert_eq!(texts(&table, "name")[..3].to_vec(), vec!["Alice", "Alice", "Bob"]);
    assert_eq!(ints(&table, "dob")[..2].to_vec(), vec![19_750_415, 19_900_101]);
    assert!(!texts(&table, "name").contains(&"Niaj".to_string()));
}

#[test]
fn most_played_songs_break_ties_by_title() {
    let table = reports().songs(true).unwrap();
    assert_eq!(table.columns, vec!["song", "numPlays", "genre", "release"]);
    assert_eq!(
        texts(&table, "song"),
        vec![
            "Imagine",
            "Yesterday",
            "One More Time",
            "Hey Jude",
            "Juicy",
            "Lose Yourself",
            "So What",
            "Around the World",
            "Bohemian Rhapsody",
            "Take Five",
        ]
    );
    assert_eq!(ints(&table, "numPlays"), vec![16, 8, 7, 6, 6, 6, 4, 3, 3, 3]);
}

// ── User spotlight ──────────────────────────────────────────────────────

#[test]
fn recently_played_songs_are_newest_first() {
    let table = reports().recently_played_songs(&alice()).unwrap();
    assert_eq!(table.columns, vec!["song", "played_at"]);
    assert_eq!(table.len(), 5);
    assert_eq!(texts(&table, "song")[0], "Wonderwall".to_string());

    let played = ints(&table, "played_at");
    assert!(played.windows(2).all(|w| w[0] > w[1]));
    let newest = decode_play_ts(played[0]).expect("valid timestamp");
    assert_eq!(newest.format("%Y").to_string(), "2020");
}

#[test]
fn most_played_songs_of_a_user() {
    let table = reports().most_played_songs(&alice()).unwrap();
    assert_eq!(
        texts(&table, "song"),
        vec!["Imagine", "Yesterday", "Hey Jude", "Wonderwall"]
    );
    assert_eq!(ints(&table, "numPlays"), vec![5, 3, 2, 1]);
}

#[test]
fn top_genres_break_ties_by_name() {
    let table = reports().most_played_genres(&judy()).unwrap();
    assert_eq!(table.columns, vec!["genre", "numPlays"]);
    assert_eq!(texts(&table, "genre"), vec!["hiphop", "electronic", "jazz"]);
    assert_eq!(ints(&table, "numPlays"), vec![3, 2, 1]);
}

#[rstest]
#[case(alice(), &["Bohemian Rhapsody", "Creep", "Everlong", "Hallelujah", "Paranoid Android", "Smells Like Teen Spirit"])]
#[case(judy(), &["Around the World", "Blue in Green", "Lose Yourself", "So What", "Take Five", "Teardrop", "Windowlicker"])]
fn recommendations_for_user(#[case] user: UserKey, #[case] expected: &[&str]) {
    let table = reports().recommended_songs(&user).unwrap();
    assert_eq!(table.columns, vec!["song", "genre"]);
    assert_eq!(texts(&table, "song"), expected);
}

/// Every distinct title the user played, without the report's top-N cap.
fn every_title_played_by(reports: &Reports<DuckDbExecutor>, user: &UserKey) -> ResultTable {
    let statement = Statement::new(
        "SELECT DISTINCT sname AS song FROM Song_Plays WHERE uname = ? AND udob = ?",
    )
    .bind(user.name.as_str())
    .bind(user.dob);
    reports.executor().execute(&statement).unwrap()
}

#[test]
fn played_titles_are_not_capped_like_the_top_songs_report() {
    let reports = reports();
    let alice = alice();
    let top = reports.most_played_songs(&alice).unwrap();
    let all = every_title_played_by(&reports, &alice);
    assert!(all.len() >= top.len());
    for song in texts(&top, "song") {
        assert!(texts(&all, "song").contains(&song), "{song}");
    }
}

#[test]
fn recommendations_are_unplayed_and_from_top_genres() {
    let reports = reports();
    let users = reports.users(false).unwrap();
    for row in 0..users.len() {
        let user = select_user(&users, row).unwrap();
        let played = texts(&every_title_played_by(&reports, &user), "song");
        let genres = texts(&reports.most_played_genres(&user).unwrap(), "genre");
        let recs = reports.recommended_songs(&user).unwrap();
        assert!(recs.len() <= 10);
        for (song, genre) in texts(&recs, "song").iter().zip(texts(&recs, "genre")) {
            assert!(!played.contains(song), "{user}: {song} was played");
            assert!(genres.contains(&genre), "{user}: {genre} is not a top genre");
        }
    }
}

// ── Song spotlight ──────────────────────────────────────────────────────

#[test]
fn top_listeners_of_imagine() {
    let table = reports()
        .top_listeners(&SongKey::new("Imagine", 1971))
        .unwrap();
    assert_eq!(table.columns, vec!["user", "numPlays"]);
    // Both Alices (5 + 1 plays) are counted under one name.
    assert_eq!(
        texts(&table, "user"),
        vec!["Alice", "Bob", "Heidi", "Carol", "Frank"]
    );
    assert_eq!(ints(&table, "numPlays"), vec![6, 4, 3, 2, 1]);
}

#[test]
fn common_listeners_are_a_deduplicated_union() {
    let table = reports()
        .songs_with_common_listeners(&SongKey::new("Yesterday", 1965))
        .unwrap();
    assert_eq!(table.columns, vec!["song", "release"]);
    let rows: Vec<(String, i64)> = texts(&table, "song")
        .into_iter()
        .zip(ints(&table, "release"))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("One More Time".to_string(), 2000),
            ("Yesterday".to_string(), 2000),
            ("Wonderwall".to_string(), 1995),
            ("Juicy".to_string(), 1994),
            ("Hallelujah".to_string(), 1984),
            ("Imagine".to_string(), 1971),
            ("Hey Jude".to_string(), 1968),
        ]
    );
}

#[test]
fn song_selection_feeds_the_spotlight() {
    let reports = reports();
    let songs = reports.songs(true).unwrap();
    let song = select_song(&songs, 0).unwrap();
    assert_eq!(song, SongKey::new("Imagine", 1971));
    assert_eq!(reports.top_listeners(&song).unwrap().len(), 5);
}

// ── Artists ─────────────────────────────────────────────────────────────

#[rstest]
#[case(AwardFilter::Won, &["Thom Yorke", "Dave Grohl", "Eminem"], &[2, 1, 1])]
#[case(
    AwardFilter::NotWon,
    &["Thomas Bangalter", "Aphex Twin", "Dave Brubeck", "Kurt Cobain", "Noel Gallagher", "Notorious B.I.G."],
    &[2, 1, 1, 1, 1, 1]
)]
fn artists_by_song_releases(
    #[case] award: AwardFilter,
    #[case] artists: &[&str],
    #[case] counts: &[i64],
) {
    let years = YearRange::new(1991, 2021).unwrap();
    let table = reports()
        .artists_with_most_song_releases(years, award)
        .unwrap();
    assert_eq!(table.columns, vec!["artist", "dob", "numSongReleased"]);
    assert_eq!(texts(&table, "artist"), artists);
    assert_eq!(ints(&table, "numSongReleased"), counts);
}

#[test]
fn artists_by_album_releases() {
    let years = YearRange::new(1991, 2021).unwrap();
    let table = reports()
        .artists_with_most_album_releases(years, AwardFilter::Won)
        .unwrap();
    assert_eq!(table.columns, vec!["artist", "dob", "numAlbumReleased"]);
    assert_eq!(texts(&table, "artist"), vec!["Eminem", "Thom Yorke"]);
    assert_eq!(ints(&table, "numAlbumReleased"), vec![2, 1]);
}

#[rstest]
#[case(AwardFilter::Won)]
#[case(AwardFilter::NotWon)]
fn release_years_without_releases_are_empty_not_errors(#[case] award: AwardFilter) {
    let reports = reports();
    let years = YearRange::new(2010, 2015).unwrap();
    let songs = reports.artists_with_most_song_releases(years, award).unwrap();
    let albums = reports.artists_with_most_album_releases(years, award).unwrap();
    assert!(songs.is_empty());
    assert!(albums.is_empty());
    assert_eq!(songs.columns, vec!["artist", "dob", "numSongReleased"]);
}

#[rstest]
#[case(2021, 1991)]
#[case(2000, 1999)]
fn inverted_year_range_never_reaches_the_store(#[case] start: i32, #[case] end: i32) {
    let reports = counting_reports();
    let err = YearRange::new(start, end).unwrap_err();
    assert_eq!(err, ValidationError::InvertedYearRange { start, end });
    assert_eq!(reports.executor().calls.get(), 0);
}

#[test]
fn artists_in_bands_are_sorted() {
    let table = reports().artists_in_bands().unwrap();
    assert_eq!(table.columns, vec!["artist", "band"]);
    assert_eq!(table.len(), 9);
    assert_eq!(
        table.rows[..2].to_vec(),
        vec![
            vec![Cell::from("Dave Grohl"), Cell::from("Foo Fighters")],
            vec![Cell::from("Dave Grohl"), Cell::from("Nirvana")],
        ]
    );
}

// ── Bands, genres, albums ───────────────────────────────────────────────

#[test]
fn bands_with_most_albums() {
    let table = reports().bands(true).unwrap();
    assert_eq!(
        texts(&table, "band"),
        vec!["The Beatles", "Daft Punk", "Radiohead", "Foo Fighters", "Oasis", "Queen"]
    );
    assert_eq!(ints(&table, "numAlbums"), vec![3, 2, 2, 1, 1, 1]);
}

#[test]
fn every_band_is_listed_including_those_without_albums() {
    let table = reports().bands(false).unwrap();
    assert_eq!(
        texts(&table, "band"),
        vec![
            "Daft Punk",
            "Foo Fighters",
            "Nirvana",
            "Oasis",
            "Queen",
            "Radiohead",
            "The Beatles",
            "The Quiet Ones"
        ]
    );
    assert_eq!(ints(&table, "numAlbums"), vec![2, 1, 0, 1, 1, 2, 3, 0]);
}

#[rstest]
#[case("rock", 2019, &["Foo Fighters", "Radiohead", "Oasis"], &[2, 2, 1])]
#[case("electronic", 2020, &["Daft Punk"], &[8])]
#[case("pop", 2017, &["The Beatles"], &[8])]
#[case("jazz", 2019, &[], &[])]
#[case("rock", 2017, &[], &[])]
fn bands_with_most_song_plays(
    #[case] genre: &str,
    #[case] year: i32,
    #[case] bands: &[&str],
    #[case] hits: &[i64],
) {
    let table = reports().bands_with_most_song_plays(year, genre).unwrap();
    assert_eq!(table.columns, vec!["band", "since", "numHits"]);
    assert_eq!(texts(&table, "band"), bands);
    assert_eq!(ints(&table, "numHits"), hits);
}

#[rstest]
#[case(
    "rock",
    2018,
    &["Imagine", "(What's the Story) Morning Glory?", "Pablo Honey", "The Colour and the Shape"],
    &[4, 2, 1, 1]
)]
#[case("jazz", 2018, &["Kind of Blue"], &[3])]
#[case("pop", 2018, &[], &[])]
fn albums_most_featured_in_libraries(
    #[case] genre: &str,
    #[case] year: i32,
    #[case] albums: &[&str],
    #[case] added: &[i64],
) {
    let table = reports()
        .albums_most_featured_in_libraries(year, genre)
        .unwrap();
    assert_eq!(table.columns, vec!["album", "release", "timesAdded"]);
    assert_eq!(texts(&table, "album"), albums);
    assert_eq!(ints(&table, "timesAdded"), added);
}

// ── Cache ───────────────────────────────────────────────────────────────

#[test]
fn identical_requests_run_one_query() {
    let reports = counting_reports();
    let song = SongKey::new("Imagine", 1971);
    let first = reports.top_listeners(&song).unwrap();
    let second = reports.top_listeners(&song).unwrap();
    assert_eq!(first, second);
    assert_eq!(reports.executor().calls.get(), 1);

    reports.top_listeners(&SongKey::new("Imagine", 1972)).unwrap();
    assert_eq!(reports.executor().calls.get(), 2);
}

#[test]
fn uncached_service_runs_every_query() {
    let reports = counting_reports().without_cache();
    reports.genres().unwrap();
    reports.genres().unwrap();
    assert_eq!(reports.executor().calls.get(), 2);
}
