//! Integer date encodings used by the listening store.
//!
//! The store keeps dates as plain integers rather than SQL date types:
//!
//! ```text
//! Song_Plays.play_ts      YYYYMMDDhhmmss   e.g. 20190314221503
//! Users_Libraries.since   YYYYMMDD         e.g. 20190314
//! ```
//!
//! Year filters are therefore numeric ranges: a year `Y` covers play
//! timestamps strictly between `Y * 10^10` and `(Y + 1) * 10^10`, and library
//! additions "since `Y`" are those strictly above `Y * 10^4`.

use chrono::NaiveDateTime;

/// Scale from a year to the `YYYYMMDDhhmmss` play timestamp range.
pub const PLAY_TS_YEAR_SCALE: i64 = 10_000_000_000;

/// Scale from a year to the `YYYYMMDD` library `since` range.
pub const LIBRARY_SINCE_YEAR_SCALE: i64 = 10_000;

/// Exclusive `(lower, upper)` bounds on `play_ts` for plays within `year`.
#[must_use]
pub const fn play_ts_year_bounds(year: i32) -> (i64, i64) {
    let year = year as i64;
    (year * PLAY_TS_YEAR_SCALE, (year + 1) * PLAY_TS_YEAR_SCALE)
}

/// Exclusive lower bound on library `since` for additions from `year` onward.
#[must_use]
pub const fn library_since_lower_bound(year: i32) -> i64 {
    year as i64 * LIBRARY_SINCE_YEAR_SCALE
}

/// Decode a `YYYYMMDDhhmmss` play timestamp.
///
/// Returns `None` when the integer is not a valid calendar date-time.
#[must_use]
pub fn decode_play_ts(play_ts: i64) -> Option<NaiveDateTime> {
    if play_ts < 0 {
        return None;
    }
    NaiveDateTime::parse_from_str(&format!("{play_ts:014}"), "%Y%m%d%H%M%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};
    use rstest::rstest;

    #[test]
    fn year_bounds_match_integer_scaling() {
        assert_eq!(
            play_ts_year_bounds(2019),
            (20_190_000_000_000, 20_200_000_000_000)
        );
        assert_eq!(library_since_lower_bound(2018), 20_180_000);
    }

    #[rstest]
    #[case(20_190_101_000_000, 2019)]
    #[case(20_191_231_235_959, 2019)]
    #[case(20_200_229_123_000, 2020)]
    fn every_instant_of_a_year_is_inside_its_bounds(#[case] play_ts: i64, #[case] year: i32) {
        let (lower, upper) = play_ts_year_bounds(year);
        assert!(lower < play_ts && play_ts < upper, "{play_ts} outside {year}");
        let at = decode_play_ts(play_ts).unwrap();
        assert_eq!(at.year(), year);
    }

    #[test]
    fn decoded_timestamp_keeps_every_field() {
        let at = decode_play_ts(20_190_314_221_503).unwrap();
        assert_eq!(
            at,
            NaiveDate::from_ymd_opt(2019, 3, 14)
                .and_then(|d| d.and_hms_opt(22, 15, 3))
                .unwrap()
        );
        assert_eq!((at.hour(), at.minute(), at.second()), (22, 15, 3));
    }

    #[test]
    fn invalid_encodings_do_not_decode() {
        assert_eq!(decode_play_ts(20_190_000_000_000), None);
        assert_eq!(decode_play_ts(20_191_301_000_000), None);
        assert_eq!(decode_play_ts(-1), None);
    }
}
