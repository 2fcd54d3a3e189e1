//! Merge per-source `{date -> count}` mappings into one ordered, gap-free record
//! set covering a trailing window of days.
//!
//! The window is materialized first with every count at zero, so a source that
//! delivered nothing (failed fetch, empty account) still yields a complete set.
//! Entries are then written into their day slot by date offset; keys outside the
//! window or not in `YYYY-MM-DD` form are skipped.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::record::DayRecord;
use crate::source::Source;

/// Trailing window length used when callers don't choose one.
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// One source's raw data: ISO date key (`YYYY-MM-DD`) -> count.
pub type DayCounts = HashMap<String, u32>;

/// Raw data for every source that delivered something. A missing source is
/// equivalent to an empty mapping.
pub type SourceData = HashMap<Source, DayCounts>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FuseError {
    #[error("window length must be non-negative, got {0} days")]
    NegativeWindow(i64),
    #[error("a {days}-day window ending {end} starts outside the supported date range")]
    WindowOutOfRange { end: NaiveDate, days: i64 },
}

/// First day of a `days`-long window ending at `end` (inclusive).
///
/// A zero-length window starts the day after `end`, i.e. covers nothing.
pub fn window_start(end: NaiveDate, days: i64) -> Result<NaiveDate, FuseError> {
    if days < 0 {
        return Err(FuseError::NegativeWindow(days));
    }
    Duration::try_days(days - 1)
        .and_then(|back| end.checked_sub_signed(back))
        .ok_or(FuseError::WindowOutOfRange { end, days })
}

/// Fuses raw per-source counts into exactly `window_days` records, ascending by
/// date, ending at `window_end`.
///
/// Never fails for missing or partial data; only a malformed window is an error.
pub fn fuse(
    sources: &SourceData,
    window_end: NaiveDate,
    window_days: i64,
) -> Result<Vec<DayRecord>, FuseError> {
    if window_days == 0 {
        return Ok(Vec::new());
    }
    let start = window_start(window_end, window_days)?;
    let len = usize::try_from(window_days).map_err(|_| FuseError::NegativeWindow(window_days))?;

    let mut records: Vec<DayRecord> = start.iter_days().take(len).map(DayRecord::empty).collect();
    if records.len() != len {
        return Err(FuseError::WindowOutOfRange {
            end: window_end,
            days: window_days,
        });
    }

    for source in Source::ALL {
        let Some(days) = sources.get(&source) else {
            log::debug!(target: "fuse", "source={} absent; counts stay zero", source);
            continue;
        };
        let mut merged = 0usize;
        let mut outside = 0usize;
        let mut malformed = 0usize;
        for (key, &count) in days {
            let Some(date) = parse_day_key(key) else {
                malformed += 1;
                continue;
            };
            let offset = (date - start).num_days();
            match usize::try_from(offset).ok().and_then(|i| records.get_mut(i)) {
                Some(rec) => {
                    rec.counts.set(source, count);
                    merged += 1;
                }
                None => outside += 1,
            }
        }
        log::debug!(
            target: "fuse",
            "source={} merged={} outside_window={} malformed_keys={}",
            source,
            merged,
            outside,
            malformed
        );
    }

    log::debug!(
        target: "fuse",
        "fused days={} window=[{}, {}]",
        records.len(),
        start,
        window_end
    );
    Ok(records)
}

// Only the canonical zero-padded form is accepted, so two keys can never
// land on the same day. chrono alone also takes signs, spaces and one-digit
// fields, hence the round trip.
fn parse_day_key(key: &str) -> Option<NaiveDate> {
    if key.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == key).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::{FuseError, SourceData, fuse, parse_day_key, window_start};
    use crate::source::Source;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn window_start_counts_end_inclusive() {
        assert_eq!(window_start(d("2024-01-10"), 10), Ok(d("2024-01-01")));
        assert_eq!(window_start(d("2024-01-10"), 1), Ok(d("2024-01-10")));
        assert_eq!(window_start(d("2024-01-10"), 0), Ok(d("2024-01-11")));
    }

    #[test]
    fn negative_window_fails_fast() {
        let err = fuse(&SourceData::new(), d("2024-01-10"), -1).unwrap_err();
        assert_eq!(err, FuseError::NegativeWindow(-1));
    }

    #[test]
    fn window_before_min_date_is_out_of_range() {
        let err = fuse(&SourceData::new(), NaiveDate::MIN, 2).unwrap_err();
        assert!(matches!(err, FuseError::WindowOutOfRange { days: 2, .. }));
    }

    #[test]
    fn zero_window_is_empty_not_error() {
        let out = fuse(&SourceData::new(), d("2024-01-10"), 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn only_canonical_keys_parse() {
        assert_eq!(parse_day_key("2024-01-02"), Some(d("2024-01-02")));
        assert_eq!(parse_day_key("2024-1-2"), None);
        assert_eq!(parse_day_key("2024-02-30"), None);
        assert_eq!(parse_day_key("yesterday"), None);
        assert_eq!(parse_day_key(" 2024-1-01"), None);
        assert_eq!(parse_day_key("+2024-1-01"), None);
        assert_eq!(parse_day_key("2024- 1-01"), None);
    }

    #[test]
    fn lookalike_keys_never_shadow_the_canonical_day() {
        let mut sources = SourceData::new();
        sources.insert(
            Source::GitHub,
            [
                ("2024-01-01".to_string(), 3),
                ("+2024-1-01".to_string(), 9),
                (" 2024-1-01".to_string(), 9),
                ("2024- 1-01".to_string(), 9),
            ]
            .into_iter()
            .collect(),
        );
        for _ in 0..8 {
            let out = fuse(&sources, d("2024-01-01"), 1).unwrap();
            assert_eq!(out[0].count(Source::GitHub), 3);
        }
    }

    #[test]
    fn empty_window_at_max_date_is_empty() {
        let out = fuse(&SourceData::new(), NaiveDate::MAX, 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_keys_are_skipped() {
        let mut sources = SourceData::new();
        sources.insert(
            Source::GitHub,
            [("junk".to_string(), 9), ("2024-01-02".to_string(), 4)]
                .into_iter()
                .collect(),
        );
        let out = fuse(&sources, d("2024-01-02"), 2).unwrap();
        assert_eq!(out[0].count(Source::GitHub), 0);
        assert_eq!(out[1].count(Source::GitHub), 4);
    }
}
