use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use strata_calendar::{DayCounts, Source, SourceData, fuse, window_start};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

// Day keys scattered around the window, some inside and some outside.
fn arb_days() -> impl Strategy<Value = DayCounts> {
    proptest::collection::hash_map(-500i64..100, 0u32..50, 0..60).prop_map(|m| {
        m.into_iter()
            .map(|(off, n)| {
                let day = base() + Duration::days(off);
                (day.format("%Y-%m-%d").to_string(), n)
            })
            .collect()
    })
}

fn arb_sources() -> impl Strategy<Value = SourceData> {
    (proptest::option::of(arb_days()), proptest::option::of(arb_days())).prop_map(|(a, b)| {
        let mut s = HashMap::new();
        if let Some(a) = a {
            s.insert(Source::Gitea, a);
        }
        if let Some(b) = b {
            s.insert(Source::GitHub, b);
        }
        s
    })
}

proptest! {
    // exactly window_days records, strictly ascending, consecutive, ending at window_end
    #[test]
    fn fuse_is_complete_and_ordered(sources in arb_sources(), days in 0i64..400) {
        let out = fuse(&sources, base(), days).unwrap();
        prop_assert_eq!(out.len() as i64, days);
        for w in out.windows(2) {
            prop_assert_eq!(w[1].date, w[0].date + Duration::days(1));
        }
        if let Some(last) = out.last() {
            prop_assert_eq!(last.date, base());
            prop_assert_eq!(out[0].date, window_start(base(), days).unwrap());
        }
    }

    // any in-window day a source didn't mention reads 0; mentioned days carry the count
    #[test]
    fn fuse_zero_fills_and_copies(sources in arb_sources(), days in 1i64..400) {
        let out = fuse(&sources, base(), days).unwrap();
        for rec in &out {
            let key = rec.date.format("%Y-%m-%d").to_string();
            for s in Source::ALL {
                let expect = sources.get(&s).and_then(|m| m.get(&key)).copied().unwrap_or(0);
                prop_assert_eq!(rec.count(s), expect);
            }
        }
    }

    // identical inputs give element-wise equal output
    #[test]
    fn fuse_is_idempotent(sources in arb_sources(), days in 0i64..400) {
        let a = fuse(&sources, base(), days).unwrap();
        let b = fuse(&sources, base(), days).unwrap();
        prop_assert_eq!(a, b);
    }
}
