use strata_calendar::DayRecord;

use crate::constants::{DEFAULT_MAX_HEIGHT, EMPTY_DOMAIN_MAX};

/// Linear map from `[0, domain_max]` counts to `[0, max_height]` pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeightScale {
    pub domain_max: u32,
    pub max_height: f32,
}

impl Default for HeightScale {
    fn default() -> Self {
        Self {
            domain_max: EMPTY_DOMAIN_MAX,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl HeightScale {
    /// Scale fitted to the busiest day in `records`. An all-zero (or empty) set
    /// falls back to a small fixed domain so heights stay finite.
    pub fn from_records(records: &[DayRecord], max_height: f32) -> Self {
        let observed = records.iter().map(DayRecord::total).max().unwrap_or(0);
        let domain_max = if observed == 0 { EMPTY_DOMAIN_MAX } else { observed };
        Self {
            domain_max,
            max_height,
        }
    }

    #[inline]
    pub fn height(&self, count: u32) -> f32 {
        count as f32 / self.domain_max as f32 * self.max_height
    }
}
