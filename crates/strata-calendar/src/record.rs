use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::source::{Source, SourceCounts};

/// One calendar day and what each source reported for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub counts: SourceCounts,
}

impl DayRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            counts: SourceCounts::ZERO,
        }
    }

    #[inline]
    pub fn count(&self, source: Source) -> u32 {
        self.counts.get(source)
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.counts.total()
    }

    /// Human date label, e.g. `Mon Jan 01 2024`.
    pub fn date_label(&self) -> String {
        self.date.format("%a %b %d %Y").to_string()
    }
}
