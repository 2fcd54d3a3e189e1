use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::record::DayRecord;

/// First day of a calendar week, which decides the row of each weekday.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Row of `date` in `[0, 6]`.
    #[inline]
    pub fn row_of(self, date: NaiveDate) -> u8 {
        let wd = date.weekday();
        let n = match self {
            WeekStart::Sunday => wd.num_days_from_sunday(),
            WeekStart::Monday => wd.num_days_from_monday(),
        };
        n as u8
    }
}

/// Calendar position of a day: `column` = week since the window start,
/// `row` = weekday.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub column: u32,
    pub row: u8,
}

impl GridCell {
    #[inline]
    pub const fn new(column: u32, row: u8) -> Self {
        Self { column, row }
    }

    /// Isometric depth: cells with a larger sum sit nearer the viewer.
    #[inline]
    pub fn depth(self) -> u32 {
        self.column + self.row as u32
    }
}

/// A record's index in the fused set plus the cell it occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GriddedRecord {
    pub index: usize,
    pub cell: GridCell,
}

/// Cell of `date` in a window starting at `window_start`. Columns are whole
/// calendar weeks, so the first column is partial unless the window starts on
/// `week_start`. Dates before the window clamp to column 0.
pub fn grid_cell(date: NaiveDate, window_start: NaiveDate, week_start: WeekStart) -> GridCell {
    let lead = week_start.row_of(window_start) as i64;
    let offset = (date - window_start).num_days().max(0);
    let column = u32::try_from((offset + lead) / 7).unwrap_or(u32::MAX);
    GridCell::new(column, week_start.row_of(date))
}

/// Cells for a fused record set (ascending by date), in input order.
pub fn grid(records: &[DayRecord], week_start: WeekStart) -> Vec<GriddedRecord> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let start = first.date;
    records
        .iter()
        .enumerate()
        .map(|(index, rec)| GriddedRecord {
            index,
            cell: grid_cell(rec.date, start, week_start),
        })
        .collect()
}
