//! Calendar-side data model: per-source daily counts fused into one complete
//! day-by-day record set, plus the grid cell each day occupies.
#![forbid(unsafe_code)]

pub mod fuse;
pub mod grid;
pub mod history;
pub mod provider;
pub mod record;
pub mod source;

pub use fuse::{DEFAULT_WINDOW_DAYS, DayCounts, FuseError, SourceData, fuse, window_start};
pub use grid::{GridCell, GriddedRecord, WeekStart, grid, grid_cell};
pub use provider::{ActivityProvider, PayloadFormat, ProviderError, collect_sources};
pub use record::DayRecord;
pub use source::{SOURCE_COUNT, Source, SourceCounts};
