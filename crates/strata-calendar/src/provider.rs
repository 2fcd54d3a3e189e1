//! Boundary with the data fetchers. Each platform's payload is normalized to a
//! plain `{YYYY-MM-DD -> count}` mapping, and any failure is replaced by empty
//! data before fusion.

use std::fs;
use std::path::PathBuf;

use chrono::DateTime;
use serde::Deserialize;

use crate::fuse::{DayCounts, SourceData};
use crate::source::Source;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Something that can deliver one source's daily counts, possibly failing.
pub trait ActivityProvider {
    fn source(&self) -> Source;
    fn fetch(&self) -> Result<DayCounts, ProviderError>;
}

/// Wire shape of a day-count payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// `{"contributions": [{"date": "YYYY-MM-DD", "count": n}, ...]}`
    Contributions,
    /// `[{"timestamp": unix_seconds, "contributions": n}, ...]`
    Heatmap,
}

impl PayloadFormat {
    /// Format each platform publishes its calendar in.
    pub fn native_for(source: Source) -> PayloadFormat {
        match source {
            Source::GitHub => PayloadFormat::Contributions,
            Source::Gitea => PayloadFormat::Heatmap,
        }
    }
}

#[derive(Deserialize)]
struct ContributionsPayload {
    #[serde(default)]
    contributions: Vec<ContributionDay>,
}

#[derive(Deserialize)]
struct ContributionDay {
    date: String,
    count: u32,
}

#[derive(Deserialize)]
struct HeatmapEntry {
    timestamp: i64,
    contributions: u32,
}

/// Normalizes a payload to day counts.
///
/// Contribution days are taken as-is (one entry per day). Heatmap buckets are
/// assigned to their UTC day and summed, since several buckets may share a day.
pub fn parse_payload(format: PayloadFormat, json: &str) -> Result<DayCounts, ProviderError> {
    let mut out = DayCounts::new();
    match format {
        PayloadFormat::Contributions => {
            let payload: ContributionsPayload = serde_json::from_str(json)?;
            for day in payload.contributions {
                out.insert(day.date, day.count);
            }
        }
        PayloadFormat::Heatmap => {
            let entries: Vec<HeatmapEntry> = serde_json::from_str(json)?;
            for e in entries {
                let Some(at) = DateTime::from_timestamp(e.timestamp, 0) else {
                    log::debug!(target: "provider", "skipping unrepresentable timestamp {}", e.timestamp);
                    continue;
                };
                let key = at.date_naive().format("%Y-%m-%d").to_string();
                let slot = out.entry(key).or_insert(0);
                *slot = slot.saturating_add(e.contributions);
            }
        }
    }
    Ok(out)
}

/// Reads a payload file from disk.
pub struct JsonFileProvider {
    pub source: Source,
    pub path: PathBuf,
    pub format: PayloadFormat,
}

impl JsonFileProvider {
    pub fn new(source: Source, path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            path: path.into(),
            format: PayloadFormat::native_for(source),
        }
    }

    pub fn with_format(mut self, format: PayloadFormat) -> Self {
        self.format = format;
        self
    }
}

impl ActivityProvider for JsonFileProvider {
    fn source(&self) -> Source {
        self.source
    }

    fn fetch(&self) -> Result<DayCounts, ProviderError> {
        let s = fs::read_to_string(&self.path).map_err(|source| ProviderError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_payload(self.format, &s)
    }
}

/// Already-fetched data, or a stand-in for a source that never answered.
pub struct StaticProvider {
    pub source: Source,
    pub result: Result<DayCounts, String>,
}

impl ActivityProvider for StaticProvider {
    fn source(&self) -> Source {
        self.source
    }

    fn fetch(&self) -> Result<DayCounts, ProviderError> {
        self.result.clone().map_err(ProviderError::Unavailable)
    }
}

/// Runs every provider; failures are logged and become empty mappings, so the
/// result always carries an entry for each provider's source.
pub fn collect_sources<'a>(providers: impl IntoIterator<Item = &'a dyn ActivityProvider>) -> SourceData {
    let mut out = SourceData::new();
    for p in providers {
        let source = p.source();
        let days = match p.fetch() {
            Ok(days) => {
                log::debug!(target: "provider", "source={} days={}", source, days.len());
                days
            }
            Err(e) => {
                log::warn!(target: "provider", "source={} unavailable, using empty data: {}", source, e);
                DayCounts::new()
            }
        };
        out.entry(source).or_default().extend(days);
    }
    out
}
