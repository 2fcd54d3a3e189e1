use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const SOURCE_COUNT: usize = 2;

/// Upstream code-hosting platform supplying daily counts.
///
/// Declaration order is the stacking order: earlier sources are drawn beneath
/// later ones within a day's column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Gitea = 0,
    GitHub = 1,
}

impl Source {
    /// All sources, bottom of the stack first.
    pub const ALL: [Source; SOURCE_COUNT] = [Source::Gitea, Source::GitHub];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Source::Gitea => "Gitea",
            Source::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gitea" => Ok(Source::Gitea),
            "github" => Ok(Source::GitHub),
            other => Err(format!("unknown source: {other}")),
        }
    }
}

/// Non-negative per-source counts for one day. Sources never reported read as 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceCounts {
    counts: [u32; SOURCE_COUNT],
}

impl SourceCounts {
    pub const ZERO: SourceCounts = SourceCounts {
        counts: [0; SOURCE_COUNT],
    };

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Source, u32)>) -> Self {
        let mut out = Self::ZERO;
        for (s, n) in pairs {
            out.set(s, n);
        }
        out
    }

    #[inline]
    pub fn get(&self, source: Source) -> u32 {
        self.counts[source.index()]
    }

    #[inline]
    pub fn set(&mut self, source: Source, count: u32) {
        self.counts[source.index()] = count;
    }

    /// Sum across sources, saturating.
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, &n| acc.saturating_add(n))
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// `(source, count)` pairs in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = (Source, u32)> + '_ {
        Source::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

// Serialized as a map keyed by source name, e.g. {"gitea": 3, "github": 5}.
impl Serialize for SourceCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(SOURCE_COUNT))?;
        for (s, n) in self.iter() {
            map.serialize_entry(&s, &n)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SourceCounts {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = std::collections::BTreeMap::<Source, u32>::deserialize(deserializer)?;
        Ok(SourceCounts::from_pairs(raw))
    }
}
