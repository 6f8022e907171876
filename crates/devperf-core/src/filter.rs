//! Filter engine for the device table
//!
//! Three independent selections form the active query. Filtering is a pure,
//! order-preserving function over the fixture slice and is recomputed in
//! full whenever any selection changes.
//!
//! The run-mode filter is accepted everywhere but never excludes a record:
//! device records carry no run-mode attribute.

use serde::{Deserialize, Serialize};

use crate::types::DeviceRecord;

/// Device tier filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierFilter {
    #[default]
    All,
    High,
    Mid,
    Low,
}

impl TierFilter {
    pub const ALL: [TierFilter; 4] = [
        TierFilter::All,
        TierFilter::High,
        TierFilter::Mid,
        TierFilter::Low,
    ];

    /// Filter value compared against the lower-cased record tier
    pub fn value(&self) -> &'static str {
        match self {
            TierFilter::All => "all",
            TierFilter::High => "high",
            TierFilter::Mid => "mid",
            TierFilter::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierFilter::All => "全部",
            TierFilter::High => "高档",
            TierFilter::Mid => "中档",
            TierFilter::Low => "低档",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.value().eq_ignore_ascii_case(value))
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }

    fn matches(&self, record: &DeviceRecord) -> bool {
        match self {
            TierFilter::All => true,
            _ => record.tier.as_str().to_lowercase() == self.value(),
        }
    }
}

/// Operating system filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFilter {
    #[default]
    All,
    Android,
    Ios,
}

impl OsFilter {
    pub const ALL: [OsFilter; 3] = [OsFilter::All, OsFilter::Android, OsFilter::Ios];

    /// Substring searched for in the lower-cased OS label
    pub fn value(&self) -> &'static str {
        match self {
            OsFilter::All => "all",
            OsFilter::Android => "android",
            OsFilter::Ios => "ios",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OsFilter::All => "全部",
            OsFilter::Android => "Android",
            OsFilter::Ios => "IOS",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.value().eq_ignore_ascii_case(value))
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }

    fn matches(&self, record: &DeviceRecord) -> bool {
        match self {
            OsFilter::All => true,
            _ => record.os.to_lowercase().contains(self.value()),
        }
    }
}

/// Run mode filter (accepted, never applied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModeFilter {
    #[serde(rename = "normal")]
    Normal,
    #[default]
    #[serde(rename = "high_perf")]
    HighPerformance,
}

impl ModeFilter {
    pub const ALL: [ModeFilter; 2] = [ModeFilter::Normal, ModeFilter::HighPerformance];

    pub fn value(&self) -> &'static str {
        match self {
            ModeFilter::Normal => "normal",
            ModeFilter::HighPerformance => "high_perf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModeFilter::Normal => "普通模式",
            ModeFilter::HighPerformance => "高性能/高性能+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.value().eq_ignore_ascii_case(value))
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// The active query: one selection per filter row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    pub tier: TierFilter,
    pub os: OsFilter,
    pub mode: ModeFilter,
}

impl Filters {
    /// Apply these filters to `records`
    pub fn apply<'a>(&self, records: &'a [DeviceRecord]) -> Vec<&'a DeviceRecord> {
        filter_records(records, self.tier, self.os, self.mode)
    }

    /// Indices into `records` of the records that pass these filters
    pub fn matching_indices(&self, records: &[DeviceRecord]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.tier.matches(r) && self.os.matches(r))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Keep the records matching the tier and OS filters, in original order
///
/// `_mode` is part of the query but there is no run-mode field to compare
/// it against, so every record passes it.
pub fn filter_records(
    records: &[DeviceRecord],
    tier: TierFilter,
    os: OsFilter,
    _mode: ModeFilter,
) -> Vec<&DeviceRecord> {
    records
        .iter()
        .filter(|r| tier.matches(r) && os.matches(r))
        .collect()
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, step: isize) -> T {
    let len = options.len() as isize;
    let pos = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    options[(pos + step).rem_euclid(len) as usize]
}
