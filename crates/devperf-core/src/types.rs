//! Core domain types: device records, tiers, scores and detailed metrics

use serde::{Deserialize, Serialize};

/// Coarse device performance class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    High,
    Mid,
    Low,
}

impl Tier {
    /// Canonical identifier ("High", "Mid", "Low")
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "High",
            Tier::Mid => "Mid",
            Tier::Low => "Low",
        }
    }

    /// Display label shown in the table badge
    pub fn label(&self) -> &'static str {
        match self {
            Tier::High => "高档",
            Tier::Mid => "中档",
            Tier::Low => "低档",
        }
    }

    /// Baseline score that generated startup/runtime scores hover around
    pub fn baseline_score(&self) -> i32 {
        match self {
            Tier::High => 85,
            Tier::Mid => 70,
            Tier::Low => 50,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four metric groups shown in the score navigation and carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    #[default]
    Startup,
    Runtime,
    Network,
    Compatibility,
}

impl MetricCategory {
    /// All categories in carousel order
    pub const ALL: [MetricCategory; 4] = [
        MetricCategory::Startup,
        MetricCategory::Runtime,
        MetricCategory::Network,
        MetricCategory::Compatibility,
    ];

    /// Position in the carousel (0-based)
    pub fn index(&self) -> usize {
        match self {
            MetricCategory::Startup => 0,
            MetricCategory::Runtime => 1,
            MetricCategory::Network => 2,
            MetricCategory::Compatibility => 3,
        }
    }

    /// Category at a carousel position, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable identifier used in events and headless commands
    pub fn id(&self) -> &'static str {
        match self {
            MetricCategory::Startup => "startup",
            MetricCategory::Runtime => "runtime",
            MetricCategory::Network => "network",
            MetricCategory::Compatibility => "compatibility",
        }
    }

    /// Parse a category identifier (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(id))
    }

    /// Score navigation label
    pub fn label(&self) -> &'static str {
        match self {
            MetricCategory::Startup => "启动性能分",
            MetricCategory::Runtime => "运行性能",
            MetricCategory::Network => "网络性能",
            MetricCategory::Compatibility => "兼容性",
        }
    }
}

/// Per-category 0–100 scores for a device (or the fleet average)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub startup: u8,
    pub runtime: u8,
    pub network: u8,
    pub compatibility: u8,
}

impl Scores {
    pub fn get(&self, category: MetricCategory) -> u8 {
        match category {
            MetricCategory::Startup => self.startup,
            MetricCategory::Runtime => self.runtime,
            MetricCategory::Network => self.network,
            MetricCategory::Compatibility => self.compatibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartupMetrics {
    /// Total startup time in ms
    pub total: f64,
    /// Code package download time in ms
    pub download: f64,
    /// Code injection time in ms
    pub injection: f64,
    /// First screen render time in ms
    pub render: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuntimeMetrics {
    pub fps: f64,
    /// Jank rate in percent
    pub jank: f64,
    /// Mean CPU usage in percent
    pub cpu: f64,
    /// Peak memory in MB
    pub memory: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Round-trip time in ms
    pub rtt: f64,
    /// Downstream throughput in MB/s
    pub throughput: f64,
    /// Packet loss in percent
    pub loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityMetrics {
    pub js_error: u32,
    pub crash: u32,
}

/// Raw sub-measurements underlying each category score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedMetrics {
    pub startup: StartupMetrics,
    pub runtime: RuntimeMetrics,
    pub network: NetworkMetrics,
    pub compatibility: CompatibilityMetrics,
}

/// A single test device with its measured results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: String,
    /// OS label, e.g. "IOS-15.0" or "Android-11"
    pub os: String,
    pub model: String,
    pub tier: Tier,
    /// Display string, e.g. "142ms"
    pub startup_time: String,
    /// Display string, e.g. "1203ms"
    pub render_time: String,
    /// Display string without unit
    pub interactive_time: String,
    /// Highlighted in red in the table
    pub is_slow: bool,
    pub scores: Scores,
    pub details: DetailedMetrics,
}
