//! Category/score projection
//!
//! Maps the current selection (or its absence) to the view model shown in
//! the score navigation and the metric carousel. Metric definitions carry
//! static scale metadata (max, reference average, critical flag); only the
//! displayed value changes with the selection.

use serde::Serialize;

use crate::types::{
    CompatibilityMetrics, DetailedMetrics, DeviceRecord, MetricCategory, NetworkMetrics,
    RuntimeMetrics, Scores, StartupMetrics,
};

/// Fleet-average metrics shown when no device is selected
pub const AVERAGE_METRICS: DetailedMetrics = DetailedMetrics {
    startup: StartupMetrics {
        total: 4871.0,
        download: 492.0,
        injection: 1825.0,
        render: 3161.0,
    },
    runtime: RuntimeMetrics {
        fps: 58.0,
        jank: 2.1,
        cpu: 32.0,
        memory: 450.0,
    },
    network: NetworkMetrics {
        rtt: 45.0,
        throughput: 1.2,
        loss: 0.1,
    },
    compatibility: CompatibilityMetrics {
        js_error: 0,
        crash: 0,
    },
};

/// Fleet-average scores shown when no device is selected
pub const AVERAGE_SCORES: Scores = Scores {
    startup: 78,
    runtime: 90,
    network: 63,
    compatibility: 77,
};

/// Static definition of one metric card
#[derive(Debug, Clone, Copy)]
pub struct MetricDefinition {
    pub title: &'static str,
    pub unit: &'static str,
    /// Full-scale value of the gauge
    pub max: f64,
    /// Reference average marker
    pub avg: f64,
    pub is_critical: bool,
    /// Decimal places in the displayed value
    pub precision: usize,
    extract: fn(&DetailedMetrics) -> f64,
}

impl MetricDefinition {
    /// Read this metric's value out of a bundle
    pub fn value_of(&self, metrics: &DetailedMetrics) -> f64 {
        (self.extract)(metrics)
    }
}

macro_rules! metric {
    ($title:expr, $unit:expr, $max:expr, $avg:expr, $critical:expr, $precision:expr, $extract:expr) => {
        MetricDefinition {
            title: $title,
            unit: $unit,
            max: $max,
            avg: $avg,
            is_critical: $critical,
            precision: $precision,
            extract: $extract,
        }
    };
}

const STARTUP_METRICS: [MetricDefinition; 4] = [
    metric!("总启动耗时", "ms", 8860.0, 3320.0, false, 0, |m| m.startup.total),
    metric!("代码包下载耗时", "ms", 900.0, 500.0, false, 0, |m| m.startup.download),
    metric!("游戏代码注入耗时", "ms", 3700.0, 1400.0, true, 0, |m| m.startup.injection),
    metric!("首屏渲染耗时", "ms", 8200.0, 4250.0, false, 0, |m| m.startup.render),
];

const RUNTIME_METRICS: [MetricDefinition; 4] = [
    metric!("平均帧率", "FPS", 60.0, 55.0, false, 0, |m| m.runtime.fps),
    metric!("Jank卡顿率", "%", 10.0, 1.5, false, 1, |m| m.runtime.jank),
    metric!("CPU占用均值", "%", 100.0, 28.0, false, 0, |m| m.runtime.cpu),
    metric!("内存占用峰值", "MB", 1024.0, 380.0, true, 0, |m| m.runtime.memory),
];

const NETWORK_METRICS: [MetricDefinition; 3] = [
    metric!("平均RTT延迟", "ms", 200.0, 30.0, false, 0, |m| m.network.rtt),
    metric!("下行吞吐量", "MB/s", 5.0, 2.5, true, 1, |m| m.network.throughput),
    metric!("丢包率", "%", 5.0, 0.05, false, 2, |m| m.network.loss),
];

const COMPATIBILITY_METRICS: [MetricDefinition; 2] = [
    metric!("JS异常次数", "次", 10.0, 0.2, false, 0, |m| f64::from(
        m.compatibility.js_error
    )),
    metric!("Crash次数", "次", 1.0, 0.0, false, 0, |m| f64::from(
        m.compatibility.crash
    )),
];

/// Metric definitions for a category, in display order
pub fn metric_definitions(category: MetricCategory) -> &'static [MetricDefinition] {
    match category {
        MetricCategory::Startup => &STARTUP_METRICS,
        MetricCategory::Runtime => &RUNTIME_METRICS,
        MetricCategory::Network => &NETWORK_METRICS,
        MetricCategory::Compatibility => &COMPATIBILITY_METRICS,
    }
}

/// A metric card ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricView {
    pub title: &'static str,
    pub unit: &'static str,
    pub value: f64,
    /// Value formatted with the metric's precision
    pub display: String,
    pub max: f64,
    pub avg: f64,
    pub is_critical: bool,
}

impl MetricView {
    /// Gauge fill in `[0, 1]`
    pub fn fill_ratio(&self) -> f64 {
        if self.max > 0.0 {
            (self.value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Whether the reference-average marker should be shown
    pub fn has_avg(&self) -> bool {
        self.avg != 0.0
    }
}

/// One category slide: navigation label, score and metric cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub category: MetricCategory,
    pub label: &'static str,
    pub score: u8,
    pub metrics: Vec<MetricView>,
}

/// Full projection for the current selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub per_category: Vec<CategoryView>,
    /// True when showing fleet averages (no selection)
    pub is_average: bool,
}

impl Projection {
    pub fn category(&self, category: MetricCategory) -> &CategoryView {
        &self.per_category[category.index()]
    }
}

/// Project the selection (or the fleet averages) into category views
pub fn project(selection: Option<&DeviceRecord>) -> Projection {
    let (metrics, scores) = match selection {
        Some(record) => (&record.details, &record.scores),
        None => (&AVERAGE_METRICS, &AVERAGE_SCORES),
    };

    let per_category = MetricCategory::ALL
        .iter()
        .map(|&category| CategoryView {
            category,
            label: category.label(),
            score: scores.get(category),
            metrics: metric_definitions(category)
                .iter()
                .map(|def| metric_view(def, metrics))
                .collect(),
        })
        .collect();

    Projection {
        per_category,
        is_average: selection.is_none(),
    }
}

fn metric_view(def: &MetricDefinition, metrics: &DetailedMetrics) -> MetricView {
    let raw = def.value_of(metrics);
    let display = format!("{:.*}", def.precision, raw);
    MetricView {
        title: def.title,
        unit: def.unit,
        // Rounded like the displayed string so gauges agree with the label
        value: display.parse().unwrap_or(raw),
        display,
        max: def.max,
        avg: def.avg,
        is_critical: def.is_critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::generate_devices_seeded;

    #[test]
    fn test_no_selection_uses_average_scores() {
        let p = project(None);
        assert!(p.is_average);
        let scores: Vec<u8> = p.per_category.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![78, 90, 63, 77]);
    }

    #[test]
    fn test_no_selection_uses_average_metrics() {
        let p = project(None);
        let startup = p.category(MetricCategory::Startup);
        assert_eq!(startup.metrics[0].display, "4871");
        assert_eq!(startup.metrics[3].display, "3161");

        let runtime = p.category(MetricCategory::Runtime);
        assert_eq!(runtime.metrics[1].display, "2.1");

        let network = p.category(MetricCategory::Network);
        assert_eq!(network.metrics[1].display, "1.2");
        assert_eq!(network.metrics[2].display, "0.10");

        let compat = p.category(MetricCategory::Compatibility);
        assert_eq!(compat.metrics[0].display, "0");
        assert_eq!(compat.metrics[1].display, "0");
    }

    #[test]
    fn test_selection_replaces_scores_and_values() {
        let records = generate_devices_seeded(25, 11);
        let device = &records[3];
        let p = project(Some(device));

        assert!(!p.is_average);
        for view in &p.per_category {
            assert_eq!(view.score, device.scores.get(view.category));
            for (def, metric) in metric_definitions(view.category).iter().zip(&view.metrics) {
                let expected = format!("{:.*}", def.precision, def.value_of(&device.details));
                assert_eq!(metric.display, expected);
            }
        }
    }

    #[test]
    fn test_scale_metadata_is_static() {
        let records = generate_devices_seeded(25, 12);
        let avg = project(None);
        let sel = project(Some(&records[0]));
        for (a, s) in avg.per_category.iter().zip(&sel.per_category) {
            assert_eq!(a.label, s.label);
            assert_eq!(a.metrics.len(), s.metrics.len());
            for (ma, ms) in a.metrics.iter().zip(&s.metrics) {
                assert_eq!(ma.title, ms.title);
                assert_eq!(ma.unit, ms.unit);
                assert_eq!(ma.max, ms.max);
                assert_eq!(ma.avg, ms.avg);
                assert_eq!(ma.is_critical, ms.is_critical);
            }
        }
    }

    #[test]
    fn test_category_metric_counts() {
        let p = project(None);
        let counts: Vec<usize> = p.per_category.iter().map(|c| c.metrics.len()).collect();
        assert_eq!(counts, vec![4, 4, 3, 2]);
    }

    #[test]
    fn test_critical_flags() {
        let critical: Vec<&str> = MetricCategory::ALL
            .iter()
            .flat_map(|c| metric_definitions(*c))
            .filter(|d| d.is_critical)
            .map(|d| d.title)
            .collect();
        assert_eq!(critical, vec!["游戏代码注入耗时", "内存占用峰值", "下行吞吐量"]);
    }

    #[test]
    fn test_fill_ratio_is_capped() {
        let view = MetricView {
            title: "t",
            unit: "ms",
            value: 12_000.0,
            display: "12000".to_string(),
            max: 8860.0,
            avg: 3320.0,
            is_critical: false,
        };
        assert_eq!(view.fill_ratio(), 1.0);

        let zero_max = MetricView { max: 0.0, ..view };
        assert_eq!(zero_max.fill_ratio(), 0.0);
    }

    #[test]
    fn test_crash_average_marker_hidden() {
        let p = project(None);
        let compat = p.category(MetricCategory::Compatibility);
        assert!(compat.metrics[0].has_avg());
        assert!(!compat.metrics[1].has_avg());
    }
}
