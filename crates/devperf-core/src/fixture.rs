//! Synthetic device fixtures
//!
//! Produces a fleet of plausible device records from a fixed catalog of
//! device models. Scores and detailed metrics are sampled from
//! tier-conditioned ranges so high-tier devices look measurably better
//! than mid/low-tier ones.
//!
//! The generator takes any [`rand::Rng`]; use [`generate_devices_seeded`]
//! when reproducible output is needed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{
    CompatibilityMetrics, DetailedMetrics, DeviceRecord, NetworkMetrics, RuntimeMetrics, Scores,
    StartupMetrics, Tier,
};

/// Number of records generated for a dashboard session
pub const FIXTURE_COUNT: usize = 25;

/// A catalog entry: model name, OS label and tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceModel {
    pub name: &'static str,
    pub os: &'static str,
    pub tier: Tier,
}

/// Device models cycled through when generating fixtures
pub const DEVICE_CATALOG: [DeviceModel; 12] = [
    DeviceModel {
        name: "iPhone 13 Pro",
        os: "IOS-15.0",
        tier: Tier::High,
    },
    DeviceModel {
        name: "iPhone 12",
        os: "IOS-14.7",
        tier: Tier::High,
    },
    DeviceModel {
        name: "iPhone X",
        os: "IOS-13.6",
        tier: Tier::Mid,
    },
    DeviceModel {
        name: "Galaxy S21",
        os: "Android-12",
        tier: Tier::High,
    },
    DeviceModel {
        name: "Pixel 5",
        os: "Android-11",
        tier: Tier::Mid,
    },
    DeviceModel {
        name: "Oppo Find X3",
        os: "Android-11",
        tier: Tier::High,
    },
    DeviceModel {
        name: "Vivo X60",
        os: "Android-11",
        tier: Tier::Mid,
    },
    DeviceModel {
        name: "Huawei P40",
        os: "Android-10",
        tier: Tier::Mid,
    },
    DeviceModel {
        name: "Xiaomi 11",
        os: "Android-11",
        tier: Tier::High,
    },
    DeviceModel {
        name: "Redmi Note 9",
        os: "Android-10",
        tier: Tier::Low,
    },
    DeviceModel {
        name: "Galaxy A52",
        os: "Android-11",
        tier: Tier::Low,
    },
    DeviceModel {
        name: "iPhone 8",
        os: "IOS-12.4",
        tier: Tier::Low,
    },
];

/// Generate `count` device records using the thread-local RNG
pub fn generate_devices(count: usize) -> Vec<DeviceRecord> {
    generate_devices_with(count, &mut rand::thread_rng())
}

/// Generate `count` device records reproducibly from `seed`
pub fn generate_devices_seeded(count: usize, seed: u64) -> Vec<DeviceRecord> {
    generate_devices_with(count, &mut StdRng::seed_from_u64(seed))
}

/// Generate `count` device records drawing randomness from `rng`
///
/// Models are picked cyclically from [`DEVICE_CATALOG`], so record `i`
/// always has model `DEVICE_CATALOG[i % 12]` regardless of the RNG.
pub fn generate_devices_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<DeviceRecord> {
    (0..count)
        .map(|i| generate_record(&DEVICE_CATALOG[i % DEVICE_CATALOG.len()], rng))
        .collect()
}

fn generate_record<R: Rng + ?Sized>(model: &DeviceModel, rng: &mut R) -> DeviceRecord {
    let tier = model.tier;
    let is_slow = tier == Tier::Low || (tier == Tier::Mid && rng.gen::<f64>() > 0.7);
    let scores = generate_scores(tier, rng);
    let details = generate_details(tier, rng);

    DeviceRecord {
        id: format!("7f{}", rng.gen_range(0..10_000_000u32)),
        os: model.os.to_string(),
        model: model.name.to_string(),
        tier,
        startup_time: format!("{}ms", (details.startup.total / 20.0).floor() as u64),
        render_time: format!("{}ms", details.startup.render.floor() as u64),
        interactive_time: format!("{}", rng.gen_range(0..200u32)),
        is_slow,
        scores,
        details,
    }
}

fn generate_scores<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> Scores {
    let base = tier.baseline_score();

    Scores {
        startup: clamp_score(base + rng.gen_range(-5..10)),
        runtime: clamp_score(base + 5 + rng.gen_range(-5..5)),
        // Network varies independently of tier
        network: clamp_score(60 + rng.gen_range(0..40)),
        compatibility: if rng.gen::<f64>() > 0.9 { 80 } else { 100 },
    }
}

fn generate_details<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> DetailedMetrics {
    let high = tier == Tier::High;

    let startup = StartupMetrics {
        total: if high {
            2000.0 + rng.gen::<f64>() * 1000.0
        } else {
            4000.0 + rng.gen::<f64>() * 3000.0
        },
        download: f64::from(300 + rng.gen_range(0..200u32)),
        injection: if high {
            800.0 + rng.gen::<f64>() * 400.0
        } else {
            1500.0 + rng.gen::<f64>() * 1000.0
        },
        render: if high {
            1000.0 + rng.gen::<f64>() * 500.0
        } else {
            2500.0 + rng.gen::<f64>() * 2000.0
        },
    };

    let runtime = RuntimeMetrics {
        fps: if high {
            58.0 + rng.gen::<f64>() * 2.0
        } else {
            40.0 + rng.gen::<f64>() * 15.0
        },
        jank: if high {
            rng.gen::<f64>()
        } else {
            rng.gen::<f64>() * 5.0
        },
        cpu: f64::from(20 + rng.gen_range(0..40u32)),
        memory: f64::from(200 + rng.gen_range(0..600u32)),
    };

    let network = NetworkMetrics {
        rtt: f64::from(20 + rng.gen_range(0..80u32)),
        throughput: round_to(1.0 + rng.gen::<f64>() * 4.0, 1),
        loss: round_to(rng.gen::<f64>() * 0.5, 2),
    };

    let compatibility = CompatibilityMetrics {
        js_error: if rng.gen::<f64>() > 0.8 {
            rng.gen_range(0..3)
        } else {
            0
        },
        crash: if rng.gen::<f64>() > 0.95 { 1 } else { 0 },
    };

    DetailedMetrics {
        startup,
        runtime,
        network,
        compatibility,
    }
}

fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
