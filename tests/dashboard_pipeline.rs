//! End-to-end pipeline tests: fixture → filters → pagination → projection
//!
//! Run with: cargo test --test dashboard_pipeline

use devperf_app::config::Settings;
use devperf_app::state::AppState;
use devperf_app::{Engine, EngineEvent, Message};
use devperf_core::{
    generate_devices_seeded, project, DeviceRecord, MetricCategory, Tier, TierFilter,
    AVERAGE_SCORES,
};
use devperf_dash::headless::command::{parse_command, HeadlessCommand};
use devperf_dash::headless::HeadlessEvent;

const SEED: u64 = 42;

fn seeded_engine() -> Engine {
    let state = AppState::with_records(generate_devices_seeded(25, SEED), Settings::default());
    let mut engine = Engine::from_state(state);
    engine.state.carousel.set_viewport_width(80);
    engine
}

/// Feed a headless command line through the engine
fn run_line(engine: &mut Engine, line: &str) {
    match parse_command(line).expect("valid command") {
        Some(HeadlessCommand::Dispatch(msg)) => {
            engine.process_message(msg);
            while engine.state.carousel.is_animating() {
                engine.process_message(Message::Tick);
            }
        }
        Some(HeadlessCommand::Snapshot) | None => {}
    }
}

#[test]
fn test_high_tier_second_page() {
    let mut engine = seeded_engine();
    run_line(&mut engine, "tier high");
    run_line(&mut engine, "page 2");

    let highs: Vec<&DeviceRecord> = engine
        .state
        .records()
        .iter()
        .filter(|r| r.tier == Tier::High)
        .collect();
    let visible = engine.state.visible_records();

    assert_eq!(engine.state.page(), 2);
    assert!(visible.len() <= 10);
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|r| r.tier == Tier::High));
    assert_eq!(visible[0].id, highs[10].id);
}

#[test]
fn test_filter_change_resets_page_and_emits_events() {
    let mut engine = seeded_engine();
    let mut events = engine.subscribe();

    run_line(&mut engine, "page 3");
    assert_eq!(engine.state.page(), 3);

    run_line(&mut engine, "os android");
    assert_eq!(engine.state.page(), 1);

    let received: Vec<EngineEvent> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    assert!(received
        .iter()
        .any(|e| matches!(e, EngineEvent::PageChanged { page: 3, .. })));
    assert!(received
        .iter()
        .any(|e| matches!(e, EngineEvent::FiltersChanged { .. })));
    assert!(engine
        .state
        .visible_records()
        .iter()
        .all(|r| r.os.to_lowercase().contains("android")));
}

#[test]
fn test_compare_then_clear_round_trip() {
    let mut engine = seeded_engine();
    run_line(&mut engine, "compare 1");

    let record = engine
        .state
        .selected_record()
        .expect("first row compared")
        .clone();
    let projection = engine.state.projection();
    for category in MetricCategory::ALL {
        assert_eq!(
            projection.category(category).score,
            record.scores.get(category)
        );
    }
    assert_eq!(projection, project(Some(&record)));

    run_line(&mut engine, "clear");
    let projection = engine.state.projection();
    assert!(projection.is_average);
    for category in MetricCategory::ALL {
        assert_eq!(
            projection.category(category).score,
            AVERAGE_SCORES.get(category)
        );
    }
}

#[test]
fn test_category_selection_and_manual_scroll() {
    let mut engine = seeded_engine();

    run_line(&mut engine, "category 4");
    assert_eq!(engine.state.carousel.active(), MetricCategory::Compatibility);
    assert_eq!(engine.state.carousel.offset(), 240);

    // Half a slide back rounds up to the nearer later slide
    run_line(&mut engine, "scroll -40");
    assert_eq!(engine.state.carousel.offset(), 200);
    assert_eq!(engine.state.carousel.active(), MetricCategory::Compatibility);

    run_line(&mut engine, "scroll -41");
    assert_eq!(engine.state.carousel.active(), MetricCategory::Network);
}

#[test]
fn test_snapshot_reflects_state() {
    let mut engine = seeded_engine();
    run_line(&mut engine, "tier high");
    run_line(&mut engine, "compare 2");

    let json = serde_json::to_value(HeadlessEvent::snapshot(&engine.state)).expect("serialize");
    let expected = engine
        .state
        .selected_record()
        .map(|r| r.id.clone())
        .expect("selection");

    assert_eq!(json["event"], "snapshot");
    assert_eq!(json["filters"]["tier"], "high");
    assert_eq!(json["selection"], expected.as_str());
    assert_eq!(json["matching"], engine.state.filtered_count());
    assert_eq!(engine.state.filters().tier, TierFilter::High);
}
