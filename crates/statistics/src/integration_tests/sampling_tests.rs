//! Snapshot recording driven by the fixed-tick building tally.

use chrono::{NaiveDate, Timelike};

use crate::config::StatisticsConfig;
use crate::host::ZoneKind;
use crate::sampling::BuildingTally;
use crate::snapshot::ContentPacks;
use crate::test_harness::{FakeCity, TestHost};

#[test]
fn test_first_tick_records_snapshot_after_full_pass() {
    let mut host = TestHost::new();
    assert!(host.history().is_empty());

    host.tick(1);

    assert_eq!(host.history().len(), 1);
    let snapshot = host.history().latest().expect("snapshot recorded");
    assert_eq!(snapshot.population, 1200);
    assert_eq!(snapshot.residential_level2, 10);
    assert_eq!(snapshot.commercial_level1, 4);
    assert_eq!(snapshot.residential_buildings(), 10);
    assert_eq!(snapshot.zone_buildings_total(), 14);
    assert_eq!(snapshot.residential_average_level(), 2.0);
}

#[test]
fn test_no_snapshot_until_tally_pass_completes() {
    let city = FakeCity::small().with_empty_slots(100);
    let config = StatisticsConfig {
        tally_batch_size: 16,
        ..Default::default()
    };
    let mut host = TestHost::with_city_and_config(city, config);

    // 120 slots at 16 per tick: the eighth tick finishes the pass.
    host.tick(7);
    assert!(host.history().is_empty());
    assert_eq!(host.resource::<BuildingTally>().0.cycles_completed(), 0);

    host.tick(1);
    assert_eq!(host.history().len(), 1);
}

#[test]
fn test_snapshots_follow_configured_interval() {
    let config = StatisticsConfig {
        snapshot_interval_days: 7,
        ..Default::default()
    };
    let mut host = TestHost::with_config(config);
    host.tick(1);
    assert_eq!(host.history().len(), 1);

    host.advance_days(6);
    host.tick(3);
    assert_eq!(host.history().len(), 1, "interval not yet elapsed");

    host.advance_days(1);
    host.tick(1);
    assert_eq!(host.history().len(), 2);
}

#[test]
fn test_snapshot_dates_are_game_days() {
    let mut host = TestHost::new();
    let afternoon = NaiveDate::from_ymd_opt(2031, 6, 15)
        .and_then(|d| d.and_hms_opt(15, 42, 10))
        .expect("valid date");
    host.set_date(afternoon);
    host.tick(1);

    let date = host.history().latest().expect("snapshot").snapshot_date;
    assert_eq!(date.date(), afternoon.date());
    assert_eq!(date.hour(), 0);
    assert_eq!(date.minute(), 0);
}

#[test]
fn test_inactive_packs_gate_recorded_values() {
    let city = FakeCity::small().with_packs(ContentPacks {
        snowfall: false,
        ..ContentPacks::all()
    });
    let mut host = TestHost::with_city(city);
    host.tick(1);

    let snapshot = host.history().latest().expect("snapshot");
    assert_eq!(snapshot.tram_residents, None, "snowfall inactive");
    assert_eq!(snapshot.tram_total(), None);
    assert_eq!(snapshot.campus_students, Some(300), "campus active");
}

#[test]
fn test_abandoned_buildings_counted() {
    let city = FakeCity::small().with_abandoned(3);
    let mut host = TestHost::with_city(city);
    host.tick(1);

    let snapshot = host.history().latest().expect("snapshot");
    assert_eq!(snapshot.abandoned_buildings, 3);
    assert_eq!(snapshot.industrial_level1, 0, "abandoned buildings are not levelled");
}

#[test]
fn test_city_changes_show_up_after_next_pass() {
    let mut host = TestHost::new();
    host.tick(1);

    host.replace_city(FakeCity::small().with_buildings(ZoneKind::Office, 3, 5));
    host.advance_days(1);
    host.tick(1);

    assert_eq!(host.history().len(), 2);
    let latest = host.history().latest().expect("snapshot");
    assert_eq!(latest.office_level3, 5);
}

#[test]
fn test_without_city_source_nothing_is_sampled() {
    let mut host = TestHost::without_city();
    host.tick(5);
    assert!(host.history().is_empty());
    assert_eq!(host.resource::<BuildingTally>().0.cycles_completed(), 0);
}

#[test]
fn test_history_limit_applies() {
    let config = StatisticsConfig {
        max_snapshots: 3,
        ..Default::default()
    };
    let mut host = TestHost::with_config(config);
    for _ in 0..5 {
        host.tick(1);
        host.advance_days(1);
    }
    assert_eq!(host.history().len(), 3);
}
