//! Save and load through `HostSaveData` with the full statistics plugin.

use bevy::prelude::*;
use statistics::catalog::StatisticKind;
use statistics::selection::SelectionSettings;
use statistics::test_harness::TestHost;
use statistics::{SaveableRegistry, StatisticsRegistry};

use crate::saveable_keys::{validate_saveable_registry, EXPECTED_SAVEABLE_KEYS};
use crate::{HostSaveData, LoadStatisticsEvent, SaveStatisticsEvent, StatisticsSavePlugin};

fn host() -> TestHost {
    TestHost::with_plugin(StatisticsSavePlugin)
}

fn save(host: &mut TestHost) -> HostSaveData {
    host.world_mut().send_event(SaveStatisticsEvent);
    host.update();
    host.resource::<HostSaveData>().clone()
}

fn load(host: &mut TestHost, data: HostSaveData) {
    host.world_mut().insert_resource(data);
    host.world_mut().send_event(LoadStatisticsEvent);
    host.update();
}

#[test]
fn test_expected_keys_registered() {
    let host = host();
    let registry = host.resource::<SaveableRegistry>();
    for key in EXPECTED_SAVEABLE_KEYS {
        assert!(registry.contains(key), "'{key}' not registered");
    }
}

#[test]
fn test_history_and_selection_survive_save_and_load() {
    let mut original = host();
    original.tick(1);
    original.advance_days(1);
    original.tick(1);
    {
        let mut registry = original.resource_mut::<StatisticsRegistry>();
        registry.deselect_all();
        registry.set_selected(StatisticKind::BankBalance, true);
    }
    original.update();

    let data = save(&mut original);
    assert!(data.extensions.contains_key("snapshot_history"));
    assert!(data.extensions.contains_key("statistics_selection"));

    let mut restored = host();
    assert!(restored.history().is_empty());
    load(&mut restored, data);

    let expected: Vec<_> = original.history().iter().cloned().collect();
    let actual: Vec<_> = restored.history().iter().cloned().collect();
    assert_eq!(actual.len(), 2);
    for (a, b) in actual.iter().zip(&expected) {
        assert_eq!(a.snapshot_date, b.snapshot_date);
        assert_eq!(a.population, b.population);
        assert_eq!(a.residential_level2, b.residential_level2);
    }

    let selected: Vec<StatisticKind> = restored
        .registry()
        .selected_statistics()
        .map(|s| s.kind)
        .collect();
    assert_eq!(selected, vec![StatisticKind::BankBalance]);
}

#[test]
fn test_empty_selection_survives_save_and_load() {
    let mut original = host();
    assert!(original.registry().selected_count() > 0);
    original
        .resource_mut::<StatisticsRegistry>()
        .deselect_all();
    original.update();

    let data = save(&mut original);
    assert!(data.extensions.contains_key("statistics_selection"));

    let mut restored = host();
    assert!(restored.registry().selected_count() > 0);
    load(&mut restored, data);

    assert_eq!(restored.registry().selected_count(), 0);
    assert!(restored.resource::<SelectionSettings>().initialized);
}

#[test]
fn test_corrupt_history_blob_loads_empty() {
    let mut host = host();
    host.tick(1);
    assert_eq!(host.history().len(), 1);

    let mut data = HostSaveData::default();
    data.extensions
        .insert("snapshot_history".to_string(), vec![1, 2, 3]);
    load(&mut host, data);

    assert!(host.history().is_empty());
}

#[test]
fn test_missing_selection_falls_back_to_defaults() {
    let mut host = host();
    {
        let mut registry = host.resource_mut::<StatisticsRegistry>();
        registry.deselect_all();
        registry.set_selected(StatisticKind::CrimeRate, true);
    }
    load(&mut host, HostSaveData::default());

    let selected: Vec<&str> = host
        .registry()
        .selected_statistics()
        .map(|s| s.kind.field_name())
        .collect();
    assert_eq!(
        selected,
        vec![
            "electricity_consumption_percent",
            "water_consumption_percent",
            "population"
        ]
    );
}

#[test]
fn test_save_drops_stale_history_blob() {
    let mut host = host();
    host.world_mut()
        .resource_mut::<HostSaveData>()
        .extensions
        .insert("snapshot_history".to_string(), vec![0xFF; 8]);

    let data = save(&mut host);
    assert!(!data.extensions.contains_key("snapshot_history"));
    assert!(data.extensions.contains_key("statistics_selection"));
}

#[test]
fn test_save_leaves_foreign_extensions_alone() {
    let mut host = host();
    host.world_mut()
        .resource_mut::<HostSaveData>()
        .extensions
        .insert("another_mod".to_string(), vec![9, 9]);

    let data = save(&mut host);
    assert_eq!(data.extensions.get("another_mod"), Some(&vec![9, 9]));
}

#[test]
#[should_panic(expected = "SaveableRegistry drift detected")]
fn test_validate_panics_on_missing_key() {
    let mut world = World::new();
    let mut registry = SaveableRegistry::default();
    registry.register::<SelectionSettings>();
    world.insert_resource(registry);
    let _ = world.run_system_cached(validate_saveable_registry);
}
