//! Selection changes flow into `SelectionSettings` and survive a save/load
//! through the extension map.

use crate::catalog::{CategoryKind, StatisticKind};
use crate::registry::StatisticsRegistry;
use crate::selection::SelectionSettings;
use crate::test_harness::TestHost;
use crate::SaveableRegistry;

#[test]
fn test_registry_changes_sync_into_settings() {
    let mut host = TestHost::new();
    {
        let mut registry = host.resource_mut::<StatisticsRegistry>();
        registry.deselect_all();
        registry.set_selected(StatisticKind::CrimeRate, true);
        registry.set_expanded(CategoryKind::Crime, true);
    }
    host.update();

    let settings = host.resource::<SelectionSettings>();
    assert_eq!(settings.selected, vec!["crime_rate".to_string()]);
    assert_eq!(settings.expanded, vec!["Crime".to_string()]);
}

#[test]
fn test_selection_survives_extension_map_round_trip() {
    let mut host = TestHost::new();
    {
        let mut registry = host.resource_mut::<StatisticsRegistry>();
        registry.deselect_all();
        registry.set_selected(StatisticKind::BankBalance, true);
    }
    host.update();

    let extensions = {
        let world = host.world_mut();
        world.resource_scope(|world, saveables: bevy::prelude::Mut<SaveableRegistry>| {
            saveables.save_all(world)
        })
    };
    assert!(extensions.contains_key("statistics_selection"));

    let mut restored = TestHost::new();
    restored
        .world_mut()
        .resource_scope(|world, saveables: bevy::prelude::Mut<SaveableRegistry>| {
            saveables.load_all(world, &extensions);
        });
    assert_eq!(
        restored.resource::<SelectionSettings>().selected,
        vec!["bank_balance".to_string()]
    );
}

#[test]
fn test_empty_registry_does_not_clobber_settings() {
    let mut host = TestHost::with_colors(crate::colors::ColorTable::default());
    host.world_mut().insert_resource(SelectionSettings {
        initialized: true,
        selected: vec!["population".to_string()],
        expanded: Vec::new(),
    });
    host.update();
    assert_eq!(
        host.resource::<SelectionSettings>().selected,
        vec!["population".to_string()]
    );
}
