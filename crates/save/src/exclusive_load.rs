use bevy::prelude::*;
use statistics::selection::SelectionSettings;
use statistics::{SaveableRegistry, SnapshotHistory, StatisticsConfig, StatisticsRegistry};

use crate::save_error::SaveError;
use crate::save_plugin::HostSaveData;

/// Resets every registered entry, restores what [`HostSaveData`] holds and
/// re-applies the restored selection to the statistics registry.
pub(crate) fn exclusive_load(world: &mut World) {
    if let Err(e) = exclusive_load_inner(world) {
        error!("Statistics load failed: {e}");
    }
}

fn exclusive_load_inner(world: &mut World) -> Result<(), SaveError> {
    let save_data = world
        .get_resource::<HostSaveData>()
        .cloned()
        .ok_or_else(|| SaveError::MissingResource("HostSaveData".to_string()))?;
    info!(
        "Loading statistics from host save v{} ({} extension(s))",
        save_data.format_version,
        save_data.extensions.len()
    );

    // -- Stage 1: reset, then apply the extension map --
    let registry = world
        .remove_resource::<SaveableRegistry>()
        .ok_or_else(|| SaveError::MissingResource("SaveableRegistry".to_string()))?;
    registry.reset_all(world);
    registry.load_all(world, &save_data.extensions);
    world.insert_resource(registry);

    // -- Stage 2: restore selection into the catalog --
    let settings = world
        .get_resource::<SelectionSettings>()
        .cloned()
        .unwrap_or_default();
    let defaults = world
        .get_resource::<StatisticsConfig>()
        .map(|c| c.default_selected.clone())
        .unwrap_or_default();
    if let Some(mut catalog) = world.get_resource_mut::<StatisticsRegistry>() {
        if !catalog.is_empty() {
            if settings.initialized {
                catalog.apply_selection_settings(&settings);
            } else {
                catalog.deselect_all();
                catalog.select_by_field_names(&defaults);
            }
        }
    }

    let restored = world
        .get_resource::<SnapshotHistory>()
        .map_or(0, SnapshotHistory::len);
    info!("Loaded statistics: {} snapshot(s)", restored);
    Ok(())
}
