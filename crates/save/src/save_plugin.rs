use std::collections::BTreeMap;

use bevy::prelude::*;
use statistics::{SaveableRegistry, SnapshotHistory};

use crate::history_blob::{decode_history, encode_history};

/// Extension-map key of the snapshot history blob.
pub const HISTORY_SAVE_KEY: &str = "snapshot_history";

// ---------------------------------------------------------------------------
// Host save data
// ---------------------------------------------------------------------------

/// The host game's save-data slot for this plugin: named binary blobs plus
/// the version of the host save they were read from.
///
/// The host fills this before sending [`LoadStatisticsEvent`] and writes it
/// out after [`SaveStatisticsEvent`] has been handled.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSaveData {
    pub format_version: u32,
    pub extensions: BTreeMap<String, Vec<u8>>,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Event)]
pub struct SaveStatisticsEvent;

#[derive(Event)]
pub struct LoadStatisticsEvent;

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Persists the snapshot history and selection through [`HostSaveData`].
pub struct StatisticsSavePlugin;

impl Plugin for StatisticsSavePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SaveStatisticsEvent>()
            .add_event::<LoadStatisticsEvent>()
            .init_resource::<HostSaveData>()
            .init_resource::<SaveableRegistry>();

        register_history(&mut app.world_mut().resource_mut::<SaveableRegistry>());

        app.add_systems(
            PostStartup,
            crate::saveable_keys::validate_saveable_registry,
        );
        // Load before save so a frame carrying both ends with the loaded state
        // written back out.
        app.add_systems(Update, (handle_load_requests, handle_save_requests).chain());
    }
}

fn register_history(registry: &mut SaveableRegistry) {
    registry.register_raw(
        HISTORY_SAVE_KEY,
        Box::new(|world: &World| {
            let history = world.get_resource::<SnapshotHistory>()?;
            if history.is_empty() {
                return None;
            }
            match encode_history(history.snapshots()) {
                Ok(blob) => Some(blob),
                Err(e) => {
                    error!("Statistics history could not be saved: {}", e);
                    None
                }
            }
        }),
        Box::new(|world: &mut World, bytes: &[u8]| {
            let snapshots = match decode_history(bytes) {
                Ok(snapshots) => snapshots,
                Err(e) => {
                    error!(
                        "Statistics history could not be loaded ({}), starting empty",
                        e
                    );
                    Vec::new()
                }
            };
            if let Some(mut history) = world.get_resource_mut::<SnapshotHistory>() {
                history.replace_all(snapshots);
            }
        }),
        Box::new(|world: &mut World| {
            if let Some(mut history) = world.get_resource_mut::<SnapshotHistory>() {
                history.clear();
            }
        }),
    );
}

// ---------------------------------------------------------------------------
// Event handling (exclusive: the registry needs the whole world)
// ---------------------------------------------------------------------------

/// Drains all pending `E` events; true if there was at least one.
fn take_requests<E: Event>(world: &mut World) -> bool {
    world
        .get_resource_mut::<Events<E>>()
        .is_some_and(|mut events| events.drain().count() > 0)
}

fn handle_save_requests(world: &mut World) {
    if take_requests::<SaveStatisticsEvent>(world) {
        crate::exclusive_save::exclusive_save(world);
    }
}

fn handle_load_requests(world: &mut World) {
    if take_requests::<LoadStatisticsEvent>(world) {
        crate::exclusive_load::exclusive_load(world);
    }
}
