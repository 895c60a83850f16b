use bevy::prelude::*;
use statistics::SaveableRegistry;

use crate::save_error::SaveError;
use crate::save_plugin::HostSaveData;

/// Writes every registered entry into [`HostSaveData`]. Entries with nothing
/// to save have their stale blobs removed.
pub(crate) fn exclusive_save(world: &mut World) {
    if let Err(e) = exclusive_save_inner(world) {
        error!("Statistics save failed: {e}");
    }
}

fn exclusive_save_inner(world: &mut World) -> Result<(), SaveError> {
    let registry = world
        .remove_resource::<SaveableRegistry>()
        .ok_or_else(|| SaveError::MissingResource("SaveableRegistry".to_string()))?;
    let mut extensions = registry.save_all(world);
    let keys: Vec<String> = registry.entries.iter().map(|e| e.key.clone()).collect();
    world.insert_resource(registry);

    let mut save_data = world
        .get_resource_mut::<HostSaveData>()
        .ok_or_else(|| SaveError::MissingResource("HostSaveData".to_string()))?;
    let mut written = 0;
    for key in keys {
        match extensions.remove(&key) {
            Some(bytes) => {
                written += bytes.len();
                save_data.extensions.insert(key, bytes);
            }
            None => {
                save_data.extensions.remove(&key);
            }
        }
    }

    info!(
        "Saved statistics: {} extension(s), {} bytes",
        save_data.extensions.len(),
        written
    );
    Ok(())
}
