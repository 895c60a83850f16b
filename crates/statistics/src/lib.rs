use bevy::prelude::*;
use std::collections::BTreeMap;

pub mod catalog;
pub mod colors;
pub mod config;
pub mod error;
pub mod history;
pub mod host;
pub mod registry;
pub mod sampling;
pub mod selection;
pub mod snapshot;
pub mod tally;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use catalog::{Category, CategoryKind, Statistic, StatisticKind};
pub use config::StatisticsConfig;
pub use error::{ConfigError, RegistryError};
pub use history::SnapshotHistory;
pub use registry::StatisticsRegistry;
pub use snapshot::{ContentPacks, Snapshot};

// ---------------------------------------------------------------------------
// Saveable trait + registry for the extension map save pattern
// ---------------------------------------------------------------------------

/// Trait for resources that can be saved/loaded via the extension map.
///
/// Each implementing resource provides its own serialization logic; the save
/// crate only iterates the [`SaveableRegistry`].
pub trait Saveable: Resource + Default + Send + Sync + 'static {
    /// Unique key for this resource in the save data's extension map.
    /// Must be stable across versions (used for deserialization lookup).
    const SAVE_KEY: &'static str;

    /// Serialize this resource to bytes.
    /// Return `None` to skip saving (e.g. when the resource is at its default state).
    fn save_to_bytes(&self) -> Option<Vec<u8>>;

    /// Deserialize from bytes, returning the restored resource.
    fn load_from_bytes(bytes: &[u8]) -> Self;
}

/// Decode bytes via `bitcode::decode`, logging a warning and returning `Default` on failure.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(v) => v,
        Err(e) => {
            warn!(
                "Saveable {}: failed to decode {} bytes, falling back to default: {}",
                key,
                bytes.len(),
                e
            );
            T::default()
        }
    }
}

/// Type alias for the save function stored in a `SaveableEntry`.
pub type SaveFn = Box<dyn Fn(&World) -> Option<Vec<u8>> + Send + Sync>;
/// Type alias for the load function stored in a `SaveableEntry`.
pub type LoadFn = Box<dyn Fn(&mut World, &[u8]) + Send + Sync>;
/// Type alias for the reset function stored in a `SaveableEntry`.
pub type ResetFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// Type-erased save/load/reset operations for a single registered entry.
pub struct SaveableEntry {
    pub key: String,
    pub save_fn: SaveFn,
    pub load_fn: LoadFn,
    pub reset_fn: ResetFn,
}

/// Registry of everything persisted into the host save data.
#[derive(Resource, Default)]
pub struct SaveableRegistry {
    pub entries: Vec<SaveableEntry>,
}

impl SaveableRegistry {
    /// Register a resource type that implements `Saveable`.
    pub fn register<T: Saveable>(&mut self) {
        self.register_raw(
            T::SAVE_KEY,
            Box::new(|world: &World| world.get_resource::<T>().and_then(|r| r.save_to_bytes())),
            Box::new(|world: &mut World, bytes: &[u8]| {
                let value = T::load_from_bytes(bytes);
                world.insert_resource(value);
            }),
            Box::new(|world: &mut World| {
                world.insert_resource(T::default());
            }),
        );
    }

    /// Register an entry whose codec lives outside this crate.
    ///
    /// Duplicate keys are ignored with a warning (and trip a debug assertion)
    /// so a second registration can never shadow the first.
    pub fn register_raw(&mut self, key: &str, save_fn: SaveFn, load_fn: LoadFn, reset_fn: ResetFn) {
        if self.entries.iter().any(|e| e.key == key) {
            warn!(
                "SaveableRegistry: duplicate key '{}', ignoring second registration",
                key
            );
            debug_assert!(false, "SaveableRegistry: duplicate key '{}'", key);
            return;
        }
        self.entries.push(SaveableEntry {
            key: key.to_string(),
            save_fn,
            load_fn,
            reset_fn,
        });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Save all registered entries into an extension map.
    pub fn save_all(&self, world: &World) -> BTreeMap<String, Vec<u8>> {
        let mut extensions = BTreeMap::new();
        for entry in &self.entries {
            if let Some(bytes) = (entry.save_fn)(world) {
                extensions.insert(entry.key.clone(), bytes);
            }
        }
        extensions
    }

    /// Load registered entries from an extension map.
    /// Entries whose key is absent are left unchanged.
    pub fn load_all(&self, world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
        for entry in &self.entries {
            if let Some(bytes) = extensions.get(&entry.key) {
                (entry.load_fn)(world, bytes);
            }
        }
    }

    /// Reset all registered entries to their defaults.
    pub fn reset_all(&self, world: &mut World) {
        for entry in &self.entries {
            (entry.reset_fn)(world);
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Samples the host city into snapshots and owns the statistics catalog.
///
/// The host must insert [`host::CitySource`] and [`colors::ColorTable`]
/// before startup and keep [`host::GameDate`] current.
#[derive(Default)]
pub struct StatisticsPlugin {
    pub config: StatisticsConfig,
}

impl Plugin for StatisticsPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                warn!("Statistics config rejected ({e}), using defaults");
                StatisticsConfig::default()
            }
        };

        app.insert_resource(SnapshotHistory::with_limit(config.max_snapshots))
            .insert_resource(sampling::BuildingTally::new(config.tally_batch_size))
            .insert_resource(config)
            .init_resource::<host::GameDate>()
            .init_resource::<selection::SelectionSettings>()
            .init_resource::<StatisticsRegistry>()
            .add_systems(Startup, registry::init_statistics_registry)
            .add_systems(PostStartup, registry::validate_statistics_registry)
            .add_systems(
                FixedUpdate,
                (sampling::tally_building_batch, sampling::record_snapshot).chain(),
            )
            .add_systems(
                Update,
                (
                    registry::refresh_statistic_colors,
                    selection::sync_selection_settings,
                )
                    .chain(),
            );

        let mut registry = app
            .world_mut()
            .get_resource_or_insert_with(SaveableRegistry::default);
        registry.register::<selection::SelectionSettings>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default, PartialEq, Debug)]
    struct Counter(u32);

    impl Saveable for Counter {
        const SAVE_KEY: &'static str = "counter";

        fn save_to_bytes(&self) -> Option<Vec<u8>> {
            (self.0 != 0).then(|| bitcode::encode(&self.0))
        }

        fn load_from_bytes(bytes: &[u8]) -> Self {
            Counter(decode_or_warn(Self::SAVE_KEY, bytes))
        }
    }

    #[test]
    fn test_registry_save_load_reset() {
        let mut registry = SaveableRegistry::default();
        registry.register::<Counter>();
        assert!(registry.contains("counter"));

        let mut world = World::new();
        world.insert_resource(Counter(0));
        assert!(registry.save_all(&world).is_empty(), "default state skips saving");

        world.insert_resource(Counter(7));
        let extensions = registry.save_all(&world);
        assert_eq!(extensions.len(), 1);

        let mut restored = World::new();
        registry.load_all(&mut restored, &extensions);
        assert_eq!(restored.resource::<Counter>(), &Counter(7));

        registry.reset_all(&mut restored);
        assert_eq!(restored.resource::<Counter>(), &Counter(0));
    }

    #[test]
    fn test_decode_or_warn_falls_back_to_default() {
        let value: u32 = decode_or_warn("broken", &[]);
        assert_eq!(value, 0);
    }
}
