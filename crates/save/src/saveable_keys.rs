use bevy::prelude::*;
use statistics::SaveableRegistry;

/// Every key written into the host's extension map by the statistics
/// plugins. The `validate_saveable_registry` startup system asserts that each
/// of these keys is present in the `SaveableRegistry`, catching a `Saveable`
/// whose plugin forgot to register it.
///
/// When you add a new saved resource, add its key here.
pub const EXPECTED_SAVEABLE_KEYS: &[&str] = &["snapshot_history", "statistics_selection"];

/// Startup system that validates the `SaveableRegistry` against the expected
/// key list. Panics if an expected key is missing or a key is registered
/// twice.
///
/// Runs in `PostStartup` so all plugins have had a chance to register.
pub fn validate_saveable_registry(registry: Res<SaveableRegistry>) {
    let mut seen = std::collections::HashSet::new();
    for entry in &registry.entries {
        if !seen.insert(entry.key.as_str()) {
            panic!(
                "SaveableRegistry: duplicate key '{}' detected, two entries share the same key",
                entry.key
            );
        }
    }

    let missing: Vec<&str> = EXPECTED_SAVEABLE_KEYS
        .iter()
        .copied()
        .filter(|expected| !seen.contains(expected))
        .collect();
    if !missing.is_empty() {
        panic!(
            "SaveableRegistry drift detected: {} expected key(s) not registered: {:?}. \
             Add both StatisticsPlugin and StatisticsSavePlugin to the app.",
            missing.len(),
            missing,
        );
    }

    info!(
        "SaveableRegistry validated: {} keys registered, all {} expected keys present",
        registry.entries.len(),
        EXPECTED_SAVEABLE_KEYS.len(),
    );
}
