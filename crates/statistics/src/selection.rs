use bevy::prelude::*;
use bitcode::{Decode, Encode};

use crate::registry::StatisticsRegistry;
use crate::Saveable;

/// The user's statistic selection and expanded categories, keyed by stable
/// snapshot field names and category display names so that saves survive
/// reordering of the catalog.
///
/// `initialized` is false until the registry has established a selection for
/// this city. An initialized selection may be empty: the user deselected
/// everything, and that choice is saved like any other.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct SelectionSettings {
    pub initialized: bool,
    pub selected: Vec<String>,
    pub expanded: Vec<String>,
}

impl Saveable for SelectionSettings {
    const SAVE_KEY: &'static str = "statistics_selection";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if !self.initialized {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}

/// Mirrors registry selection changes into [`SelectionSettings`] so the next
/// save picks them up.
pub fn sync_selection_settings(
    registry: Res<StatisticsRegistry>,
    mut settings: ResMut<SelectionSettings>,
) {
    if !registry.is_changed() || registry.is_empty() {
        return;
    }
    let current = registry.selection_settings();
    if *settings != current {
        *settings = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_skip_saving() {
        assert!(SelectionSettings::default().save_to_bytes().is_none());
    }

    #[test]
    fn test_initialized_empty_selection_is_saved() {
        let settings = SelectionSettings {
            initialized: true,
            ..Default::default()
        };
        let bytes = settings.save_to_bytes().expect("initialized settings save");
        let restored = SelectionSettings::load_from_bytes(&bytes);
        assert!(restored.initialized);
        assert!(restored.selected.is_empty());
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = SelectionSettings {
            initialized: true,
            selected: vec!["population".to_string(), "unemployed".to_string()],
            expanded: vec!["Population".to_string()],
        };
        let bytes = settings.save_to_bytes().expect("initialized settings save");
        assert_eq!(SelectionSettings::load_from_bytes(&bytes), settings);
    }

    #[test]
    fn test_garbage_bytes_load_default() {
        assert_eq!(
            SelectionSettings::load_from_bytes(&[]),
            SelectionSettings::default()
        );
    }
}
