//! The statistics catalog as a Bevy resource: every category in display
//! order, the statistics in each, and which of them the user has selected.

use bevy::prelude::*;

use crate::catalog::{Category, CategoryKind, Statistic, StatisticKind};
use crate::colors::ColorTable;
use crate::config::StatisticsConfig;
use crate::error::RegistryError;
use crate::selection::SelectionSettings;

mod definitions;
mod validation;

pub use definitions::build_categories;
pub use validation::RegistryIssue;

/// Empty until [`init_statistics_registry`] runs and stays empty if the
/// engine color table was not ready at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct StatisticsRegistry {
    categories: Vec<Category>,
}

impl StatisticsRegistry {
    pub fn initialize(colors: &ColorTable) -> Result<Self, RegistryError> {
        if !colors.ready {
            return Err(RegistryError::ColorTableNotReady);
        }
        Ok(Self::from_categories(build_categories(colors)))
    }

    /// A registry over an arbitrary catalog. Nothing is checked; see
    /// [`StatisticsRegistry::validate`].
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, kind: CategoryKind) -> Option<&Category> {
        self.categories.iter().find(|c| c.kind == kind)
    }

    pub fn statistic(&self, kind: StatisticKind) -> Option<&Statistic> {
        self.all_statistics().find(|s| s.kind == kind)
    }

    fn statistic_mut(&mut self, kind: StatisticKind) -> Option<&mut Statistic> {
        self.categories
            .iter_mut()
            .flat_map(|c| c.statistics.iter_mut())
            .find(|s| s.kind == kind)
    }

    /// Every statistic, category by category.
    pub fn all_statistics(&self) -> impl Iterator<Item = &Statistic> {
        self.categories.iter().flat_map(|c| c.statistics.iter())
    }

    /// The selected statistics, in the same order as [`Self::all_statistics`].
    pub fn selected_statistics(&self) -> impl Iterator<Item = &Statistic> {
        self.all_statistics().filter(|s| s.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_statistics().count()
    }

    /// Returns true if the selection changed.
    pub fn set_selected(&mut self, kind: StatisticKind, selected: bool) -> bool {
        match self.statistic_mut(kind) {
            Some(statistic) if statistic.selected != selected => {
                statistic.selected = selected;
                true
            }
            _ => false,
        }
    }

    pub fn deselect_all(&mut self) {
        for category in &mut self.categories {
            for statistic in &mut category.statistics {
                statistic.selected = false;
            }
        }
    }

    pub fn set_expanded(&mut self, kind: CategoryKind, expanded: bool) -> bool {
        match self.categories.iter_mut().find(|c| c.kind == kind) {
            Some(category) if category.expanded != expanded => {
                category.expanded = expanded;
                true
            }
            _ => false,
        }
    }

    /// Selects the statistics named by snapshot field name. Unknown names are
    /// skipped with a warning. Returns how many names matched.
    pub fn select_by_field_names<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let mut matched = 0;
        for name in names {
            let name = name.as_ref();
            match StatisticKind::from_field_name(name) {
                Some(kind) if self.statistic(kind).is_some() => {
                    self.set_selected(kind, true);
                    matched += 1;
                }
                _ => warn!("Statistics selection: unknown statistic '{}', skipping", name),
            }
        }
        matched
    }

    /// The current selection and expanded categories by stable name.
    pub fn selection_settings(&self) -> SelectionSettings {
        SelectionSettings {
            initialized: true,
            selected: self
                .selected_statistics()
                .map(|s| s.kind.field_name().to_string())
                .collect(),
            expanded: self
                .categories
                .iter()
                .filter(|c| c.expanded)
                .map(|c| c.name.to_string())
                .collect(),
        }
    }

    /// Re-resolves every statistic color against `colors`. Returns how many
    /// changed.
    pub fn refresh_colors(&mut self, colors: &ColorTable) -> usize {
        self.categories
            .iter_mut()
            .flat_map(|c| c.statistics.iter_mut())
            .map(|s| s.resolve_color(colors))
            .filter(|&changed| changed)
            .count()
    }

    /// Replaces the selection and expansion state with `settings`.
    pub fn apply_selection_settings(&mut self, settings: &SelectionSettings) {
        self.deselect_all();
        for category in &mut self.categories {
            category.expanded = settings.expanded.iter().any(|name| name == category.name);
        }
        self.select_by_field_names(&settings.selected);
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Builds the registry from the engine color table, then restores the saved
/// selection or, for a fresh city, the configured defaults.
pub fn init_statistics_registry(
    colors: Option<Res<ColorTable>>,
    config: Res<StatisticsConfig>,
    settings: Res<SelectionSettings>,
    mut registry: ResMut<StatisticsRegistry>,
) {
    let built = match colors {
        Some(colors) => StatisticsRegistry::initialize(&colors),
        None => Err(RegistryError::ColorTableMissing),
    };
    let mut built = match built {
        Ok(built) => built,
        Err(e) => {
            error!("Statistics registry not initialized: {}", e);
            *registry = StatisticsRegistry::default();
            return;
        }
    };

    if settings.initialized {
        built.apply_selection_settings(&settings);
    } else {
        built.select_by_field_names(&config.default_selected);
    }

    info!(
        "Statistics registry initialized: {} categories, {} statistics, {} selected",
        built.categories().len(),
        built.all_statistics().count(),
        built.selected_count()
    );
    *registry = built;
}

/// Keeps engine-slot colors in step with the host color table.
pub fn refresh_statistic_colors(
    colors: Option<Res<ColorTable>>,
    mut registry: ResMut<StatisticsRegistry>,
) {
    let Some(colors) = colors else {
        return;
    };
    if !colors.is_changed() || !colors.ready || registry.is_empty() {
        return;
    }
    let changed = registry.bypass_change_detection().refresh_colors(&colors);
    if changed > 0 {
        registry.set_changed();
        debug!("Statistics registry: {} series color(s) refreshed", changed);
    }
}

/// Logs every consistency issue in the registry. Runs in `PostStartup`.
pub fn validate_statistics_registry(registry: Res<StatisticsRegistry>) {
    if registry.is_empty() {
        return;
    }
    let issues = registry.validate();
    for issue in &issues {
        warn!("Statistics registry: {}", issue);
    }
    if issues.is_empty() {
        info!(
            "Statistics registry validated: {} categories, {} statistics",
            registry.categories().len(),
            registry.all_statistics().count()
        );
    } else {
        warn!("Statistics registry has {} consistency issue(s)", issues.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StatisticsRegistry {
        StatisticsRegistry::initialize(&ColorTable::loaded()).expect("colors ready")
    }

    #[test]
    fn test_not_ready_color_table_fails() {
        let err = StatisticsRegistry::initialize(&ColorTable::default()).unwrap_err();
        assert_eq!(err, RegistryError::ColorTableNotReady);
    }

    #[test]
    fn test_every_kind_registered_once() {
        let registry = registry();
        assert_eq!(registry.categories().len(), CategoryKind::COUNT);
        assert_eq!(registry.all_statistics().count(), StatisticKind::COUNT);
        for kind in StatisticKind::ALL {
            assert!(registry.statistic(kind).is_some(), "{kind:?} missing");
        }
    }

    #[test]
    fn test_nothing_selected_initially() {
        assert_eq!(registry().selected_count(), 0);
    }

    #[test]
    fn test_set_selected_reports_change() {
        let mut registry = registry();
        assert!(registry.set_selected(StatisticKind::Population, true));
        assert!(!registry.set_selected(StatisticKind::Population, true));
        assert!(registry.set_selected(StatisticKind::Population, false));
        assert!(!StatisticsRegistry::default().set_selected(StatisticKind::Population, true));
    }

    #[test]
    fn test_selected_statistics_follow_catalog_order() {
        let mut registry = registry();
        registry.set_selected(StatisticKind::Population, true);
        registry.set_selected(StatisticKind::ElectricityConsumption, true);
        let selected: Vec<StatisticKind> =
            registry.selected_statistics().map(|s| s.kind).collect();
        assert_eq!(
            selected,
            vec![StatisticKind::ElectricityConsumption, StatisticKind::Population]
        );
    }

    #[test]
    fn test_deselect_all() {
        let mut registry = registry();
        registry.select_by_field_names(&["population", "unemployed"]);
        assert_eq!(registry.selected_count(), 2);
        registry.deselect_all();
        assert_eq!(registry.selected_count(), 0);
    }

    #[test]
    fn test_select_by_field_names_skips_unknown() {
        let mut registry = registry();
        assert_eq!(registry.select_by_field_names(&["population", "bogus"]), 1);
    }

    #[test]
    fn test_refresh_colors_updates_engine_slots_only() {
        let mut registry = registry();
        let before = registry
            .statistic(StatisticKind::Population)
            .map(|s| s.color);
        let colors = ColorTable {
            commercial: Color::srgb(0.9, 0.1, 0.1),
            ..ColorTable::loaded()
        };
        assert!(registry.refresh_colors(&colors) > 0);
        assert_eq!(
            registry
                .statistic(StatisticKind::CommercialZoned)
                .map(|s| s.color),
            Some(Color::srgb(0.9, 0.1, 0.1))
        );
        assert_eq!(
            registry
                .statistic(StatisticKind::Population)
                .map(|s| s.color),
            before
        );
        assert_eq!(registry.refresh_colors(&colors), 0);
    }

    #[test]
    fn test_selection_settings_round_trip() {
        let mut registry = registry();
        registry.set_selected(StatisticKind::Unemployed, true);
        registry.set_expanded(CategoryKind::Employment, true);
        let settings = registry.selection_settings();
        assert_eq!(settings.selected, vec!["unemployed".to_string()]);
        assert_eq!(settings.expanded, vec!["Employment".to_string()]);

        let mut fresh = self::registry();
        fresh.set_selected(StatisticKind::Population, true);
        fresh.apply_selection_settings(&settings);
        assert_eq!(fresh.selection_settings(), settings);
    }
}
