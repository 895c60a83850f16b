use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::StatisticKind;
use crate::error::ConfigError;

/// Entity slots tallied per fixed tick.
pub const DEFAULT_TALLY_BATCH_SIZE: usize = 8192;
/// Ten game years of daily snapshots.
pub const DEFAULT_MAX_SNAPSHOTS: usize = 3650;
/// Upper bound for `max_snapshots`; keeps the saved history well inside the
/// history blob's u32 size fields.
pub const MAX_SNAPSHOTS_LIMIT: usize = 100_000;
pub const DEFAULT_SNAPSHOT_INTERVAL_DAYS: u32 = 1;

/// Statistics selected the first time the plugin runs in a city.
pub const DEFAULT_SELECTED: &[&str] = &[
    "population",
    "electricity_consumption_percent",
    "water_consumption_percent",
];

/// User-tunable settings, read from a JSON file next to the host's own config.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Game days between two recorded snapshots.
    pub snapshot_interval_days: u32,
    /// Oldest snapshots are dropped beyond this count.
    pub max_snapshots: usize,
    pub tally_batch_size: usize,
    /// Snapshot field names selected when no saved selection exists.
    pub default_selected: Vec<String>,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            snapshot_interval_days: DEFAULT_SNAPSHOT_INTERVAL_DAYS,
            max_snapshots: DEFAULT_MAX_SNAPSHOTS,
            tally_batch_size: DEFAULT_TALLY_BATCH_SIZE,
            default_selected: DEFAULT_SELECTED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StatisticsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Like [`StatisticsConfig::load`], but a missing or broken file only
    /// costs a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded statistics config from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Statistics config {} not loaded ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snapshot_interval_days == 0 {
            return Err(ConfigError::Invalid(
                "snapshot_interval_days must be at least 1".to_string(),
            ));
        }
        if self.max_snapshots == 0 {
            return Err(ConfigError::Invalid(
                "max_snapshots must be at least 1".to_string(),
            ));
        }
        if self.max_snapshots > MAX_SNAPSHOTS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_snapshots must be at most {MAX_SNAPSHOTS_LIMIT}"
            )));
        }
        if self.tally_batch_size == 0 {
            return Err(ConfigError::Invalid(
                "tally_batch_size must be at least 1".to_string(),
            ));
        }
        if let Some(unknown) = self
            .default_selected
            .iter()
            .find(|name| StatisticKind::from_field_name(name).is_none())
        {
            return Err(ConfigError::Invalid(format!(
                "default_selected names unknown statistic '{unknown}'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(StatisticsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = StatisticsConfig::from_json_str(r#"{ "snapshot_interval_days": 7 }"#)
            .expect("valid config");
        assert_eq!(config.snapshot_interval_days, 7);
        assert_eq!(config.max_snapshots, DEFAULT_MAX_SNAPSHOTS);
        assert_eq!(config.tally_batch_size, DEFAULT_TALLY_BATCH_SIZE);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = StatisticsConfig::from_json_str(r#"{ "snapshot_interval_days": 0 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_history_limit_capped() {
        let config = StatisticsConfig {
            max_snapshots: MAX_SNAPSHOTS_LIMIT + 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = StatisticsConfig {
            max_snapshots: MAX_SNAPSHOTS_LIMIT,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_default_selection_rejected() {
        let err = StatisticsConfig::from_json_str(r#"{ "default_selected": ["not_a_field"] }"#)
            .unwrap_err();
        assert!(format!("{err}").contains("not_a_field"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = StatisticsConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = StatisticsConfig {
            max_snapshots: 42,
            ..Default::default()
        };
        let json = config.to_json_string().expect("serializes");
        assert_eq!(StatisticsConfig::from_json_str(&json).expect("parses"), config);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = StatisticsConfig::load_or_default(Path::new("/nonexistent/statistics.json"));
        assert_eq!(config, StatisticsConfig::default());
    }
}
