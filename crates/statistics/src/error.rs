// ---------------------------------------------------------------------------
// Error types for registry startup and configuration loading
// ---------------------------------------------------------------------------

use std::fmt;

/// Fatal registry startup failures. The registry stays empty when one occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The host has not inserted its color table yet.
    ColorTableMissing,
    /// The color table exists but the engine has not finished loading it.
    ColorTableNotReady,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::ColorTableMissing => write!(f, "engine color table resource is missing"),
            RegistryError::ColorTableNotReady => {
                write!(f, "engine color table is not ready, statistics cannot be colored")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors from loading or validating a [`crate::StatisticsConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the config file.
    Io(std::io::Error),
    /// The file is not valid JSON for the config schema.
    Parse(serde_json::Error),
    /// Parsed, but a value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let msg = format!("{}", RegistryError::ColorTableNotReady);
        assert!(msg.contains("not ready"), "got: {msg}");
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_display_invalid() {
        let err = ConfigError::Invalid("max_snapshots must be at least 1".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Invalid config"), "got: {msg}");
        assert!(msg.contains("max_snapshots"), "got: {msg}");
    }
}
