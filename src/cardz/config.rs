use crate::error::{CardzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = ".cardz.json";

/// Configuration, stored as `.cardz.json` next to the cards.
///
/// One knob: whether `-Q` (new-first) falls back to the expired search when
/// no new cards exist. Off by default: `-Q` answers "give me a new card"
/// and says so when there are none. Scheduling arithmetic is deliberately
/// not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardzConfig {
    #[serde(default)]
    pub new_first_fallback: bool,
}

impl CardzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(CardzError::Io)?;
        let config: CardzConfig =
            serde_json::from_str(&content).map_err(CardzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardzError::Serialization)?;
        fs::write(path, content).map_err(CardzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_no_fallback() {
        assert!(!CardzConfig::default().new_first_fallback);
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardzConfig::load(dir.path()).unwrap();
        assert_eq!(config, CardzConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardzConfig {
            new_first_fallback: true,
        };
        config.save(dir.path()).unwrap();

        let loaded = CardzConfig::load(dir.path()).unwrap();
        assert!(loaded.new_first_fallback);
    }

    #[test]
    fn missing_key_takes_the_default() {
        let parsed: CardzConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, CardzConfig::default());
    }

    #[test]
    fn serialization_roundtrip() {
        let config = CardzConfig {
            new_first_fallback: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CardzConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
