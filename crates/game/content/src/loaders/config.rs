//! Session configuration loader.

use std::path::Path;

use maze_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::loot::LootConfig;

/// Everything a TOML config file can set.
///
/// ```toml
/// [game]
/// max_health = 12
///
/// [loot]
/// seed = 42
/// guaranteed_keys = 3
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub game: GameConfig,
    pub loot: LootConfig,
}

/// Loader for session configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing sections and fields take defaults.
    pub fn load(path: &Path) -> LoadResult<SessionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<SessionConfig> {
        let config: SessionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
