//! CLI configuration: environment variables first, command-line flags on top.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use maze_content::MapPreset;

/// Where the session's map comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapSource {
    /// A map file on disk.
    File(PathBuf),
    /// One of the bundled maps.
    Preset(MapPreset),
    /// Ask the player to pick a preset at startup.
    #[default]
    Prompt,
}

/// Settings for one terminal session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub map: MapSource,
    /// TOML file with `[game]` and `[loot]` tables.
    pub config_path: Option<PathBuf>,
    /// Loot seed. When unset, the config file's seed or the clock is used.
    pub seed: Option<u64>,
    pub max_health: Option<i32>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    pub color: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_MAP` - Map file to load (default: prompt for a preset)
    /// - `MAZE_PRESET` - Bundled map letter `a`, `b` or `c`
    /// - `MAZE_CONFIG` - TOML session config file
    /// - `MAZE_SEED` - Loot seed (default: current time)
    /// - `MAZE_LOG_DIR` - Log directory (default: platform-specific)
    /// - `NO_COLOR` - Disable colored output when set
    pub fn from_env() -> Self {
        let mut config = Self {
            color: true,
            ..Self::default()
        };

        if let Some(preset) = read_env::<MapPreset>("MAZE_PRESET") {
            config.map = MapSource::Preset(preset);
        }
        // A file wins over a preset when both are set.
        if let Ok(path) = env::var("MAZE_MAP") {
            config.map = MapSource::File(PathBuf::from(path));
        }

        config.config_path = env::var("MAZE_CONFIG").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("MAZE_SEED");
        config.log_dir = env::var("MAZE_LOG_DIR").ok().map(PathBuf::from);

        if env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }

        config
    }

    /// Seed to use when neither the flags nor the config file chose one.
    pub fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompts_for_a_preset() {
        let config = CliConfig::default();
        assert_eq!(config.map, MapSource::Prompt);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn clock_seed_is_nonzero() {
        assert!(CliConfig::clock_seed() > 0);
    }
}
