//! Terminal client entry point.
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use maze_cli::{CliConfig, MapSource, MazeApp, logging, presentation};
use maze_content::MapPreset;

/// Step through a maze one cell at a time
#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(about = "Interactive breadth-first maze explorer", long_about = None)]
#[command(version)]
struct Args {
    /// Map file: a `cols rows` header followed by the grid
    #[arg(long, conflicts_with = "preset")]
    map: Option<PathBuf>,

    /// Bundled map to play (a, b or c)
    #[arg(long, value_parser = parse_preset)]
    preset: Option<MapPreset>,

    /// TOML file with [game] and [loot] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Loot seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting and maximum health (at least 1)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    max_health: Option<i32>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// Layers the flags over the environment configuration.
    fn apply(self, mut config: CliConfig) -> CliConfig {
        if let Some(preset) = self.preset {
            config.map = MapSource::Preset(preset);
        }
        if let Some(path) = self.map {
            config.map = MapSource::File(path);
        }
        if self.config.is_some() {
            config.config_path = self.config;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.max_health.is_some() {
            config.max_health = self.max_health;
        }
        if self.no_color {
            config.color = false;
        }
        config
    }
}

fn parse_preset(value: &str) -> Result<MapPreset, String> {
    maze_cli::input::parse_preset(value)
        .ok_or_else(|| format!("unknown map {:?}, expected a, b or c", value))
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Args::parse().apply(CliConfig::from_env());

    let session_id = logging::session_id(CliConfig::clock_seed());
    let _guard = logging::setup_logging(config.log_dir.as_deref(), &session_id)?;

    let theme = presentation::stdout_theme(config.color);
    let stdin = io::stdin();
    let mut app = MazeApp::new(stdin.lock(), io::stdout(), theme);

    if let Err(e) = app.execute(&config) {
        tracing::error!("Session failed: {:#}", e);
        return Err(e);
    }

    tracing::info!("CLI client exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_health_flag_must_be_positive() {
        assert!(Args::try_parse_from(["maze", "--max-health", "0"]).is_err());
        assert!(Args::try_parse_from(["maze", "--max-health", "-2"]).is_err());

        let args = Args::try_parse_from(["maze", "--max-health", "3"]).unwrap();
        assert_eq!(args.max_health, Some(3));
    }

    #[test]
    fn flags_override_environment_settings() {
        let args = Args::try_parse_from(["maze", "--preset", "C", "--seed", "9"]).unwrap();
        let config = args.apply(CliConfig {
            map: MapSource::File(PathBuf::from("env.txt")),
            seed: Some(1),
            ..CliConfig::default()
        });

        assert_eq!(config.map, MapSource::Preset(MapPreset::C));
        assert_eq!(config.seed, Some(9));
    }
}
