//! Scripted sessions through the public app API.

use std::io::{Cursor, Write};

use maze_cli::{CliConfig, MapSource, MazeApp};
use maze_cli::presentation::Theme;
use maze_content::MapPreset;
use maze_core::SessionStatus;

fn play(config: &CliConfig, script: &str) -> (Option<maze_core::SessionResult>, String) {
    let mut app = MazeApp::new(Cursor::new(script.to_string()), Vec::new(), Theme::plain());
    let result = app.execute(config).unwrap();
    let out = String::from_utf8(app.into_output()).unwrap();
    (result, out)
}

#[test]
fn map_file_and_config_file_drive_the_session() {
    let mut map = tempfile::NamedTempFile::new().unwrap();
    write!(map, "4 1\n#  @\n").unwrap();
    let mut toml = tempfile::NamedTempFile::new().unwrap();
    writeln!(toml, "[game]\nmax_health = 7").unwrap();

    let config = CliConfig {
        map: MapSource::File(map.path().to_path_buf()),
        config_path: Some(toml.path().to_path_buf()),
        ..CliConfig::default()
    };
    let (result, out) = play(&config, "1\n1\n1\n1\n");
    let result = result.unwrap();

    assert_eq!(result.status, SessionStatus::Won);
    assert_eq!(result.steps, 4);
    assert_eq!(result.inventory.max_health, 7);
    assert!(out.contains("Loaded map:\n#  @\n"));
    assert!(out.contains("Next cell to process: (0,0)"));
    assert!(out.contains("Health: 7/7"));
    assert!(out.contains("Final map:\n#--@\n"));
}

#[test]
fn preset_session_can_be_quit_immediately() {
    let config = CliConfig {
        map: MapSource::Preset(MapPreset::A),
        seed: Some(11),
        ..CliConfig::default()
    };
    let (result, out) = play(&config, "3\n");
    let result = result.unwrap();

    assert_eq!(result.status, SessionStatus::Quit);
    assert_eq!(result.steps, 0);
    assert!(out.contains("Run interrupted by the player."));
    assert!(out.contains("Final backpack status:"));
}

#[test]
fn advance_then_undo_returns_to_the_same_cell() {
    let mut map = tempfile::NamedTempFile::new().unwrap();
    write!(map, "3 2\n#  \n**@\n").unwrap();

    let config = CliConfig {
        map: MapSource::File(map.path().to_path_buf()),
        seed: Some(1),
        ..CliConfig::default()
    };
    let (result, out) = play(&config, "1\n2\nq\n");

    assert_eq!(result.unwrap().status, SessionStatus::Quit);
    assert!(out.contains("Previous state restored. Returning to (0,0)"));
}

#[test]
fn unreadable_map_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = CliConfig {
        map: MapSource::File(dir.path().join("missing.txt")),
        ..CliConfig::default()
    };

    let mut app = MazeApp::new(Cursor::new(String::new()), Vec::new(), Theme::plain());
    let err = app.execute(&config).unwrap_err();
    assert!(format!("{err:#}").contains("missing.txt"));
}

#[test]
fn map_without_start_is_rejected() {
    let mut map = tempfile::NamedTempFile::new().unwrap();
    write!(map, "2 1\n @\n").unwrap();
    let config = CliConfig {
        map: MapSource::File(map.path().to_path_buf()),
        ..CliConfig::default()
    };

    let mut app = MazeApp::new(Cursor::new(String::new()), Vec::new(), Theme::plain());
    assert!(app.execute(&config).is_err());
}

#[test]
fn zero_health_from_flags_or_config_file_is_rejected() {
    let mut toml = tempfile::NamedTempFile::new().unwrap();
    writeln!(toml, "[game]\nmax_health = 0").unwrap();

    let from_file = CliConfig {
        map: MapSource::Preset(MapPreset::A),
        config_path: Some(toml.path().to_path_buf()),
        ..CliConfig::default()
    };
    let from_flag = CliConfig {
        map: MapSource::Preset(MapPreset::A),
        max_health: Some(-4),
        seed: Some(1),
        ..CliConfig::default()
    };

    for config in [from_file, from_flag] {
        let mut app = MazeApp::new(Cursor::new("1\n".to_string()), Vec::new(), Theme::plain());
        let err = app.execute(&config).unwrap_err();
        assert!(format!("{err:#}").contains("Health must start above zero"));
    }
}
