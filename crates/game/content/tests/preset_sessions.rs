//! Bundled maps combined with generated loot yield playable engines.

use maze_content::{LootConfig, LootGenerator, MapLoader, MapPreset};
use maze_core::{Cell, Command, GameConfig, SessionStatus, StepEngine};

#[test]
fn every_preset_gets_its_guaranteed_keys_in_row_major_order() {
    for preset in MapPreset::ALL {
        let grid = MapLoader::preset(preset).unwrap();
        let table = LootGenerator::new(LootConfig::new(2024, preset.guaranteed_keys()))
            .generate(&grid);

        let leading: Vec<_> = grid
            .iter()
            .filter(|&(_, cell)| cell == Cell::Chest)
            .take(preset.guaranteed_keys() as usize)
            .map(|(position, _)| table.get(position))
            .collect();

        assert_eq!(leading.len(), preset.guaranteed_keys() as usize);
        assert!(leading.iter().all(|chest| chest.keys == 1 && chest.bomb == 0));
    }
}

#[test]
fn preset_engine_accepts_a_first_advance() {
    let grid = MapLoader::preset(MapPreset::A).unwrap();
    let chests = LootGenerator::new(LootConfig::new(5, 3)).generate(&grid);
    let mut engine = StepEngine::with_config(grid, chests, &GameConfig::default()).unwrap();
    let start = engine.start();

    engine.execute(Command::Advance).unwrap();

    assert_eq!(engine.status(), SessionStatus::AwaitingInput);
    assert_eq!(engine.history().len(), 1);
    assert!(engine.is_visited(start));
    assert!(!engine.frontier().is_empty());
}
