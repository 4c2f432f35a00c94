//! Chest loot generation.
//!
//! Chests are filled in row-major order. The first `guaranteed_keys` chests
//! each hold exactly one key; every later chest rolls one of three kinds:
//! a potion, a key, or a bomb.

mod rng;

pub use rng::{LootDice, PcgDice, RollKey, RollPurpose};

use maze_core::{Cell, Chest, ChestTable, Grid};

/// Tunables for [`LootGenerator`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LootConfig {
    /// Session seed; the same seed yields the same table.
    pub seed: u64,
    pub guaranteed_keys: u32,
    pub potion_min: u32,
    pub potion_max: u32,
    pub bomb_min: u32,
    pub bomb_max: u32,
}

impl LootConfig {
    pub const DEFAULT_POTION_MIN: u32 = 1;
    pub const DEFAULT_POTION_MAX: u32 = 5;
    pub const DEFAULT_BOMB_MIN: u32 = 1;
    pub const DEFAULT_BOMB_MAX: u32 = 4;

    pub fn new(seed: u64, guaranteed_keys: u32) -> Self {
        Self {
            seed,
            guaranteed_keys,
            potion_min: Self::DEFAULT_POTION_MIN,
            potion_max: Self::DEFAULT_POTION_MAX,
            bomb_min: Self::DEFAULT_BOMB_MIN,
            bomb_max: Self::DEFAULT_BOMB_MAX,
        }
    }
}

impl Default for LootConfig {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Kind rolled for a chest past the guaranteed ones (die faces 1..=3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LootKind {
    Potion,
    Key,
    Bomb,
}

impl LootKind {
    fn from_die(face: u32) -> Self {
        match face {
            1 => LootKind::Potion,
            2 => LootKind::Key,
            _ => LootKind::Bomb,
        }
    }
}

/// Fills a [`ChestTable`] for a grid.
pub struct LootGenerator<D = PcgDice> {
    config: LootConfig,
    dice: D,
}

impl LootGenerator<PcgDice> {
    pub fn new(config: LootConfig) -> Self {
        Self::with_dice(config, PcgDice)
    }
}

impl<D: LootDice> LootGenerator<D> {
    pub fn with_dice(config: LootConfig, dice: D) -> Self {
        Self { config, dice }
    }

    pub fn config(&self) -> &LootConfig {
        &self.config
    }

    /// Builds the table for every `B` cell of `grid`; all other cells stay empty.
    pub fn generate(&self, grid: &Grid) -> ChestTable {
        let mut table = ChestTable::new(grid.dimensions());
        let chests = grid.iter().filter(|&(_, cell)| cell == Cell::Chest);

        for (index, (position, _)) in chests.enumerate() {
            let chest = if (index as u64) < u64::from(self.config.guaranteed_keys) {
                Chest::keys(1)
            } else {
                self.roll(index as u64)
            };
            table.set(position, chest);
        }

        tracing::debug!(
            seed = self.config.seed,
            chests = table.iter().count(),
            "generated chest loot"
        );
        table
    }

    fn roll(&self, chest_index: u64) -> Chest {
        let seed = self.config.seed;
        let kind = RollKey::new(seed, chest_index, RollPurpose::Kind);
        let amount = RollKey::new(seed, chest_index, RollPurpose::Amount);

        match LootKind::from_die(self.dice.face(kind, 3)) {
            LootKind::Potion => Chest::potion(
                self.dice
                    .amount(amount, self.config.potion_min..=self.config.potion_max),
            ),
            LootKind::Key => Chest::keys(1),
            LootKind::Bomb => Chest::bomb(
                self.dice
                    .amount(amount, self.config.bomb_min..=self.config.bomb_max),
            ),
        }
    }
}
