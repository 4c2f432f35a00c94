//! Data-driven content for maze sessions.
//!
//! This crate feeds the engine everything it treats as external input:
//! - Map layouts (plain-text files, plus the bundled presets)
//! - Chest loot (seeded generator)
//! - Session configuration (TOML)
//!
//! Content is consumed when a session is set up and never mutated by the engine.

pub mod loot;
pub mod presets;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use loot::{LootConfig, LootDice, LootGenerator, PcgDice};
pub use presets::MapPreset;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, MapLoader, SessionConfig};
