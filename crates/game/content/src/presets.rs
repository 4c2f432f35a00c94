//! Bundled maps selectable by letter.

/// One of the maps shipped with the game.
///
/// Larger maps guarantee more key chests so their doors stay openable.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MapPreset {
    A,
    B,
    C,
}

impl MapPreset {
    pub const ALL: [MapPreset; 3] = [MapPreset::A, MapPreset::B, MapPreset::C];

    /// Number of leading chests (row-major) that always hold one key.
    pub const fn guaranteed_keys(self) -> u32 {
        match self {
            MapPreset::A => 3,
            MapPreset::B => 4,
            MapPreset::C => 5,
        }
    }

    /// Map file contents: a `cols rows` header followed by the grid rows.
    pub const fn source(self) -> &'static str {
        match self {
            MapPreset::A => include_str!("../maps/map_a.txt"),
            MapPreset::B => include_str!("../maps/map_b.txt"),
            MapPreset::C => include_str!("../maps/map_c.txt"),
        }
    }
}
