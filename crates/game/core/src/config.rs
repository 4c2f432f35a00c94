/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Health ceiling; the player also starts the session at this value.
    pub max_health: i32,
    /// Keys already in the backpack when the session starts.
    pub starting_keys: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: i32 = 10;
    pub const DEFAULT_STARTING_KEYS: u32 = 0;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            starting_keys: Self::DEFAULT_STARTING_KEYS,
        }
    }

    pub fn with_max_health(max_health: i32) -> Self {
        Self {
            max_health,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
