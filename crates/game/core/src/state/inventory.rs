use crate::config::GameConfig;

/// The player's backpack and health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub max_health: i32,
    /// Can drop to zero or below; that ends the session.
    pub health: i32,
    pub keys: u32,
    /// Potions found while already at full health.
    pub potions: u32,
    /// Traps that went off.
    pub bombs: u32,
}

/// The four counters a snapshot captures. `max_health` never changes mid-session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryCounters {
    pub health: i32,
    pub keys: u32,
    pub potions: u32,
    pub bombs: u32,
}

/// What happened to a potion found in a chest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PotionUse {
    /// Drunk on the spot; `health` is the value after healing.
    Drunk { health: i32 },
    /// Health was full, so it went into the backpack; `stored` is the new total.
    Banked { stored: u32 },
}

impl Inventory {
    /// Full health, empty backpack.
    pub fn new(max_health: i32) -> Self {
        Self {
            max_health,
            health: max_health,
            keys: 0,
            potions: 0,
            bombs: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            keys: config.starting_keys,
            ..Self::new(config.max_health)
        }
    }

    pub fn counters(&self) -> InventoryCounters {
        InventoryCounters {
            health: self.health,
            keys: self.keys,
            potions: self.potions,
            bombs: self.bombs,
        }
    }

    pub fn restore(&mut self, counters: InventoryCounters) {
        self.health = counters.health;
        self.keys = counters.keys;
        self.potions = counters.potions;
        self.bombs = counters.bombs;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Spends one key if any is held.
    pub fn take_key(&mut self) -> bool {
        if self.keys == 0 {
            return false;
        }
        self.keys -= 1;
        true
    }

    pub fn add_keys(&mut self, count: u32) {
        self.keys = self.keys.saturating_add(count);
    }

    /// Applies trap damage and counts the explosion.
    pub fn trigger_bomb(&mut self, damage: u32) {
        self.health = self.health.saturating_sub_unsigned(damage);
        self.bombs = self.bombs.saturating_add(1);
    }

    /// Heals up to `max_health` when hurt, otherwise banks the potion.
    pub fn use_potion(&mut self, value: u32) -> PotionUse {
        if self.health < self.max_health {
            self.health = self
                .health
                .saturating_add_unsigned(value)
                .min(self.max_health);
            PotionUse::Drunk {
                health: self.health,
            }
        } else {
            self.potions = self.potions.saturating_add(1);
            PotionUse::Banked {
                stored: self.potions,
            }
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potion_heals_but_never_past_maximum() {
        let mut inventory = Inventory::new(10);
        inventory.health = 8;

        assert_eq!(inventory.use_potion(5), PotionUse::Drunk { health: 10 });
        assert_eq!(inventory.health, 10);
        assert_eq!(inventory.potions, 0);
    }

    #[test]
    fn potion_is_banked_at_full_health() {
        let mut inventory = Inventory::new(10);

        assert_eq!(inventory.use_potion(3), PotionUse::Banked { stored: 1 });
        assert_eq!(inventory.use_potion(3), PotionUse::Banked { stored: 2 });
        assert_eq!(inventory.health, 10);
    }

    #[test]
    fn bomb_can_take_health_below_zero() {
        let mut inventory = Inventory::new(3);

        inventory.trigger_bomb(4);

        assert_eq!(inventory.health, -1);
        assert_eq!(inventory.bombs, 1);
        assert!(inventory.is_dead());
    }

    #[test]
    fn take_key_fails_on_empty_backpack() {
        let mut inventory = Inventory::new(10);
        assert!(!inventory.take_key());

        inventory.add_keys(1);
        assert!(inventory.take_key());
        assert_eq!(inventory.keys, 0);
    }

    #[test]
    fn restore_leaves_maximum_untouched() {
        let mut inventory = Inventory::new(10);
        let counters = InventoryCounters {
            health: 4,
            keys: 2,
            potions: 1,
            bombs: 3,
        };

        inventory.restore(counters);

        assert_eq!(inventory.counters(), counters);
        assert_eq!(inventory.max_health, 10);
    }
}
