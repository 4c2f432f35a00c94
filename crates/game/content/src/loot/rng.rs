//! Seeded dice for loot rolls.
//!
//! Every roll is keyed by the session seed, the chest's row-major index and
//! what the roll decides. Any chest can be recomputed from the seed alone,
//! and filling chests in a different order never shifts another chest.

use std::ops::RangeInclusive;

/// What a roll decides for one chest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollPurpose {
    /// Potion, key or bomb.
    Kind = 0,
    /// Potion strength or bomb damage.
    Amount = 1,
}

/// Identifies a single roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RollKey {
    pub seed: u64,
    pub chest: u64,
    pub purpose: RollPurpose,
}

impl RollKey {
    pub const fn new(seed: u64, chest: u64, purpose: RollPurpose) -> Self {
        Self {
            seed,
            chest,
            purpose,
        }
    }

    /// Folds the key into one avalanche-mixed word (SplitMix64 finalizer).
    pub const fn mix(self) -> u64 {
        let mut hash = self.seed;
        hash ^= self.chest.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        hash ^= (self.purpose as u64).wrapping_mul(0x85eb_ca6b);

        hash ^= hash >> 33;
        hash = hash.wrapping_mul(0xff51_afd7_ed55_8ccd);
        hash ^= hash >> 33;
        hash
    }
}

/// Source of loot dice. Equal keys must give equal rolls.
pub trait LootDice {
    /// Uniform 32-bit value for `key`.
    fn raw(&self, key: RollKey) -> u32;

    /// Face of a die with `sides` sides, counted from 1.
    fn face(&self, key: RollKey, sides: u32) -> u32 {
        self.raw(key) % sides.max(1) + 1
    }

    /// Value inside `range`. A range holding at most one value yields its start.
    fn amount(&self, key: RollKey, range: RangeInclusive<u32>) -> u32 {
        let (low, high) = range.into_inner();
        if low >= high {
            return low;
        }
        low + self.raw(key) % (high - low + 1)
    }
}

/// One LCG step of the mixed key followed by the PCG-XSH-RR permutation.
///
/// See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgDice;

impl PcgDice {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    const fn permute(word: u64) -> u32 {
        let state = word
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        xorshifted.rotate_right((state >> 59) as u32)
    }
}

impl LootDice for PcgDice {
    fn raw(&self, key: RollKey) -> u32 {
        Self::permute(key.mix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(chest: u64, purpose: RollPurpose) -> RollKey {
        RollKey::new(7, chest, purpose)
    }

    #[test]
    fn equal_keys_roll_equal_values() {
        let key = key(3, RollPurpose::Kind);
        assert_eq!(PcgDice.raw(key), PcgDice.raw(key));
    }

    #[test]
    fn faces_and_amounts_stay_in_bounds() {
        for chest in 0..200 {
            let amount = PcgDice.amount(key(chest, RollPurpose::Amount), 1..=5);
            assert!((1..=5).contains(&amount));

            let face = PcgDice.face(key(chest, RollPurpose::Kind), 3);
            assert!((1..=3).contains(&face));
        }
    }

    #[test]
    fn single_value_and_inverted_ranges_yield_their_start() {
        let key = key(0, RollPurpose::Amount);
        assert_eq!(PcgDice.amount(key, 4..=4), 4);
        assert_eq!(PcgDice.amount(key, 6..=2), 6);
    }

    #[test]
    fn purpose_and_chest_change_the_mixed_word() {
        assert_ne!(
            key(0, RollPurpose::Kind).mix(),
            key(0, RollPurpose::Amount).mix()
        );
        assert_ne!(key(0, RollPurpose::Kind).mix(), key(1, RollPurpose::Kind).mix());
    }
}
