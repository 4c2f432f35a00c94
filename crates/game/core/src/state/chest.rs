use super::{MapDimensions, Position};

/// Contents of one chest, resolved once when the player enters its cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chest {
    /// Healing value; zero means no potion.
    pub potion: u32,
    /// Number of keys inside.
    pub keys: u32,
    /// Trap damage; zero means no bomb.
    pub bomb: u32,
}

impl Chest {
    pub const EMPTY: Self = Self {
        potion: 0,
        keys: 0,
        bomb: 0,
    };

    pub const fn potion(value: u32) -> Self {
        Self {
            potion: value,
            ..Self::EMPTY
        }
    }

    pub const fn keys(count: u32) -> Self {
        Self {
            keys: count,
            ..Self::EMPTY
        }
    }

    pub const fn bomb(damage: u32) -> Self {
        Self {
            bomb: damage,
            ..Self::EMPTY
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.potion == 0 && self.keys == 0 && self.bomb == 0
    }
}

/// Per-cell chest contents, parallel to the grid.
///
/// Filled once by a loot generator and only read afterwards; looting is
/// recorded on the grid, never here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChestTable {
    dimensions: MapDimensions,
    chests: Vec<Chest>,
}

impl ChestTable {
    /// Creates a table of empty chests.
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            chests: vec![Chest::EMPTY; dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Contents at `position`; empty when out of bounds.
    pub fn get(&self, position: Position) -> Chest {
        self.dimensions
            .index(position)
            .map(|index| self.chests[index])
            .unwrap_or_default()
    }

    /// Stores `chest` at `position`. Returns false when out of bounds.
    pub fn set(&mut self, position: Position, chest: Chest) -> bool {
        match self.dimensions.index(position) {
            Some(index) => {
                self.chests[index] = chest;
                true
            }
            None => false,
        }
    }

    /// Builder form of [`ChestTable::set`].
    #[must_use]
    pub fn with(mut self, position: Position, chest: Chest) -> Self {
        self.set(position, chest);
        self
    }

    /// Iterates over non-empty chests with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Chest)> + '_ {
        self.chests
            .iter()
            .enumerate()
            .filter(|(_, chest)| !chest.is_empty())
            .map(|(index, &chest)| (self.dimensions.position(index), chest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_empty_and_writes_are_rejected() {
        let mut table = ChestTable::new(MapDimensions::new(2, 2));

        assert!(!table.set(Position::new(2, 0), Chest::keys(1)));
        assert_eq!(table.get(Position::new(2, 0)), Chest::EMPTY);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn iter_lists_only_filled_chests() {
        let table = ChestTable::new(MapDimensions::new(2, 2))
            .with(Position::new(0, 1), Chest::potion(3))
            .with(Position::new(1, 0), Chest::bomb(2));

        let filled: Vec<_> = table.iter().collect();
        assert_eq!(
            filled,
            vec![
                (Position::new(0, 1), Chest::potion(3)),
                (Position::new(1, 0), Chest::bomb(2)),
            ]
        );
    }
}
