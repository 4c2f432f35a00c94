use std::fmt;

use super::{Cell, MapDimensions, MapError, Position};

/// Mutable `rows × cols` grid of cells, stored row-major.
///
/// `Clone` is the deep copy used by snapshots; each copy mutates independently
/// and is released when its owner drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: MapDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell set to `fill`.
    pub fn filled(dimensions: MapDimensions, fill: Cell) -> Self {
        Self {
            dimensions,
            cells: vec![fill; dimensions.area()],
        }
    }

    /// Decodes `rows` lines of `text` into a grid of `cols` columns.
    ///
    /// Lines shorter than `cols` are padded with open floor and longer lines
    /// are truncated. Lines past `rows` are ignored.
    pub fn load(rows: u32, cols: u32, text: &str) -> Result<Self, MapError> {
        let dimensions = MapDimensions::new(rows, cols);
        if rows == 0 || cols == 0 {
            return Err(MapError::EmptyDimensions { dimensions });
        }

        let mut grid = Self::filled(dimensions, Cell::Floor);
        let mut found = 0;
        for (row, line) in text.lines().take(rows as usize).enumerate() {
            for (col, symbol) in line.chars().take(cols as usize).enumerate() {
                let position = Position::new(row as i32, col as i32);
                let cell =
                    Cell::from_symbol(symbol).ok_or(MapError::UnknownSymbol { symbol, position })?;
                grid.apply(position, cell);
            }
            found += 1;
        }

        if found < rows {
            return Err(MapError::MissingRows {
                expected: rows,
                found,
            });
        }

        Ok(grid)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.dimensions
            .index(position)
            .map(|index| self.cells[index])
    }

    /// Writes `cell` at `position`, returning the previous cell.
    ///
    /// Returns `None` and leaves the grid untouched when `position` is out of bounds.
    pub fn apply(&mut self, position: Position, cell: Cell) -> Option<Cell> {
        let index = self.dimensions.index(position)?;
        Some(std::mem::replace(&mut self.cells[index], cell))
    }

    /// First position (row-major) holding `cell`.
    pub fn find(&self, cell: Cell) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|index| self.dimensions.position(index))
    }

    /// Iterates over every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &cell)| (self.dimensions.position(index), cell))
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dimensions.cols.max(1) as usize)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
