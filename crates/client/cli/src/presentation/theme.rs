//! Crossterm styling for map cells.

use crossterm::style::{Color, Stylize};
use maze_core::Cell;

/// Color scheme for the terminal map.
///
/// With color disabled every cell prints as its bare symbol, which keeps
/// output stable for pipes and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    pub const fn plain() -> Self {
        Self::new(false)
    }

    pub const fn is_colored(&self) -> bool {
        self.color
    }

    /// Foreground color for a cell, if it gets one.
    pub const fn cell_color(cell: Cell) -> Option<Color> {
        match cell {
            Cell::Start => Some(Color::Cyan),
            Cell::Exit => Some(Color::Green),
            Cell::Wall => Some(Color::DarkGrey),
            Cell::Door => Some(Color::Yellow),
            Cell::Chest => Some(Color::Magenta),
            Cell::Trail => Some(Color::Blue),
            Cell::Floor => None,
        }
    }

    /// Text to print for one cell.
    pub fn paint(&self, cell: Cell) -> String {
        let symbol = cell.symbol();
        match Self::cell_color(cell) {
            Some(color) if self.color => symbol.with(color).bold().to_string(),
            _ => symbol.to_string(),
        }
    }

    /// Styles an alert line (traps, death).
    pub fn danger(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Styles a good-news line (keys, healing, victory).
    pub fn success(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}
