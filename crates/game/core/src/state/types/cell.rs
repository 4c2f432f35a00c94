/// Closed set of cell kinds a maze grid can hold.
///
/// `Floor` and `Trail` are both open path; `Trail` marks a cell the player
/// has already entered (or a door that was unlocked).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Cell {
    /// `#`: where the walk begins.
    Start,
    /// `@`: entering it wins the session.
    Exit,
    /// `*`: never passable.
    Wall,
    /// `$`: passable only by spending a key.
    Door,
    /// `B`: resolved once, when the player enters it.
    Chest,
    /// ` `: untouched open path.
    #[default]
    Floor,
    /// `-`: explored path.
    Trail,
}

impl Cell {
    pub const fn symbol(self) -> char {
        match self {
            Cell::Start => '#',
            Cell::Exit => '@',
            Cell::Wall => '*',
            Cell::Door => '$',
            Cell::Chest => 'B',
            Cell::Floor => ' ',
            Cell::Trail => '-',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Cell::Start),
            '@' => Some(Cell::Exit),
            '*' => Some(Cell::Wall),
            '$' => Some(Cell::Door),
            'B' => Some(Cell::Chest),
            ' ' => Some(Cell::Floor),
            '-' => Some(Cell::Trail),
            _ => None,
        }
    }

    /// Cells that undo treats as not yet discovered when rebuilding visited marks.
    pub const fn reads_as_unvisited(self) -> bool {
        matches!(self, Cell::Floor | Cell::Chest | Cell::Door)
    }

    /// Start and exit markers survive being entered and being on the solution path.
    pub const fn is_landmark(self) -> bool {
        matches!(self, Cell::Start | Cell::Exit)
    }
}
