//! Line-oriented rendering of the map, backpack and turn messages.

use std::io::{self, Write};

use maze_core::{
    AdvanceReport, ChestReport, Grid, Inventory, Position, PotionUse, SessionResult,
    SessionStatus, StepError, StepOutcome, TurnView,
};

use super::theme::Theme;

pub const COMMAND_MENU: &str = "Choose: 1 - Advance, 2 - Undo, 3 - Quit";
pub const INVALID_COMMAND: &str = "Invalid input. Type 1, 2 or 3: ";
pub const PRESET_MENU: &str = "Choose the map (a, b or c): ";
pub const INVALID_PRESET: &str = "Invalid choice. Type a, b or c: ";

/// Writes everything the player sees to `W`.
pub struct Renderer<W> {
    out: W,
    theme: Theme,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn preset_menu(&mut self) -> io::Result<()> {
        write!(self.out, "{PRESET_MENU}")?;
        self.out.flush()
    }

    pub fn invalid_preset(&mut self) -> io::Result<()> {
        write!(self.out, "{INVALID_PRESET}")?;
        self.out.flush()
    }

    pub fn loaded_map(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "\nLoaded map:")?;
        self.grid(grid)?;
        writeln!(
            self.out,
            "\nStarting step-by-step search (1=Advance, 2=Undo, 3=Quit)..."
        )
    }

    /// Start-of-turn screen: next frontier cell, map, backpack and menu.
    pub fn turn(&mut self, view: &TurnView<'_>) -> io::Result<()> {
        writeln!(self.out, "\nNext cell to process: {}", view.next)?;
        writeln!(self.out, "\nCurrent map:")?;
        self.grid(view.grid)?;
        writeln!(self.out)?;
        self.inventory(view.inventory)?;
        writeln!(self.out, "\n{COMMAND_MENU}")?;
        self.out.flush()
    }

    pub fn invalid_command(&mut self) -> io::Result<()> {
        write!(self.out, "{INVALID_COMMAND}")?;
        self.out.flush()
    }

    pub fn outcome(&mut self, outcome: &StepOutcome) -> io::Result<()> {
        match outcome {
            StepOutcome::Advanced(report) => self.advance(report),
            StepOutcome::Undone { position, .. } => writeln!(
                self.out,
                "\nPrevious state restored. Returning to {}",
                position
            ),
            StepOutcome::Quit => Ok(()),
        }
    }

    /// Reports a command the engine refused. Terminal errors only print their
    /// details here; the ending itself is announced by [`Renderer::summary`].
    pub fn step_error(&mut self, error: &StepError) -> io::Result<()> {
        match error {
            StepError::EmptyHistory => writeln!(self.out, "\nNo previous moves to undo."),
            StepError::FatalHealthLoss {
                position,
                damage,
                health,
            } => {
                writeln!(self.out, "\nFound a chest at {}!", position)?;
                self.trap(*damage, *health)
            }
            StepError::EmptyFrontier | StepError::SessionOver { .. } => Ok(()),
            StepError::OutOfBounds { .. } => writeln!(self.out, "\nError: {}", error),
        }
    }

    pub fn press_enter(&mut self) -> io::Result<()> {
        write!(self.out, "Press ENTER to continue...")?;
        self.out.flush()
    }

    /// Ending message, final map and final backpack.
    pub fn summary(&mut self, result: &SessionResult) -> io::Result<()> {
        let message = status_message(result.status);
        let line = match result.status {
            SessionStatus::Won => self.theme.success(message),
            SessionStatus::LostHealth | SessionStatus::LostNoPath => self.theme.danger(message),
            SessionStatus::Quit | SessionStatus::AwaitingInput => message.to_string(),
        };
        writeln!(self.out, "\n{}", line)?;

        writeln!(self.out, "\nFinal map:")?;
        self.grid(&result.grid)?;
        writeln!(self.out, "\nFinal backpack status:")?;
        self.inventory(&result.inventory)?;
        self.out.flush()
    }

    fn advance(&mut self, report: &AdvanceReport) -> io::Result<()> {
        if let Some(chest) = &report.chest {
            writeln!(self.out, "\nFound a chest at {}!", report.position)?;
            self.chest(chest)?;
        }
        for &door in &report.unlocked {
            self.door(door)?;
        }
        Ok(())
    }

    fn chest(&mut self, chest: &ChestReport) -> io::Result<()> {
        if let Some(health) = chest.health_after_trap {
            self.trap(chest.contents.bomb, health)?;
        }
        match chest.potion {
            Some(PotionUse::Drunk { health }) => {
                let line = format!("Drank a potion. Health restored to: {}", health);
                writeln!(self.out, "{}", self.theme.success(&line))?;
            }
            Some(PotionUse::Banked { stored }) => writeln!(
                self.out,
                "Health full. Stored the potion in the backpack. Total: {}",
                stored
            )?,
            None => {}
        }
        if let Some(total) = chest.keys_total {
            let line = format!("Picked up a key! Total: {}", total);
            writeln!(self.out, "{}", self.theme.success(&line))?;
        }
        Ok(())
    }

    fn trap(&mut self, damage: u32, health: i32) -> io::Result<()> {
        let line = format!(
            "TRAP! A bomb exploded. Damage: {}. Health left: {}",
            damage, health
        );
        writeln!(self.out, "{}", self.theme.danger(&line))
    }

    fn door(&mut self, position: Position) -> io::Result<()> {
        writeln!(
            self.out,
            "\nDoor unlocked at {} (spent 1 key).",
            position
        )
    }

    fn grid(&mut self, grid: &Grid) -> io::Result<()> {
        for row in grid.rows() {
            let line: String = row.iter().map(|&cell| self.theme.paint(cell)).collect();
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn inventory(&mut self, inventory: &Inventory) -> io::Result<()> {
        writeln!(
            self.out,
            "Health: {}/{}\nKeys: {}\nPotions: {}\nBombs: {}",
            inventory.health,
            inventory.max_health,
            inventory.keys,
            inventory.potions,
            inventory.bombs
        )
    }
}

pub fn status_message(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Won => "Path found!",
        SessionStatus::LostNoPath => "No path exists or no exit remains.",
        SessionStatus::LostHealth => "The player died. Game over.",
        SessionStatus::Quit => "Run interrupted by the player.",
        SessionStatus::AwaitingInput => "Session still in progress.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrayvec::ArrayVec;
    use maze_core::{Cell, Chest, ChestOutcome, InventoryCounters};

    fn renderer() -> Renderer<Vec<u8>> {
        Renderer::new(Vec::new(), Theme::plain())
    }

    fn text(renderer: Renderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn turn_shows_next_cell_map_backpack_and_menu() {
        let grid = Grid::load(2, 3, "#B \n**@").unwrap();
        let inventory = Inventory::new(10);
        let view = TurnView {
            next: Position::new(0, 1),
            grid: &grid,
            inventory: &inventory,
        };

        let mut r = renderer();
        r.turn(&view).unwrap();
        let out = text(r);

        assert!(out.contains("Next cell to process: (0,1)"));
        assert!(out.contains("#B \n**@\n"));
        assert!(out.contains("Health: 10/10\nKeys: 0\nPotions: 0\nBombs: 0"));
        assert!(out.contains(COMMAND_MENU));
    }

    #[test]
    fn chest_report_lists_each_effect() {
        let report = AdvanceReport {
            position: Position::new(1, 2),
            entered: Cell::Chest,
            chest: Some(ChestReport {
                contents: Chest {
                    potion: 3,
                    keys: 1,
                    bomb: 2,
                },
                health_after_trap: Some(8),
                potion: Some(PotionUse::Drunk { health: 10 }),
                keys_total: Some(1),
            }),
            unlocked: ArrayVec::new(),
            discovered: ArrayVec::new(),
            status: SessionStatus::AwaitingInput,
        };

        let mut r = renderer();
        r.outcome(&StepOutcome::Advanced(report)).unwrap();
        let out = text(r);

        assert!(out.contains("Found a chest at (1,2)!"));
        assert!(out.contains("TRAP! A bomb exploded. Damage: 2. Health left: 8"));
        assert!(out.contains("Drank a potion. Health restored to: 10"));
        assert!(out.contains("Picked up a key! Total: 1"));
    }

    #[test]
    fn unlocked_doors_are_announced() {
        let mut unlocked = ArrayVec::new();
        unlocked.push(Position::new(0, 2));
        let report = AdvanceReport {
            position: Position::new(0, 1),
            entered: Cell::Floor,
            chest: None,
            unlocked,
            discovered: ArrayVec::new(),
            status: SessionStatus::AwaitingInput,
        };

        let mut r = renderer();
        r.outcome(&StepOutcome::Advanced(report)).unwrap();

        assert!(text(r).contains("Door unlocked at (0,2) (spent 1 key)."));
    }

    #[test]
    fn undo_and_empty_history_messages() {
        let mut r = renderer();
        r.outcome(&StepOutcome::Undone {
            position: Position::new(2, 0),
            restored: InventoryCounters::default(),
            reverted: ChestOutcome::NONE,
        })
        .unwrap();
        r.step_error(&StepError::EmptyHistory).unwrap();
        let out = text(r);

        assert!(out.contains("Previous state restored. Returning to (2,0)"));
        assert!(out.contains("No previous moves to undo."));
    }

    #[test]
    fn summary_prints_ending_map_and_backpack() {
        let result = SessionResult {
            status: SessionStatus::LostHealth,
            grid: Grid::load(1, 2, "#-").unwrap(),
            inventory: Inventory {
                health: -1,
                bombs: 1,
                ..Inventory::new(10)
            },
            steps: 1,
        };

        let mut r = renderer();
        r.summary(&result).unwrap();
        let out = text(r);

        assert!(out.contains("The player died. Game over."));
        assert!(out.contains("Final map:\n#-\n"));
        assert!(out.contains("Final backpack status:\nHealth: -1/10"));
        assert!(out.contains("Bombs: 1"));
    }
}
