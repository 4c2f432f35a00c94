//! Terminal presentation: cell styling and message rendering.

pub mod renderer;
pub mod theme;

pub use renderer::{Renderer, status_message};
pub use theme::Theme;

use crossterm::tty::IsTty;

/// Colors are used only on an interactive stdout with color allowed.
pub fn stdout_theme(color_allowed: bool) -> Theme {
    Theme::new(color_allowed && std::io::stdout().is_tty())
}
