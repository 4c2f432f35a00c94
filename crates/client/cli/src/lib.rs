//! Terminal frontend for the stepped maze explorer.
//!
//! The binary wires these pieces together:
//! - [`config`]: environment and flag settings
//! - [`logging`]: per-session log file
//! - [`app`]: the turn loop over any reader/writer pair
//! - [`input`] and [`presentation`]: text in, text out

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::MazeApp;
pub use config::{CliConfig, MapSource};
