//! Glue code tying content loading, the step engine and the terminal together.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use maze_content::{ConfigLoader, LootGenerator, MapLoader, MapPreset, SessionConfig};
use maze_core::{Command, GameError, SessionResult, StepEngine, StepError, StepOutcome};

use crate::config::{CliConfig, MapSource};
use crate::input::{InputHandler, LineInput};
use crate::presentation::{Renderer, Theme};

/// One interactive session over a line reader and a writer.
///
/// Generic over both ends so tests can script input and capture output.
pub struct MazeApp<R, W> {
    input: InputHandler<R>,
    renderer: Renderer<W>,
}

impl<R: BufRead, W: Write> MazeApp<R, W> {
    pub fn new(reader: R, out: W, theme: Theme) -> Self {
        Self {
            input: InputHandler::new(reader),
            renderer: Renderer::new(out, theme),
        }
    }

    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    /// Sets up and plays a whole session.
    ///
    /// Returns `None` when input closed before a map was chosen.
    pub fn execute(&mut self, config: &CliConfig) -> Result<Option<SessionResult>> {
        let Some(engine) = self.setup(config)? else {
            tracing::info!("Input closed before a map was chosen");
            return Ok(None);
        };
        self.run(engine).map(Some)
    }

    /// Loads configuration, map and loot, and builds the engine.
    pub fn setup(&mut self, config: &CliConfig) -> Result<Option<StepEngine>> {
        let mut session = match &config.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => SessionConfig::default(),
        };

        let grid = match &config.map {
            MapSource::File(path) => MapLoader::load(path)?,
            MapSource::Preset(preset) => {
                session.loot.guaranteed_keys = preset.guaranteed_keys();
                MapLoader::preset(*preset)?
            }
            MapSource::Prompt => {
                let Some(preset) = self.choose_preset()? else {
                    return Ok(None);
                };
                session.loot.guaranteed_keys = preset.guaranteed_keys();
                MapLoader::preset(preset)?
            }
        };

        // Flags beat the config file; without either the clock picks the seed.
        session.loot.seed = match (config.seed, &config.config_path) {
            (Some(seed), _) => seed,
            (None, Some(_)) => session.loot.seed,
            (None, None) => CliConfig::clock_seed(),
        };
        if let Some(max_health) = config.max_health {
            session.game.max_health = max_health;
        }

        tracing::info!(
            dimensions = %grid.dimensions(),
            seed = session.loot.seed,
            guaranteed_keys = session.loot.guaranteed_keys,
            max_health = session.game.max_health,
            "Session configured"
        );

        let chests = LootGenerator::new(session.loot).generate(&grid);
        let engine = StepEngine::with_config(grid, chests, &session.game)
            .context("Failed to set up session")?;

        Ok(Some(engine))
    }

    /// Plays turns until the engine reaches a terminal state.
    pub fn run(&mut self, mut engine: StepEngine) -> Result<SessionResult> {
        tracing::info!(start = %engine.start(), "Session started");
        self.renderer.loaded_map(engine.grid())?;

        while !engine.status().is_terminal() {
            let view = match engine.prompt() {
                Ok(view) => view,
                Err(error) => {
                    self.report(&error)?;
                    break;
                }
            };
            self.renderer.turn(&view)?;

            let command = self.read_command()?;
            tracing::debug!(%command, "Command received");

            match engine.execute(command) {
                Ok(outcome) => {
                    self.renderer.outcome(&outcome)?;
                    if let StepOutcome::Advanced(report) = &outcome {
                        tracing::debug!(
                            position = %report.position,
                            entered = %report.entered,
                            discovered = report.discovered.len(),
                            "Advanced"
                        );
                        if report.chest.is_some() {
                            self.renderer.press_enter()?;
                            self.input.wait_for_enter()?;
                        }
                    }
                }
                Err(error) => self.report(&error)?,
            }
        }

        let result = engine.finish();
        tracing::info!(status = %result.status, steps = result.steps, "Session finished");
        self.renderer.summary(&result)?;

        Ok(result)
    }

    fn choose_preset(&mut self) -> Result<Option<MapPreset>> {
        self.renderer.preset_menu()?;
        loop {
            match self.input.read_preset()? {
                LineInput::Submit(preset) => return Ok(Some(preset)),
                LineInput::Invalid(text) => {
                    tracing::debug!(input = %text, "Rejected map choice");
                    self.renderer.invalid_preset()?;
                }
                LineInput::Closed => return Ok(None),
            }
        }
    }

    /// Reads until a valid command arrives. Closed input counts as quitting.
    fn read_command(&mut self) -> Result<Command> {
        loop {
            match self.input.read_command()? {
                LineInput::Submit(command) => return Ok(command),
                LineInput::Invalid(text) => {
                    tracing::debug!(input = %text, "Rejected command");
                    self.renderer.invalid_command()?;
                }
                LineInput::Closed => {
                    tracing::info!("Input closed, quitting");
                    return Ok(Command::Quit);
                }
            }
        }
    }

    fn report(&mut self, error: &StepError) -> Result<()> {
        let severity = error.severity();
        if severity.is_internal() {
            tracing::error!(code = error.error_code(), "{}", error);
            return Err(anyhow::anyhow!("Engine error: {}", error));
        }

        tracing::info!(
            code = error.error_code(),
            severity = severity.as_str(),
            "{}",
            error
        );
        self.renderer.step_error(error)?;
        Ok(())
    }
}
