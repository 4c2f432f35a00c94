//! Error types for the step engine.

use crate::engine::SessionStatus;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors surfaced while executing a player command.
///
/// [`StepError::EmptyHistory`] leaves the session running. `EmptyFrontier`
/// and `FatalHealthLoss` are reported after the engine has moved to a
/// terminal state, and `SessionOver` rejects a command without touching state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("no accessible path to the exit remains")]
    EmptyFrontier,

    #[error("nothing to undo")]
    EmptyHistory,

    #[error("trap at {position} dealt {damage} damage, health is now {health}")]
    FatalHealthLoss {
        position: Position,
        damage: u32,
        health: i32,
    },

    #[error("session already ended ({status})")]
    SessionOver { status: SessionStatus },

    /// Broken invariant: every queued cell comes from `Grid::find` or a
    /// bounds-checked neighbor, so a well-formed engine never reports this.
    /// Frontends should treat it as a bug and abort.
    #[error("frontier yielded {position}, which lies outside the grid")]
    OutOfBounds { position: Position },
}

impl StepError {
    /// Returns true if the error moved the session to a terminal state.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::EmptyFrontier | Self::FatalHealthLoss { .. })
    }
}

impl GameError for StepError {
    fn severity(&self) -> ErrorSeverity {
        use StepError::*;
        match self {
            EmptyHistory => ErrorSeverity::Recoverable,
            EmptyFrontier | FatalHealthLoss { .. } => ErrorSeverity::Terminal,
            SessionOver { .. } => ErrorSeverity::Validation,
            OutOfBounds { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StepError::*;
        match self {
            EmptyFrontier => "STEP_EMPTY_FRONTIER",
            EmptyHistory => "STEP_EMPTY_HISTORY",
            FatalHealthLoss { .. } => "STEP_FATAL_HEALTH_LOSS",
            SessionOver { .. } => "STEP_SESSION_OVER",
            OutOfBounds { .. } => "STEP_OUT_OF_BOUNDS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rule_endings_close_the_session() {
        let fatal = StepError::FatalHealthLoss {
            position: Position::ORIGIN,
            damage: 3,
            health: 0,
        };
        assert!(fatal.ends_session());
        assert!(StepError::EmptyFrontier.ends_session());
        assert!(!StepError::EmptyHistory.ends_session());
        assert!(!StepError::SessionOver {
            status: SessionStatus::Won
        }
        .ends_session());
    }

    #[test]
    fn out_of_bounds_is_classified_as_internal() {
        let error = StepError::OutOfBounds {
            position: Position::new(-1, 0),
        };

        assert!(error.severity().is_internal());
        assert!(!error.ends_session());
        assert_eq!(error.error_code(), "STEP_OUT_OF_BOUNDS");
        assert_eq!(
            StepError::EmptyHistory.severity(),
            ErrorSeverity::Recoverable
        );
    }
}
