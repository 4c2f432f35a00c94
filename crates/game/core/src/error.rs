//! Common error infrastructure for maze-core.
//!
//! Domain-specific errors (`StepError`, `MapError`, `SetupError`) are defined
//! next to the components that raise them. This module holds the shared
//! classification used by frontends to decide whether a session continues.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the command was rejected, the turn continues unchanged
/// - **Validation**: invalid input or setup, should not retry without changes
/// - **Terminal**: the game rules ended the session (a loss, not a crash)
/// - **Internal**: unexpected state inconsistency that indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Command rejected with no state change.
    ///
    /// Examples: undo requested with an empty history
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown map symbol, missing start cell, command after the session ended
    Validation,

    /// Session ended by the game rules.
    ///
    /// Examples: frontier exhausted, health reduced to zero
    Terminal,

    /// Unexpected state inconsistency.
    ///
    /// Examples: frontier yielding a coordinate outside the grid
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Terminal => "terminal",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the session can keep accepting commands.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all maze-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
