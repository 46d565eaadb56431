//! Error types for game operations.
//!
//! These mark invariant violations and impossible requests. Collaborator
//! failures (image, commentary, storage writes) never surface here; they
//! degrade to documented fallbacks instead.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// Fewer than two competitors are available to draw from.
    RosterTooSmall { have: usize },
    /// The environment pool for this tier is empty.
    NoEnvironments,
    /// Action not allowed in the current session phase.
    WrongPhase,
    /// The picked name does not match either fighter.
    UnknownCompetitor { name: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::RosterTooSmall { have } => {
                write!(f, "need at least two competitors, roster has {have}")
            }
            GameError::NoEnvironments => write!(f, "no environments available"),
            GameError::WrongPhase => write!(f, "action not allowed in the current phase"),
            GameError::UnknownCompetitor { name } => {
                write!(f, "{name} is not one of the fighters")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type alias for game operations.
pub type GameResult<T> = Result<T, GameError>;
