//! Error types for composition and match operations
//!
//! Nothing in the battle engine itself fails; these errors cover the
//! controller-facing operations where the caller can recover.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::limits::Side;
use crate::state::MatchPhase;

/// Monster composition failures. The input cards are never consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CompositionError {
    /// No cards were placed on the field slot
    #[error("no cards on the field")]
    NoCards,
    /// The field holds no noun card
    #[error("a monster needs at least one noun card")]
    NoNounCard,
}

/// Errors that can occur while driving a match
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum GameError {
    /// Action not allowed in current phase
    #[error("expected phase {expected:?}, match is in {actual:?}")]
    WrongPhase {
        expected: MatchPhase,
        actual: MatchPhase,
    },
    /// Hand index out of range
    #[error("invalid hand index {index}")]
    InvalidHandIndex { index: usize },
    /// The same hand card was selected twice
    #[error("hand index {index} selected twice")]
    DuplicateHandIndex { index: usize },
    /// A side has no monster deployed
    #[error("{side} has no monster on the field")]
    EmptyField { side: Side },
    /// All rounds have been played
    #[error("the match is already finished")]
    MatchFinished,
    /// Composition rejected the selected cards
    #[error(transparent)]
    Composition(#[from] CompositionError),
}

/// Result type alias for match operations
pub type GameResult<T> = Result<T, GameError>;
