//! Errors returned by board, placement and turn operations.
//!
//! Every variant is a precondition violation detected before any state is
//! touched, so a returned error always means the game is unchanged.

use thiserror::Error;

use crate::board::{Player, Position, UnitKind};

/// Why a placement or turn request was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("position {position} is outside the board")]
    OutOfBounds { position: Position },

    #[error("cell {position} is already occupied")]
    CellOccupied { position: Position },

    #[error("{player} has no {kind} left to place")]
    BudgetExhausted { player: Player, kind: UnitKind },

    #[error("it is not that player's placement phase")]
    WrongPhase,

    #[error("the game is already over")]
    GameAlreadyOver,
}
