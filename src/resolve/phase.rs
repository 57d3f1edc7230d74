//! Match phases and win detection.
//!
//! Phase flow:
//! - Placement(p) -> Resolving            (on end of turn)
//! - Resolving    -> GameOver(result)     (if a side was wiped out)
//! - Resolving    -> Placement(other p)   (otherwise)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

/// Final outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Winner(Player),
    Draw,
}

impl GameResult {
    /// Returns the protocol label: `p1`, `p2` or `draw`.
    pub const fn name(self) -> &'static str {
        match self {
            GameResult::Winner(p) => p.name(),
            GameResult::Draw => "draw",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The stage a match is in. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// The given player may place units or end the turn.
    Placement(Player),
    /// Combat and win check are running. Never observable between calls.
    Resolving,
    /// Terminal.
    GameOver(GameResult),
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::GameOver(_))
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Placement(p) => write!(f, "placement {}", p),
            GamePhase::Resolving => f.write_str("resolving"),
            GamePhase::GameOver(r) => write!(f, "over {}", r),
        }
    }
}

/// Declares a result once a side has no living units left.
///
/// Both sides empty at once is a draw; no result while both still field at
/// least one unit.
pub fn check_winner(board: &Board) -> Option<GameResult> {
    let p1 = board.count_of(Player::P1);
    let p2 = board.count_of(Player::P2);
    match (p1, p2) {
        (0, 0) => Some(GameResult::Draw),
        (0, _) => Some(GameResult::Winner(Player::P2)),
        (_, 0) => Some(GameResult::Winner(Player::P1)),
        _ => None,
    }
}

/// Phase that follows a resolved round for `active`.
pub fn next_phase(active: Player, result: Option<GameResult>) -> GamePhase {
    match result {
        Some(r) => GamePhase::GameOver(r),
        None => GamePhase::Placement(active.other()),
    }
}
