//! Combat resolution and phase sequencing.
//!
//! Resolves one battle round on the board and decides what comes next:
//! another placement turn or the end of the match.

pub mod battle;
pub mod phase;

pub use battle::{resolve_round, Attack, BattleResolver, ResolutionMode, RoundReport};
pub use phase::{check_winner, next_phase, GamePhase, GameResult};
