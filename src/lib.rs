//! Skirmish engine library.
//!
//! A deterministic two-player battle game on a fixed grid. Players place
//! typed units; at the end of each turn every unit attacks the nearest enemy
//! in range, all at once. Exposes the board model, placement, round
//! resolution, turn control, and the line protocol used by the binary.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod placement;
pub mod protocol;
pub mod resolve;

pub use board::{BoardView, Player, Position, UnitKind};
pub use config::GameConfig;
pub use error::PlacementError;
pub use game::Game;
pub use resolve::{GamePhase, GameResult, RoundReport};
