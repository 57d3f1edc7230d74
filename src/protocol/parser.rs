//! Command parser for the line protocol.
//!
//! Parses incoming text commands into structured `Command` variants that
//! the main loop dispatches on.

use crate::board::{Player, Position, UnitKind};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; answered with `readyok`.
    IsReady,

    /// Start a new game, optionally overriding the configured board size.
    NewGame { size: Option<(usize, usize)> },

    /// Place a unit: `place <player> <kind> <row> <col>`.
    Place {
        player: Player,
        kind: UnitKind,
        position: Position,
    },

    /// End the active player's turn and resolve a round.
    EndTurn,

    /// Report the current phase or result.
    Status,

    /// Report a player's remaining placement budget.
    Budget { player: Player },

    /// Print the board as text rows.
    Board,

    /// Print the board as one JSON line.
    View,

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines and unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "endturn" => Some(Command::EndTurn),
        "status" => Some(Command::Status),
        "board" => Some(Command::Board),
        "view" => Some(Command::View),
        "quit" => Some(Command::Quit),

        "newgame" => parse_newgame(&tokens),
        "place" => parse_place(&tokens),
        "budget" => parse_budget(&tokens),

        other => {
            tracing::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `newgame [<width> <height>]`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    match tokens.len() {
        1 => Some(Command::NewGame { size: None }),
        3 => {
            let width = tokens[1].parse::<usize>().ok();
            let height = tokens[2].parse::<usize>().ok();
            match (width, height) {
                (Some(w), Some(h)) => Some(Command::NewGame { size: Some((w, h)) }),
                _ => {
                    tracing::warn!("invalid board size: '{} {}'", tokens[1], tokens[2]);
                    None
                }
            }
        }
        _ => {
            tracing::warn!("malformed newgame: expected 'newgame [<width> <height>]'");
            None
        }
    }
}

/// Parses `place <player> <kind> <row> <col>`.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 5 {
        tracing::warn!("malformed place: expected 'place <player> <kind> <row> <col>'");
        return None;
    }
    let Some(player) = Player::from_name(tokens[1]) else {
        tracing::warn!("unknown player: '{}'", tokens[1]);
        return None;
    };
    let Some(kind) = UnitKind::from_name(tokens[2]) else {
        tracing::warn!("unknown unit kind: '{}'", tokens[2]);
        return None;
    };
    let (Ok(row), Ok(col)) = (tokens[3].parse::<usize>(), tokens[4].parse::<usize>()) else {
        tracing::warn!("invalid position: '{} {}'", tokens[3], tokens[4]);
        return None;
    };
    Some(Command::Place {
        player,
        kind,
        position: Position::new(row, col),
    })
}

/// Parses `budget <player>`.
fn parse_budget(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        tracing::warn!("malformed budget: expected 'budget <player>'");
        return None;
    }
    match Player::from_name(tokens[1]) {
        Some(player) => Some(Command::Budget { player }),
        None => {
            tracing::warn!("unknown player: '{}'", tokens[1]);
            None
        }
    }
}
