//! The two sides of a match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player. Matches are always exactly two-sided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::P1, Player::P2];

impl Player {
    /// Returns the opposing player.
    pub const fn other(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Returns the lowercase protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// Parses a player from its protocol name (`p1`/`p2`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Player> {
        match name.to_ascii_lowercase().as_str() {
            "p1" | "1" => Some(Player::P1),
            "p2" | "2" => Some(Player::P2),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
