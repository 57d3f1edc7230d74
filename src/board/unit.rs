//! Unit kinds, their base stats, and unit instances.
//!
//! The catalog is a closed enum with a static stats table. All per-kind
//! behaviour goes through [`UnitKind::stats`].

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::position::Position;

/// The kind of a combat unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Archer,
    Warrior,
    Ogre,
}

/// All unit kinds in catalog order.
pub const ALL_KINDS: [UnitKind; 3] = [UnitKind::Archer, UnitKind::Warrior, UnitKind::Ogre];

/// Immutable base stats of a unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitStats {
    pub max_health: i32,
    pub damage: i32,
    /// Attack range in grid cells, always at least 1.
    pub range: usize,
}

const STATS: [UnitStats; 3] = [
    UnitStats { max_health: 50, damage: 20, range: 3 },
    UnitStats { max_health: 100, damage: 30, range: 1 },
    UnitStats { max_health: 150, damage: 50, range: 1 },
];

impl UnitKind {
    /// Looks up the base stats for this kind.
    pub const fn stats(self) -> UnitStats {
        STATS[self as usize]
    }

    /// Returns the lowercase name used in the protocol and config files.
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Archer => "archer",
            UnitKind::Warrior => "warrior",
            UnitKind::Ogre => "ogre",
        }
    }

    /// Returns the uppercase board glyph.
    pub const fn glyph(self) -> char {
        match self {
            UnitKind::Archer => 'A',
            UnitKind::Warrior => 'W',
            UnitKind::Ogre => 'O',
        }
    }

    /// Parses a kind from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<UnitKind> {
        match name.to_ascii_lowercase().as_str() {
            "archer" => Some(UnitKind::Archer),
            "warrior" => Some(UnitKind::Warrior),
            "ogre" => Some(UnitKind::Ogre),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of a unit for the lifetime of a game.
///
/// Ids index the board's unit arena and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub usize);

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub owner: Player,
    pub position: Position,
    /// Current health. Zero or below means the unit is due for removal.
    pub health: i32,
}

impl Unit {
    pub fn new(id: UnitId, kind: UnitKind, owner: Player, position: Position) -> Self {
        Unit {
            id,
            kind,
            owner,
            position,
            health: kind.stats().max_health,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn stats(&self) -> UnitStats {
        self.kind.stats()
    }
}
