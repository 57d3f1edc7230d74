//! Read-only snapshots of the board for presentation layers.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::Board;
use super::unit::{UnitId, UnitKind};

/// One occupied cell as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub id: UnitId,
    pub kind: UnitKind,
    pub owner: Player,
    pub health: i32,
    pub max_health: i32,
}

/// An owned copy of the grid at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub width: usize,
    pub height: usize,
    pub turn: u32,
    /// Human-readable phase, e.g. `placement p1` or `over draw`.
    pub phase: String,
    /// Row-major cells.
    pub cells: Vec<Option<CellView>>,
}

impl BoardView {
    pub fn capture(board: &Board, turn: u32, phase: String) -> Self {
        let mut cells = Vec::with_capacity(board.width() * board.height());
        for row in 0..board.height() {
            for col in 0..board.width() {
                let cell = board.unit_at(super::Position::new(row, col)).map(|u| CellView {
                    id: u.id,
                    kind: u.kind,
                    owner: u.owner,
                    health: u.health,
                    max_health: u.stats().max_health,
                });
                cells.push(cell);
            }
        }
        BoardView {
            width: board.width(),
            height: board.height(),
            turn,
            phase,
            cells,
        }
    }

    /// Returns the cell at `(row, col)`, or `None` if empty or off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col].as_ref()
    }

    /// Renders the view as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Renders one text line per row: `.` for empty, the kind glyph for a
    /// unit, uppercase for P1 and lowercase for P2.
    pub fn to_text(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        None => '.',
                        Some(c) if c.owner == Player::P1 => c.kind.glyph(),
                        Some(c) => c.kind.glyph().to_ascii_lowercase(),
                    })
                    .collect()
            })
            .collect()
    }
}
