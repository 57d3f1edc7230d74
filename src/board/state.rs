//! The battle grid.
//!
//! Units live in a flat arena indexed by [`UnitId`]; each cell stores the id
//! of the unit standing on it, or `None`. The arena slot is cleared when a
//! unit is removed and ids are never handed out twice, so a stale id simply
//! resolves to nothing.

use crate::error::PlacementError;

use super::player::Player;
use super::position::Position;
use super::unit::{Unit, UnitId, UnitKind};

/// Grid of fixed `width x height` holding at most one live unit per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells.
    cells: Vec<Option<UnitId>>,
    /// Unit arena: `units[id]` is `None` once the unit has been removed.
    units: Vec<Option<Unit>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// Sizes come from a validated `GameConfig`; `width * height` must not
    /// overflow.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![None; width * height],
            units: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `position` lies on the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    fn cell_index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row * self.width + position.col)
        } else {
            None
        }
    }

    fn position_of(&self, idx: usize) -> Position {
        Position::new(idx / self.width, idx % self.width)
    }

    /// Creates a unit of `kind` for `owner` at `position`.
    ///
    /// Fails without touching the board if the cell is off the grid or
    /// already holds a live unit. Budgets are the caller's concern.
    pub fn place_unit(
        &mut self,
        owner: Player,
        position: Position,
        kind: UnitKind,
    ) -> Result<UnitId, PlacementError> {
        let idx = self
            .cell_index(position)
            .ok_or(PlacementError::OutOfBounds { position })?;
        if self.cells[idx].is_some() {
            return Err(PlacementError::CellOccupied { position });
        }
        let id = UnitId(self.units.len());
        self.units.push(Some(Unit::new(id, kind, owner, position)));
        self.cells[idx] = Some(id);
        Ok(id)
    }

    /// Returns the live unit standing on `position`, if any.
    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        let idx = self.cell_index(position)?;
        self.cells[idx].and_then(|id| self.unit(id))
    }

    /// Looks up a live unit by id.
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.0).and_then(|u| u.as_ref())
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id.0).and_then(|u| u.as_mut())
    }

    /// Live units owned by `owner`, in no particular order.
    pub fn living_units_of(&self, owner: Player) -> impl Iterator<Item = &Unit> + '_ {
        self.units
            .iter()
            .flatten()
            .filter(move |u| u.owner == owner)
    }

    /// Number of live units owned by `owner`.
    pub fn count_of(&self, owner: Player) -> usize {
        self.living_units_of(owner).count()
    }

    /// All live units in row-major scan order.
    pub fn units_in_scan_order(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.cells
            .iter()
            .filter_map(move |cell| cell.and_then(|id| self.unit(id)))
    }

    /// Total number of live units.
    pub fn len(&self) -> usize {
        self.units.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes a unit from the board. No-op if it is already gone.
    pub fn remove_unit(&mut self, id: UnitId) {
        let Some(slot) = self.units.get_mut(id.0) else {
            return;
        };
        let Some(unit) = slot.take() else {
            return;
        };
        if let Some(idx) = self.cell_index(unit.position) {
            if self.cells[idx] == Some(id) {
                self.cells[idx] = None;
            }
        }
    }

    /// Removes every unit whose health is at or below zero and returns their
    /// ids in scan order.
    pub(crate) fn remove_dead(&mut self) -> Vec<UnitId> {
        let dead: Vec<UnitId> = self
            .units_in_scan_order()
            .filter(|u| u.is_dead())
            .map(|u| u.id)
            .collect();
        for &id in &dead {
            self.remove_unit(id);
        }
        dead
    }

    /// Checks that cells and the unit arena agree with each other.
    pub fn is_consistent(&self) -> bool {
        for (idx, cell) in self.cells.iter().enumerate() {
            if let Some(id) = cell {
                match self.unit(*id) {
                    Some(u) if u.position == self.position_of(idx) && !u.is_dead() => {}
                    _ => return false,
                }
            }
        }
        self.units.iter().flatten().all(|u| {
            self.cell_index(u.position)
                .map_or(false, |idx| self.cells[idx] == Some(u.id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_units() {
        let board = Board::new(8, 8);
        assert!(board.is_empty());
        assert_eq!(board.units_in_scan_order().count(), 0);
        assert!(board.is_consistent());
    }

    #[test]
    fn place_unit_works() {
        let mut board = Board::new(8, 8);
        let id = board
            .place_unit(Player::P1, Position::new(3, 3), UnitKind::Warrior)
            .unwrap();
        let u = board.unit_at(Position::new(3, 3)).unwrap();
        assert_eq!(u.id, id);
        assert_eq!(u.owner, Player::P1);
        assert_eq!(u.health, 100);
        assert!(board.is_consistent());
    }

    #[test]
    fn place_unit_rejects_occupied_cell() {
        let mut board = Board::new(8, 8);
        board.place_unit(Player::P1, Position::new(0, 0), UnitKind::Ogre).unwrap();
        let before = board.clone();
        assert_eq!(
            board.place_unit(Player::P2, Position::new(0, 0), UnitKind::Archer),
            Err(PlacementError::CellOccupied { position: Position::new(0, 0) })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn place_unit_rejects_out_of_bounds() {
        let mut board = Board::new(4, 2);
        assert_eq!(
            board.place_unit(Player::P1, Position::new(2, 0), UnitKind::Ogre),
            Err(PlacementError::OutOfBounds { position: Position::new(2, 0) })
        );
        assert_eq!(
            board.place_unit(Player::P1, Position::new(0, 4), UnitKind::Ogre),
            Err(PlacementError::OutOfBounds { position: Position::new(0, 4) })
        );
        assert!(board.place_unit(Player::P1, Position::new(1, 3), UnitKind::Ogre).is_ok());
    }

    #[test]
    fn remove_unit_is_idempotent() {
        let mut board = Board::new(8, 8);
        let id = board.place_unit(Player::P2, Position::new(1, 1), UnitKind::Archer).unwrap();
        board.remove_unit(id);
        assert!(board.unit_at(Position::new(1, 1)).is_none());
        assert!(board.unit(id).is_none());
        board.remove_unit(id);
        board.remove_unit(UnitId(99));
        assert!(board.is_consistent());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut board = Board::new(8, 8);
        let a = board.place_unit(Player::P1, Position::new(0, 0), UnitKind::Archer).unwrap();
        board.remove_unit(a);
        let b = board.place_unit(Player::P1, Position::new(0, 0), UnitKind::Archer).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_arena_slots() {
        let mut board = Board::new(8, 8);
        for col in 0..8 {
            let id = board.place_unit(Player::P2, Position::new(7, col), UnitKind::Warrior).unwrap();
            assert_eq!(id, UnitId(col));
            board.remove_unit(id);
        }
        let next = board.place_unit(Player::P1, Position::new(7, 0), UnitKind::Ogre).unwrap();
        assert_eq!(next, UnitId(8));
        assert_eq!(board.unit(next).unwrap().id, next);
    }

    #[test]
    fn scan_order_is_row_major() {
        let mut board = Board::new(8, 8);
        board.place_unit(Player::P1, Position::new(2, 0), UnitKind::Archer).unwrap();
        board.place_unit(Player::P2, Position::new(0, 5), UnitKind::Archer).unwrap();
        board.place_unit(Player::P1, Position::new(0, 1), UnitKind::Archer).unwrap();
        let order: Vec<Position> = board.units_in_scan_order().map(|u| u.position).collect();
        assert_eq!(
            order,
            vec![Position::new(0, 1), Position::new(0, 5), Position::new(2, 0)]
        );
    }

    #[test]
    fn living_units_by_owner() {
        let mut board = Board::new(8, 8);
        board.place_unit(Player::P1, Position::new(0, 0), UnitKind::Archer).unwrap();
        board.place_unit(Player::P1, Position::new(0, 1), UnitKind::Ogre).unwrap();
        board.place_unit(Player::P2, Position::new(7, 7), UnitKind::Warrior).unwrap();
        assert_eq!(board.count_of(Player::P1), 2);
        assert_eq!(board.count_of(Player::P2), 1);
        assert!(board.living_units_of(Player::P2).all(|u| u.owner == Player::P2));
    }

    #[test]
    fn remove_dead_reports_scan_order() {
        let mut board = Board::new(8, 8);
        let late = board.place_unit(Player::P1, Position::new(5, 5), UnitKind::Archer).unwrap();
        let early = board.place_unit(Player::P2, Position::new(0, 0), UnitKind::Archer).unwrap();
        let alive = board.place_unit(Player::P2, Position::new(3, 3), UnitKind::Archer).unwrap();
        board.unit_mut(late).unwrap().health = 0;
        board.unit_mut(early).unwrap().health = -40;
        assert_eq!(board.remove_dead(), vec![early, late]);
        assert_eq!(board.len(), 1);
        assert!(board.unit(alive).is_some());
        assert!(board.is_consistent());
    }
}
