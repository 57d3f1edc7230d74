//! Unit placement.
//!
//! Validates and applies placement requests on behalf of the active player,
//! tracking how many units of each kind each player may still field, and
//! enumerates legal drops for presentation layers.

use crate::board::{Board, Player, Position, UnitId, UnitKind, ALL_KINDS, ALL_PLAYERS};
use crate::error::PlacementError;
use crate::resolve::GamePhase;

/// Remaining units per player and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budgets {
    counts: [[u32; ALL_KINDS.len()]; ALL_PLAYERS.len()],
}

impl Budgets {
    /// Gives both players the same allowance.
    pub fn uniform(per_kind: impl Fn(UnitKind) -> u32) -> Self {
        let mut budgets = Budgets::default();
        for player in ALL_PLAYERS {
            for kind in ALL_KINDS {
                budgets.set(player, kind, per_kind(kind));
            }
        }
        budgets
    }

    pub fn remaining(&self, player: Player, kind: UnitKind) -> u32 {
        self.counts[player.index()][kind.index()]
    }

    pub fn set(&mut self, player: Player, kind: UnitKind, count: u32) {
        self.counts[player.index()][kind.index()] = count;
    }

    /// Total units `player` may still place.
    pub fn total(&self, player: Player) -> u32 {
        self.counts[player.index()].iter().sum()
    }

    fn take(&mut self, player: Player, kind: UnitKind) -> Result<(), PlacementError> {
        let slot = &mut self.counts[player.index()][kind.index()];
        if *slot == 0 {
            return Err(PlacementError::BudgetExhausted { player, kind });
        }
        *slot -= 1;
        Ok(())
    }
}

/// Applies placement requests against the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementController {
    budgets: Budgets,
    /// Whether each player has fielded at least one unit this match.
    deployed: [bool; ALL_PLAYERS.len()],
}

impl PlacementController {
    pub fn new(budgets: Budgets) -> Self {
        PlacementController {
            budgets,
            deployed: [false; ALL_PLAYERS.len()],
        }
    }

    pub fn budgets(&self) -> &Budgets {
        &self.budgets
    }

    pub fn has_deployed(&self, player: Player) -> bool {
        self.deployed[player.index()]
    }

    /// Places a unit if `phase` allows it, the cell is free and `owner` has
    /// budget left. On error nothing is changed.
    pub fn place(
        &mut self,
        board: &mut Board,
        phase: GamePhase,
        owner: Player,
        position: Position,
        kind: UnitKind,
    ) -> Result<UnitId, PlacementError> {
        match phase {
            GamePhase::GameOver(_) => return Err(PlacementError::GameAlreadyOver),
            GamePhase::Placement(active) if active == owner => {}
            _ => return Err(PlacementError::WrongPhase),
        }
        if !board.contains(position) {
            return Err(PlacementError::OutOfBounds { position });
        }
        if board.unit_at(position).is_some() {
            return Err(PlacementError::CellOccupied { position });
        }
        if self.budgets.remaining(owner, kind) == 0 {
            return Err(PlacementError::BudgetExhausted { player: owner, kind });
        }

        let id = board.place_unit(owner, position, kind)?;
        self.budgets.take(owner, kind)?;
        self.deployed[owner.index()] = true;
        tracing::trace!(player = %owner, kind = kind.name(), %position, unit = %id, "unit placed");
        Ok(id)
    }
}

/// Every `(cell, kind)` the player could place right now.
///
/// Cells come in scan order, kinds in catalog order. Empty when it is not
/// `player`'s placement phase.
pub fn legal_placements(
    board: &Board,
    phase: GamePhase,
    budgets: &Budgets,
    player: Player,
) -> Vec<(Position, UnitKind)> {
    if phase != GamePhase::Placement(player) {
        return Vec::new();
    }
    let kinds: Vec<UnitKind> = ALL_KINDS
        .into_iter()
        .filter(|&k| budgets.remaining(player, k) > 0)
        .collect();
    if kinds.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            let pos = Position::new(row, col);
            if board.unit_at(pos).is_some() {
                continue;
            }
            out.extend(kinds.iter().map(|&k| (pos, k)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::GameResult;

    fn standard() -> PlacementController {
        PlacementController::new(Budgets::uniform(|k| match k {
            UnitKind::Ogre => 1,
            _ => 2,
        }))
    }

    #[test]
    fn place_decrements_budget() {
        let mut board = Board::new(8, 8);
        let mut ctl = standard();
        let phase = GamePhase::Placement(Player::P1);
        ctl.place(&mut board, phase, Player::P1, Position::new(0, 0), UnitKind::Ogre)
            .unwrap();
        assert_eq!(ctl.budgets().remaining(Player::P1, UnitKind::Ogre), 0);
        assert_eq!(ctl.budgets().remaining(Player::P2, UnitKind::Ogre), 1);
        assert!(ctl.has_deployed(Player::P1));
        assert!(!ctl.has_deployed(Player::P2));
    }

    #[test]
    fn exhausted_budget_is_rejected() {
        let mut board = Board::new(8, 8);
        let mut ctl = standard();
        let phase = GamePhase::Placement(Player::P1);
        ctl.place(&mut board, phase, Player::P1, Position::new(0, 0), UnitKind::Ogre)
            .unwrap();
        let before = (board.clone(), ctl.clone());
        assert_eq!(
            ctl.place(&mut board, phase, Player::P1, Position::new(0, 1), UnitKind::Ogre),
            Err(PlacementError::BudgetExhausted { player: Player::P1, kind: UnitKind::Ogre })
        );
        assert_eq!((board, ctl), before);
    }

    #[test]
    fn wrong_player_is_rejected() {
        let mut board = Board::new(8, 8);
        let mut ctl = standard();
        assert_eq!(
            ctl.place(
                &mut board,
                GamePhase::Placement(Player::P1),
                Player::P2,
                Position::new(0, 0),
                UnitKind::Archer
            ),
            Err(PlacementError::WrongPhase)
        );
        assert_eq!(
            ctl.place(&mut board, GamePhase::Resolving, Player::P1, Position::new(0, 0), UnitKind::Archer),
            Err(PlacementError::WrongPhase)
        );
        assert!(board.is_empty());
    }

    #[test]
    fn game_over_is_rejected() {
        let mut board = Board::new(8, 8);
        let mut ctl = standard();
        assert_eq!(
            ctl.place(
                &mut board,
                GamePhase::GameOver(GameResult::Draw),
                Player::P1,
                Position::new(0, 0),
                UnitKind::Archer
            ),
            Err(PlacementError::GameAlreadyOver)
        );
    }

    #[test]
    fn board_errors_take_precedence_over_budget() {
        let mut board = Board::new(2, 2);
        let mut ctl = PlacementController::new(Budgets::default());
        let phase = GamePhase::Placement(Player::P1);
        assert_eq!(
            ctl.place(&mut board, phase, Player::P1, Position::new(5, 0), UnitKind::Archer),
            Err(PlacementError::OutOfBounds { position: Position::new(5, 0) })
        );
    }

    #[test]
    fn legal_placements_skip_occupied_and_exhausted() {
        let mut board = Board::new(2, 1);
        let mut ctl = standard();
        let phase = GamePhase::Placement(Player::P1);
        ctl.place(&mut board, phase, Player::P1, Position::new(0, 0), UnitKind::Ogre)
            .unwrap();
        let legal = legal_placements(&board, phase, ctl.budgets(), Player::P1);
        assert_eq!(
            legal,
            vec![
                (Position::new(0, 1), UnitKind::Archer),
                (Position::new(0, 1), UnitKind::Warrior),
            ]
        );
        assert!(legal_placements(&board, phase, ctl.budgets(), Player::P2).is_empty());
    }

    #[test]
    fn totals_sum_kinds() {
        assert_eq!(standard().budgets().total(Player::P1), 5);
    }
}
