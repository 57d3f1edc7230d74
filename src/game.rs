//! Turn control.
//!
//! [`Game`] owns the board and is the only thing callers drive: placements
//! go through it, and `end_turn` runs a full battle round plus the win check
//! before handing the turn to the other player.

use crate::board::{Board, BoardView, DistanceMetric, Player, Position, Unit, UnitId, UnitKind};
use crate::config::{ConfigError, GameConfig};
use crate::error::PlacementError;
use crate::placement::{legal_placements, Budgets, PlacementController};
use crate::resolve::{
    check_winner, next_phase, BattleResolver, GamePhase, GameResult, ResolutionMode, RoundReport,
};

/// A match in progress, or finished.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    phase: GamePhase,
    placement: PlacementController,
    resolver: BattleResolver,
    turn: u32,
}

impl Game {
    /// Starts a match from a validated configuration. P1 places first.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::info!(
            width = config.width,
            height = config.height,
            metric = ?config.metric,
            mode = ?config.mode,
            "new game"
        );
        Ok(Game {
            board: Board::new(config.width, config.height),
            phase: GamePhase::Placement(Player::P1),
            placement: PlacementController::new(config.budgets()),
            resolver: BattleResolver::new(config.metric, config.mode),
            turn: 0,
        })
    }

    /// Starts a default-policy match with explicit size and budgets.
    pub fn with_budgets(width: usize, height: usize, budgets: Budgets) -> Result<Self, ConfigError> {
        let mut game = Game::new(&GameConfig {
            width,
            height,
            ..GameConfig::default()
        })?;
        game.placement = PlacementController::new(budgets);
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Number of completed `end_turn` calls.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn metric(&self) -> DistanceMetric {
        self.resolver.metric()
    }

    pub fn mode(&self) -> ResolutionMode {
        self.resolver.mode()
    }

    /// The player allowed to act, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.phase {
            GamePhase::Placement(p) => Some(p),
            _ => None,
        }
    }

    /// Final result, if the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::GameOver(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Units of `kind` that `player` may still place.
    pub fn remaining(&self, player: Player, kind: UnitKind) -> u32 {
        self.placement.budgets().remaining(player, kind)
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.board.unit_at(position)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.board.unit(id)
    }

    /// Places a unit for `owner`, who must be the active player.
    pub fn place_unit(
        &mut self,
        owner: Player,
        position: Position,
        kind: UnitKind,
    ) -> Result<UnitId, PlacementError> {
        self.placement
            .place(&mut self.board, self.phase, owner, position, kind)
    }

    /// Every legal `(cell, kind)` drop for `player` right now.
    pub fn legal_placements(&self, player: Player) -> Vec<(Position, UnitKind)> {
        legal_placements(&self.board, self.phase, self.placement.budgets(), player)
    }

    /// Ends the active player's turn: resolves one battle round, checks for
    /// a winner, and passes the turn or ends the game.
    ///
    /// The win check only applies once both players have fielded a unit, so
    /// an opponent who has not placed anything yet is not counted as wiped
    /// out. Before that, a player with an empty budget and no units on the
    /// board can never take part, and loses (or draws, if both are stuck).
    pub fn end_turn(&mut self) -> Result<RoundReport, PlacementError> {
        let active = match self.phase {
            GamePhase::Placement(p) => p,
            GamePhase::GameOver(_) => return Err(PlacementError::GameAlreadyOver),
            GamePhase::Resolving => return Err(PlacementError::WrongPhase),
        };

        self.phase = GamePhase::Resolving;
        let report = self.resolver.resolve(&mut self.board);
        self.turn += 1;

        let engaged = self.placement.has_deployed(Player::P1) && self.placement.has_deployed(Player::P2);
        let result = if engaged {
            check_winner(&self.board)
        } else {
            self.stranded_result()
        };
        self.phase = next_phase(active, result);

        if let Some(r) = result {
            tracing::info!(turn = self.turn, result = %r, "game over");
        }
        Ok(report)
    }

    /// Result for a match that cannot get going because a player has
    /// nothing left to place and nothing on the board.
    fn stranded_result(&self) -> Option<GameResult> {
        let stranded = |p: Player| {
            self.board.count_of(p) == 0 && self.placement.budgets().total(p) == 0
        };
        match (stranded(Player::P1), stranded(Player::P2)) {
            (true, true) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(Player::P2)),
            (false, true) => Some(GameResult::Winner(Player::P1)),
            (false, false) => None,
        }
    }

    /// Owned snapshot of the board for renderers.
    pub fn board_view(&self) -> BoardView {
        BoardView::capture(&self.board, self.turn, self.phase.to_string())
    }
}
