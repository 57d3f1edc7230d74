//! Battle-round resolution.
//!
//! Every living unit gets one attack per round against the nearest enemy in
//! range. In the default simultaneous mode all targeting reads a snapshot
//! taken before any damage lands, hits are accumulated per target, and only
//! then applied and cleaned up, so the outcome does not depend on the order
//! in which units are visited. Sequential mode instead lets each unit act on
//! the live board in scan order.

use serde::{Deserialize, Serialize};

use crate::board::{Board, DistanceMetric, Player, Position, UnitId};

/// How attacks within one round interact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Snapshot, accumulate, then apply. Mutual kills are possible.
    #[default]
    Simultaneous,
    /// Units act one at a time in scan order; kills take effect immediately.
    Sequential,
}

/// One attack performed during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub attacker: UnitId,
    pub target: UnitId,
    pub damage: i32,
    pub distance: usize,
}

/// What happened in a round. The board stays the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Attacks in the order attackers were visited.
    pub attacks: Vec<Attack>,
    /// Units removed at the end of the round, in scan order.
    pub casualties: Vec<UnitId>,
}

/// A unit as captured at the start of a round.
#[derive(Debug, Clone, Copy)]
struct Combatant {
    id: UnitId,
    owner: Player,
    position: Position,
    damage: i32,
    range: usize,
}

impl Combatant {
    fn capture(board: &Board) -> impl Iterator<Item = Combatant> + '_ {
        board.units_in_scan_order().map(|u| {
            let stats = u.stats();
            Combatant {
                id: u.id,
                owner: u.owner,
                position: u.position,
                damage: stats.damage,
                range: stats.range,
            }
        })
    }
}

/// Picks the closest enemy within range of `attacker`.
///
/// `candidates` must yield snapshot indices in scan order; on equal
/// distance the first one seen wins. Returns the index and the distance.
fn nearest_enemy<'a>(
    attacker: &Combatant,
    candidates: impl Iterator<Item = (usize, &'a Combatant)>,
    metric: DistanceMetric,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (i, c) in candidates {
        if c.owner == attacker.owner {
            continue;
        }
        let d = metric.distance(attacker.position, c.position);
        if d > attacker.range {
            continue;
        }
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best
}

/// Reusable round resolver.
///
/// Holds the snapshot and damage buffers so repeated rounds do not
/// reallocate them.
#[derive(Debug, Clone)]
pub struct BattleResolver {
    metric: DistanceMetric,
    mode: ResolutionMode,
    snapshot: Vec<Combatant>,
    pending: Vec<i32>,
}

impl BattleResolver {
    pub fn new(metric: DistanceMetric, mode: ResolutionMode) -> Self {
        BattleResolver {
            metric,
            mode,
            snapshot: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    /// Runs exactly one battle round on `board`.
    ///
    /// On return every dead unit has been removed and the board is
    /// consistent again.
    pub fn resolve(&mut self, board: &mut Board) -> RoundReport {
        let report = match self.mode {
            ResolutionMode::Simultaneous => self.resolve_simultaneous(board),
            ResolutionMode::Sequential => self.resolve_sequential(board),
        };
        tracing::debug!(
            attacks = report.attacks.len(),
            casualties = report.casualties.len(),
            survivors = board.len(),
            "round resolved"
        );
        report
    }

    fn resolve_simultaneous(&mut self, board: &mut Board) -> RoundReport {
        self.snapshot.clear();
        self.snapshot.extend(Combatant::capture(board));
        self.pending.clear();
        self.pending.resize(self.snapshot.len(), 0);

        let mut report = RoundReport::default();
        for attacker in &self.snapshot {
            let Some((t, distance)) = nearest_enemy(attacker, self.snapshot.iter().enumerate(), self.metric) else {
                continue;
            };
            let target = self.snapshot[t].id;
            self.pending[t] += attacker.damage;
            tracing::debug!(
                attacker = %attacker.id,
                target = %target,
                damage = attacker.damage,
                distance,
                "attack"
            );
            report.attacks.push(Attack {
                attacker: attacker.id,
                target,
                damage: attacker.damage,
                distance,
            });
        }

        for (c, &damage) in self.snapshot.iter().zip(&self.pending) {
            if damage == 0 {
                continue;
            }
            if let Some(unit) = board.unit_mut(c.id) {
                unit.health -= damage;
            }
        }

        report.casualties = board.remove_dead();
        for id in &report.casualties {
            tracing::debug!(unit = %id, "unit destroyed");
        }
        report
    }

    fn resolve_sequential(&mut self, board: &mut Board) -> RoundReport {
        self.snapshot.clear();
        self.snapshot.extend(Combatant::capture(board));
        // Units never move, so the snapshot stays valid; only liveness changes.
        let mut alive = vec![true; self.snapshot.len()];
        let mut killed = Vec::new();

        let mut report = RoundReport::default();
        for (a, attacker) in self.snapshot.iter().enumerate() {
            if !alive[a] {
                continue;
            }
            let living = self.snapshot.iter().enumerate().filter(|&(i, _)| alive[i]);
            let Some((t, distance)) = nearest_enemy(attacker, living, self.metric) else {
                continue;
            };
            let target = self.snapshot[t].id;
            let Some(unit) = board.unit_mut(target) else {
                continue;
            };
            unit.health -= attacker.damage;
            let dead = unit.is_dead();
            tracing::debug!(
                attacker = %attacker.id,
                target = %target,
                damage = attacker.damage,
                distance,
                "attack"
            );
            report.attacks.push(Attack {
                attacker: attacker.id,
                target,
                damage: attacker.damage,
                distance,
            });
            if dead {
                alive[t] = false;
                killed.push(t);
                board.remove_unit(target);
                tracing::debug!(unit = %target, "unit destroyed");
            }
        }

        killed.sort_unstable();
        report.casualties = killed.into_iter().map(|i| self.snapshot[i].id).collect();
        report
    }
}

/// Resolves one simultaneous round with the given metric.
pub fn resolve_round(board: &mut Board, metric: DistanceMetric) -> RoundReport {
    BattleResolver::new(metric, ResolutionMode::Simultaneous).resolve(board)
}
