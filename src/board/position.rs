//! Grid coordinates and distance metrics.
//!
//! Positions are `(row, col)` pairs with row 0 at the top. The row-major
//! ordering derived here is the scan order used everywhere the engine needs
//! a deterministic iteration: unit activation, target tie-breaks, casualty
//! reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Distance to `other` under the given metric.
    pub fn distance(self, other: Position, metric: DistanceMetric) -> usize {
        metric.distance(self, other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How range is measured between two cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// `max(|dr|, |dc|)`: range covers a square neighbourhood.
    #[default]
    Chebyshev,
    /// `|dr| + |dc|`: range covers a diamond.
    Manhattan,
}

impl DistanceMetric {
    pub fn distance(self, a: Position, b: Position) -> usize {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        match self {
            DistanceMetric::Chebyshev => dr.max(dc),
            DistanceMetric::Manhattan => dr + dc,
        }
    }

}
