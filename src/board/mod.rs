//! Board representation and unit types.
//!
//! Contains grid coordinates, the two players, the unit catalog, the
//! arena-backed board, and read-only views for renderers.

pub mod player;
pub mod position;
pub mod state;
pub mod unit;
pub mod view;

pub use player::{Player, ALL_PLAYERS};
pub use position::{DistanceMetric, Position};
pub use state::Board;
pub use unit::{Unit, UnitId, UnitKind, UnitStats, ALL_KINDS};
pub use view::{BoardView, CellView};
