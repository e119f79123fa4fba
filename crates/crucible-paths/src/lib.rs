//! Shortest-path search over cost grids where legality depends on movement
//! history.
//!
//! The engine runs Dijkstra over augmented states
//! `(position, heading, run length)`. What counts as a legal move is decided
//! by a [`MovePolicy`]; [`RunPolicy`] covers bounded straight runs with an
//! optional minimum before turning or stopping:
//!
//! | Policy | Straight run |
//! |---|---|
//! | [`RunPolicy::CRUCIBLE`] | 1 to 3 |
//! | [`RunPolicy::ULTRA_CRUCIBLE`] | 4 to 10 |
//! | [`RunPolicy::unbounded`] | any |
//!
//! Each call owns its label map and frontier; grids are immutable, so
//! independent searches may run in parallel on the same grid.

mod policy;
mod search;
mod state;
mod traits;

pub use policy::{PolicyError, RunPolicy};
pub use search::{Route, shortest_cost, shortest_route, solve_corners};
pub use state::{SearchState, SearchStats};
pub use traits::MovePolicy;
