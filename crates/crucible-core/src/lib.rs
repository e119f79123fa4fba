//! **crucible-core** — geometry and cost-grid types for run-constrained
//! grid search.
//!
//! This crate provides the leaf types shared by the search engine and the
//! command-line front end: points and directions, half-open ranges, and the
//! immutable [`CostGrid`] with its validating parser.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Direction, Point, Range};
pub use grid::CostGrid;
