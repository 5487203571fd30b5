//! Board representations
//!
//! Two interchangeable views of a queen placement:
//! - [`Board`]: an N×N occupancy grid, built row by row by the best-first solver
//! - [`Individual`]: one row index per column, evolved by the genetic solver

pub mod grid;
pub mod individual;

pub use grid::Board;
pub use individual::Individual;
