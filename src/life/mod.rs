//! Conway's Game of Life
//!
//! Synchronous rule over a clamped 2D grid: each generation is computed
//! entirely from the previous one. No rendering or platform dependencies.

pub mod grid;

pub use grid::Grid;
