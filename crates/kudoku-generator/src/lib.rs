//! Sudoku puzzle generation by removal with a per-cell uniqueness probe.

pub use self::generator::*;

mod generator;
