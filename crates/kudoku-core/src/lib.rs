//! Core data structures for the kudoku Sudoku engine.
//!
//! This crate provides the board primitives that the solver, generator, and
//! board crates are built on:
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`position`]: board coordinates and the fixed 20-cell peer relation
//! - [`digit_set`]: a 9-bit set of digits, used for candidate tracking
//! - [`grid`]: the 9×9 grid with row/column/section queries and the
//!   81-character line serialization
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! assert_eq!(grid.filled_count(), 1);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    position::Position,
};
