//! Constraint propagation and backtracking search for 9×9 sudoku.

pub use self::{backtrack::*, candidates::*, error::*};

mod backtrack;
mod candidates;
mod error;
