//! The presentation-facing sudoku board.
//!
//! [`Board`] is the single surface a user interface drives: rule-checked
//! single-cell edits, original-clue tracking, clear-to-original, the
//! two-line save/load text format, and a read-only solve pass-through.
//! Rendering, input handling, and file management belong to the caller.

pub use self::{board::*, error::*};

mod board;
mod error;
