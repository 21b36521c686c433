//! Board error types.

use derive_more::{Display, Error};
use kudoku_core::ParseGridError;

/// Errors from presentation-facing board operations.
///
/// All variants are recoverable; failed edits leave the board unchanged,
/// and the caller decides how to surface the error to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A single-cell edit tried to place 0. Clearing a cell is a separate
    /// operation ([`Board::clear_value`](crate::Board::clear_value)).
    #[display("value cannot be 0")]
    ZeroValue,
    /// The value already appears in the target cell's row.
    #[display("value already in row")]
    DuplicateInRow,
    /// The value already appears in the target cell's column.
    #[display("value already in column")]
    DuplicateInColumn,
    /// The value already appears in the target cell's 3×3 section.
    #[display("value already in section")]
    DuplicateInSection,
    /// Serialized input had the wrong length or a non-digit character.
    #[display("malformed board: {_0}")]
    MalformedBoard(#[error(source)] ParseGridError),
}

impl From<ParseGridError> for BoardError {
    fn from(err: ParseGridError) -> Self {
        Self::MalformedBoard(err)
    }
}
