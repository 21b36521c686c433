//! Solver error types.

use derive_more::{Display, Error};

/// A propagation dead-end: some cell has no remaining candidates.
///
/// Returned by [`Candidates::assign`] and [`Candidates::eliminate`] when an
/// elimination empties a candidate set. A contradiction only says the
/// current partial state is unsatisfiable; the search engine handles it by
/// abandoning the branch.
///
/// [`Candidates::assign`]: crate::Candidates::assign
/// [`Candidates::eliminate`]: crate::Candidates::eliminate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("contradiction: a cell has no remaining candidates")]
pub struct Contradiction;

/// Error returned by [`solve`](crate::solve).
///
/// An unsolvable board is an expected outcome, not a fault: contradictory
/// givens and exhausted searches both report [`SolveError::NoSolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// No complete assignment exists from the given board state.
    #[display("the board has no solution from this state")]
    NoSolution,
}

impl From<Contradiction> for SolveError {
    fn from(_: Contradiction) -> Self {
        Self::NoSolution
    }
}
