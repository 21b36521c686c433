//! Depth-first search with minimum-remaining-values branching.

use kudoku_core::{DigitGrid, DigitSet, Position};

use crate::{Candidates, SolveError};

/// Solves a board, returning a fully determined grid.
///
/// The input is never mutated; callers decide whether and how to apply the
/// result. The search is deterministic: the branch cell is the undecided
/// cell with the fewest candidates (first in row-major order on ties), and
/// its candidates are tried in ascending numeric order, each on its own
/// copy of the candidate map.
///
/// # Errors
///
/// Returns [`SolveError::NoSolution`] if the givens are contradictory or
/// the search exhausts every branch.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, DigitGrid, Position};
/// use kudoku_solver::solve;
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// let solution = solve(&grid)?;
/// assert!(solution.is_full());
/// assert_eq!(solution[Position::new(0, 0)], Some(Digit::D5));
/// # Ok::<(), kudoku_solver::SolveError>(())
/// ```
pub fn solve(grid: &DigitGrid) -> Result<DigitGrid, SolveError> {
    let candidates = Candidates::from_grid(grid)?;
    let solved = search(candidates).ok_or(SolveError::NoSolution)?;
    let mut out = DigitGrid::new();
    for pos in Position::ALL {
        out.set(pos, solved.at(pos).single());
    }
    Ok(out)
}

/// Recursive MRV search over candidate maps.
///
/// Propagation guarantees the incoming map has no empty cells, so the only
/// terminal cases are "every cell decided" (solution) and "all branches
/// fail". Recursion depth is bounded by the 81 cells.
fn search(candidates: Candidates) -> Option<Candidates> {
    let Some((pos, set)) = branch_cell(&candidates) else {
        return Some(candidates);
    };
    for digit in set {
        let mut branch = candidates.clone();
        if branch.assign(pos, digit).is_ok()
            && let Some(solution) = search(branch)
        {
            return Some(solution);
        }
    }
    None
}

/// Picks the undecided cell with the fewest candidates, breaking ties by
/// first occurrence in row-major order. `None` means the map is decided.
fn branch_cell(candidates: &Candidates) -> Option<(Position, DigitSet)> {
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in Position::ALL {
        let set = candidates.at(pos);
        if set.len() > 1 && best.is_none_or(|(_, b)| set.len() < b.len()) {
            if set.len() == 2 {
                // No undecided cell can have fewer.
                return Some((pos, set));
            }
            best = Some((pos, set));
        }
    }
    best
}
