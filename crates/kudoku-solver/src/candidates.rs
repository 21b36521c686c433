//! Per-cell candidate tracking with constraint propagation.

use kudoku_core::{Digit, DigitGrid, DigitSet, Position};

use crate::Contradiction;

/// Candidate sets for every cell of the board.
///
/// This is the working state of a single solve: a [`DigitSet`] per cell,
/// narrowed by constraint propagation. Eliminations cascade — when a cell
/// shrinks to a single candidate, that digit is eliminated from all 20 of
/// the cell's peers (the "naked single" rule), which may force further
/// cells in turn. The cascade runs on an explicit worklist rather than call
/// recursion, so pathological boards cannot overflow the stack.
///
/// After any successful [`assign`] or [`eliminate`] the map is locally
/// consistent: no cell with exactly one candidate shares that digit with a
/// peer. Global consistency is the search engine's job.
///
/// Each solve invocation owns its own map; the search engine copies the map
/// per branch and never shares one across live branches.
///
/// [`assign`]: Candidates::assign
/// [`eliminate`]: Candidates::eliminate
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, Position};
/// use kudoku_solver::Candidates;
///
/// let mut candidates = Candidates::new();
/// candidates.assign(Position::new(0, 0), Digit::D5)?;
///
/// // 5 is no longer available anywhere in row 0.
/// assert!(!candidates.at(Position::new(8, 0)).contains(Digit::D5));
/// # Ok::<(), kudoku_solver::Contradiction>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    cells: [DigitSet; 81],
}

impl Default for Candidates {
    fn default() -> Self {
        Self::new()
    }
}

impl Candidates {
    /// Creates a map with all nine digits possible at every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Builds a candidate map from a grid by assigning each given value in
    /// row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the givens are mutually inconsistent,
    /// for example a digit repeated within a row.
    pub fn from_grid(grid: &DigitGrid) -> Result<Self, Contradiction> {
        let mut this = Self::new();
        for pos in Position::ALL {
            if let Some(digit) = grid[pos] {
                this.assign(pos, digit)?;
            }
        }
        Ok(this)
    }

    /// Returns the candidate set at `pos`.
    #[must_use]
    pub const fn at(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Returns `true` if every cell has exactly one candidate.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Forces `pos` to `digit` by eliminating every other candidate there,
    /// propagating each elimination.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if any elimination empties a candidate
    /// set. The map is left in an unspecified (but memory-safe) state on
    /// error; callers discard it.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        for other in self.at(pos) {
            if other != digit {
                self.eliminate(pos, other)?;
            }
        }
        Ok(())
    }

    /// Removes `digit` from the candidates at `pos`, if present.
    ///
    /// A cell shrinking to one candidate eliminates that digit from all of
    /// its peers; the cascade is driven to completion before returning.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if any cell ends up with no candidates.
    /// The map is left in an unspecified (but memory-safe) state on error;
    /// callers discard it.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        let mut pending = vec![(pos, digit)];
        while let Some((pos, digit)) = pending.pop() {
            let cell = &mut self.cells[pos.index()];
            if !cell.remove(digit) {
                continue;
            }
            if cell.is_empty() {
                return Err(Contradiction);
            }
            if let Some(forced) = cell.single() {
                pending.extend(pos.peers().map(|peer| (peer, forced)));
            }
        }
        Ok(())
    }
}
