//! The puzzle generator.

use kudoku_core::{Digit, DigitGrid, Position};
use kudoku_solver::solve;
use log::{debug, trace};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// A generated puzzle: the problem, its intended solution, and the seed
/// that produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle with cells removed. Its filled cells are the givens.
    pub problem: DigitGrid,
    /// The complete grid the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle via
    /// [`PuzzleGenerator::generate_with_seed`].
    pub seed: u64,
}

/// Generates puzzles by carving cells out of a random complete grid.
///
/// Generation first produces a full solution: one random digit is placed at
/// one random cell of an empty grid and the solver completes it (randomized
/// seeding plus the deterministic search yields a varied full grid — not a
/// uniform sample over all valid completions, and it does not need to be).
/// Cells are then emptied one at a time. A cell may only be emptied when no
/// other digit substituted at that cell leaves the puzzle solvable; a cell
/// that admits an alternative is kept as a clue. The probe is local to the
/// removed cell at removal time — it is a best-effort uniqueness heuristic,
/// not a proof that the finished puzzle has a globally unique solution.
///
/// # Examples
///
/// ```no_run
/// use kudoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate();
/// assert_eq!(puzzle.problem.filled_count(), 31);
///
/// // The same seed reproduces the same puzzle.
/// let again = generator.generate_with_seed(puzzle.seed);
/// assert_eq!(again, puzzle);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    empty_target: u8,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// The default number of cells to empty.
    pub const DEFAULT_EMPTY_TARGET: u8 = 50;

    /// Creates a generator with the default empty-cell target.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_empty_target(Self::DEFAULT_EMPTY_TARGET)
    }

    /// Creates a generator that empties `empty_target` cells.
    ///
    /// Targets above roughly 55 degrade sharply: near-empty boards admit
    /// many alternative completions, so the removal probe keeps rejecting
    /// cells and generation restarts often.
    ///
    /// # Panics
    ///
    /// Panics if `empty_target` is 81 or greater.
    #[must_use]
    pub const fn with_empty_target(empty_target: u8) -> Self {
        assert!(empty_target < 81, "empty target must be below 81");
        Self { empty_target }
    }

    /// Returns the configured empty-cell target.
    #[must_use]
    pub const fn empty_target(&self) -> u8 {
        self.empty_target
    }

    /// Generates a puzzle from thread entropy.
    ///
    /// The drawn seed is recorded in the returned puzzle, so any generated
    /// puzzle can be reproduced later.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(rand::rng().random())
    }

    /// Generates a puzzle deterministically from `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u64) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        loop {
            let solution = random_solution(&mut rng);
            if let Some(problem) = self.carve(&solution, &mut rng) {
                return GeneratedPuzzle {
                    problem,
                    solution,
                    seed,
                };
            }
            debug!(
                "removal pass exhausted before reaching {} empties, regenerating",
                self.empty_target
            );
        }
    }

    /// Runs one removal pass over a copy of `solution`.
    ///
    /// Returns `None` if every filled cell was examined before the target
    /// was reached, in which case the caller restarts from a fresh
    /// solution.
    fn carve(&self, solution: &DigitGrid, rng: &mut Pcg64Mcg) -> Option<DigitGrid> {
        let mut puzzle = solution.clone();
        let mut examined = [false; 81];
        let mut remaining = usize::from(self.empty_target);

        while remaining > 0 {
            let open: Vec<(Position, Digit)> = Position::ALL
                .into_iter()
                .filter(|pos| !examined[pos.index()])
                .filter_map(|pos| puzzle[pos].map(|digit| (pos, digit)))
                .collect();
            if open.is_empty() {
                return None;
            }
            let (pos, current) = open[rng.random_range(0..open.len())];
            if admits_alternative(&puzzle, pos, current) {
                // The clue is load-bearing: some other digit also completes
                // the board without it.
                trace!("keeping {current} at {pos:?}");
                examined[pos.index()] = true;
            } else {
                trace!("emptying {pos:?}");
                puzzle.set(pos, None);
                remaining -= 1;
            }
        }
        Some(puzzle)
    }
}

/// Returns `true` if any digit other than `current` at `pos` leaves the
/// otherwise-unchanged puzzle solvable.
fn admits_alternative(puzzle: &DigitGrid, pos: Position, current: Digit) -> bool {
    Digit::ALL
        .into_iter()
        .filter(|digit| *digit != current)
        .any(|digit| {
            let mut probe = puzzle.clone();
            probe.set(pos, Some(digit));
            solve(&probe).is_ok()
        })
}

/// Completes an empty grid seeded with a single random clue.
fn random_solution(rng: &mut Pcg64Mcg) -> DigitGrid {
    loop {
        let mut grid = DigitGrid::new();
        grid.set(
            Position::from_index(rng.random_range(0..81)),
            Some(Digit::from_value(rng.random_range(1..=9))),
        );
        // A single clue is always completable.
        if let Ok(solution) = solve(&grid) {
            return solution;
        }
    }
}

#[cfg(test)]
mod tests {
    use kudoku_solver::SolveError;

    use super::*;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = PuzzleGenerator::with_empty_target(30);
        let first = generator.generate_with_seed(0xdead_beef);
        let second = generator.generate_with_seed(0xdead_beef);
        assert_eq!(first, second);
        assert_eq!(first.seed, 0xdead_beef);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let generator = PuzzleGenerator::with_empty_target(20);
        let puzzle = generator.generate();
        assert_eq!(generator.generate_with_seed(puzzle.seed), puzzle);
    }

    #[test]
    fn test_puzzle_matches_target_and_solution() {
        let generator = PuzzleGenerator::with_empty_target(30);
        let puzzle = generator.generate_with_seed(7);

        assert_eq!(puzzle.problem.filled_count(), 81 - 30);
        assert!(puzzle.solution.is_full());
        assert!(solve(&puzzle.solution).is_ok());

        // Every remaining clue comes from the solution.
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(puzzle.solution[pos], Some(digit));
            }
        }

        // The problem itself is solvable.
        assert!(solve(&puzzle.problem).is_ok());
    }

    #[test]
    fn test_emptied_cells_are_locally_unique() {
        // Low target: few enough removals that the removal-time probe still
        // holds on the finished puzzle.
        let generator = PuzzleGenerator::with_empty_target(5);
        let puzzle = generator.generate_with_seed(42);

        for pos in Position::ALL {
            if puzzle.problem[pos].is_some() {
                continue;
            }
            let Some(truth) = puzzle.solution[pos] else {
                panic!("solution is incomplete at {pos:?}");
            };
            for digit in Digit::ALL {
                if digit == truth {
                    continue;
                }
                let mut probe = puzzle.problem.clone();
                probe.set(pos, Some(digit));
                assert_eq!(
                    solve(&probe),
                    Err(SolveError::NoSolution),
                    "substituting {digit} for {truth} at {pos:?} should be unsolvable"
                );
            }
        }
    }

    #[test]
    fn test_default_target() {
        assert_eq!(
            PuzzleGenerator::new().empty_target(),
            PuzzleGenerator::DEFAULT_EMPTY_TARGET
        );
    }

    #[test]
    #[should_panic(expected = "empty target must be below 81")]
    fn test_rejects_impossible_target() {
        let _ = PuzzleGenerator::with_empty_target(81);
    }
}
