//! The board: rule-checked edits, original clues, and persistence.

use kudoku_core::{Digit, DigitGrid, ParseGridError, Position};
use kudoku_generator::GeneratedPuzzle;
use kudoku_solver::{SolveError, solve};

use crate::BoardError;

/// A sudoku board with its original clues.
///
/// The board holds the live grid plus an optional immutable snapshot of the
/// puzzle's given clues (the "original"). The original is set once, when a
/// puzzle is generated or loaded, and cleared only by resetting to a blank
/// board; [`clear_board`] restores the live grid to it.
///
/// Edits go through [`set_value`], which enforces the sudoku row/column/
/// section rules and never leaves a partial write behind on failure.
/// Given-cell protection is presentation-layer policy: the board reports
/// givens via [`is_given`] but does not block edits on them, matching how
/// the rest of the API trusts the caller to drive it sensibly.
///
/// [`clear_board`]: Board::clear_board
/// [`set_value`]: Board::set_value
/// [`is_given`]: Board::is_given
///
/// # Examples
///
/// ```
/// use kudoku_board::{Board, BoardError};
/// use kudoku_core::Position;
///
/// let mut board = Board::new();
/// board.set_value(Position::new(0, 0), 5)?;
///
/// // 5 is now taken in row 0.
/// assert_eq!(
///     board.set_value(Position::new(8, 0), 5),
///     Err(BoardError::DuplicateInRow)
/// );
/// # Ok::<(), BoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: DigitGrid,
    original: Option<DigitGrid>,
}

impl Board {
    /// Creates a blank board with no original clues.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: DigitGrid::new(),
            original: None,
        }
    }

    /// Creates a board from a generated puzzle.
    ///
    /// The puzzle's problem grid becomes the original; the live grid starts
    /// equal to it.
    #[must_use]
    pub fn from_puzzle(puzzle: GeneratedPuzzle) -> Self {
        Self {
            grid: puzzle.problem.clone(),
            original: Some(puzzle.problem),
        }
    }

    /// Creates a board from serialized text.
    ///
    /// `original` is the clue line; `current` is the in-progress state and
    /// defaults to the clue line when absent (no progress beyond the
    /// clues).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MalformedBoard`] if either line is not exactly
    /// 81 ASCII digits.
    pub fn load(original: &str, current: Option<&str>) -> Result<Self, BoardError> {
        let original: DigitGrid = original.parse()?;
        let grid = match current {
            Some(line) => line.parse()?,
            None => original.clone(),
        };
        Ok(Self {
            grid,
            original: Some(original),
        })
    }

    /// Creates a board from the one-or-two-line persisted form produced by
    /// [`save`](Board::save).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MalformedBoard`] on empty input or any
    /// malformed line.
    pub fn from_save(text: &str) -> Result<Self, BoardError> {
        let mut lines = text.lines();
        let Some(original) = lines.next() else {
            return Err(ParseGridError::BadLength(0).into());
        };
        Self::load(original, lines.next())
    }

    /// Serializes the board: the original clue line (when present) followed
    /// by the current state line.
    ///
    /// The output round-trips through [`from_save`](Board::from_save).
    #[must_use]
    pub fn save(&self) -> String {
        match &self.original {
            Some(original) => format!("{original}\n{}", self.grid),
            None => self.grid.to_string(),
        }
    }

    /// Returns the live grid.
    #[must_use]
    pub const fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Returns the original clue grid, if a puzzle has been generated or
    /// loaded.
    #[must_use]
    pub const fn original(&self) -> Option<&DigitGrid> {
        self.original.as_ref()
    }

    /// Returns `true` if `pos` holds one of the original clues.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.original
            .as_ref()
            .is_some_and(|original| original[pos].is_some())
    }

    /// Places `value` (1-9) at `pos`, enforcing the sudoku rules.
    ///
    /// The value is checked against the current contents of the cell's row,
    /// column, and section, in that order; the first conflict wins. On
    /// success the cell is overwritten unconditionally — replacing an
    /// already-filled cell is permitted. On failure the board is unchanged.
    ///
    /// # Errors
    ///
    /// - [`BoardError::ZeroValue`] if `value` is 0
    /// - [`BoardError::DuplicateInRow`] / [`BoardError::DuplicateInColumn`]
    ///   / [`BoardError::DuplicateInSection`] if `value` already appears in
    ///   the corresponding house
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9; callers are expected to pass a
    /// digit.
    pub fn set_value(&mut self, pos: Position, value: u8) -> Result<(), BoardError> {
        if value == 0 {
            return Err(BoardError::ZeroValue);
        }
        let digit = Some(Digit::from_value(value));
        if self.grid.row(pos.y()).contains(&digit) {
            return Err(BoardError::DuplicateInRow);
        }
        if self.grid.column(pos.x()).contains(&digit) {
            return Err(BoardError::DuplicateInColumn);
        }
        if self.grid.section(pos).contains(&digit) {
            return Err(BoardError::DuplicateInSection);
        }
        self.grid.set(pos, digit);
        Ok(())
    }

    /// Empties the cell at `pos`.
    pub const fn clear_value(&mut self, pos: Position) {
        self.grid.set(pos, None);
    }

    /// Resets the board: back to the original clues if a puzzle is loaded,
    /// otherwise to all-empty.
    pub fn clear_board(&mut self) {
        self.grid = self
            .original
            .clone()
            .unwrap_or_default();
    }

    /// Solves the current grid without modifying it.
    ///
    /// The caller decides whether and how to apply the returned grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] if the current state is
    /// unsolvable.
    pub fn solve(&self) -> Result<DigitGrid, SolveError> {
        solve(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use kudoku_core::digit::Digit::*;

    use super::*;

    const PUZZLE: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const SOLUTION: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    fn puzzle_board() -> Board {
        Board::load(PUZZLE, None).unwrap()
    }

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new();
        assert!(board.grid().is_empty());
        assert!(board.original().is_none());
        assert!(!board.is_given(Position::new(0, 0)));
    }

    #[test]
    fn test_set_value_places_digit() {
        let mut board = Board::new();
        board.set_value(Position::new(3, 4), 7).unwrap();
        assert_eq!(board.grid()[Position::new(3, 4)], Some(D7));
    }

    #[test]
    fn test_set_value_rejects_zero() {
        let mut board = puzzle_board();
        let before = board.clone();
        assert_eq!(
            board.set_value(Position::new(0, 0), 0),
            Err(BoardError::ZeroValue)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_value_rejects_duplicates_row_first() {
        let mut board = Board::new();
        board.set_value(Position::new(8, 0), 5).unwrap();
        board.set_value(Position::new(0, 8), 5).unwrap();
        let before = board.clone();

        // (0, 0) sees the 5 in row 0 and the 5 in column 0; the row check
        // runs first.
        assert_eq!(
            board.set_value(Position::new(0, 0), 5),
            Err(BoardError::DuplicateInRow)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_value_rejects_duplicate_in_column() {
        let mut board = Board::new();
        board.set_value(Position::new(4, 8), 3).unwrap();
        let before = board.clone();
        assert_eq!(
            board.set_value(Position::new(4, 0), 3),
            Err(BoardError::DuplicateInColumn)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_value_rejects_duplicate_in_section() {
        let mut board = Board::new();
        board.set_value(Position::new(0, 0), 9).unwrap();
        let before = board.clone();
        assert_eq!(
            board.set_value(Position::new(2, 2), 9),
            Err(BoardError::DuplicateInSection)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_value_same_cell_same_value_is_a_duplicate() {
        // The row scan includes the target cell itself, so re-placing the
        // same digit reports a conflict rather than a no-op.
        let mut board = Board::new();
        board.set_value(Position::new(5, 5), 2).unwrap();
        assert_eq!(
            board.set_value(Position::new(5, 5), 2),
            Err(BoardError::DuplicateInRow)
        );
    }

    #[test]
    fn test_set_value_overwrites_filled_cell() {
        let mut board = Board::new();
        board.set_value(Position::new(5, 5), 2).unwrap();
        board.set_value(Position::new(5, 5), 3).unwrap();
        assert_eq!(board.grid()[Position::new(5, 5)], Some(D3));
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_set_value_panics_above_nine() {
        let mut board = Board::new();
        let _ = board.set_value(Position::new(0, 0), 10);
    }

    #[test]
    fn test_clear_value() {
        let mut board = Board::new();
        board.set_value(Position::new(1, 1), 4).unwrap();
        board.clear_value(Position::new(1, 1));
        assert_eq!(board.grid()[Position::new(1, 1)], None);
    }

    #[test]
    fn test_clear_board_restores_original() {
        let mut board = puzzle_board();
        board.set_value(Position::new(0, 0), 4).unwrap();
        board.clear_board();
        assert_eq!(board.grid(), board.original().unwrap());
        assert_eq!(board.grid().to_string(), PUZZLE);
    }

    #[test]
    fn test_clear_board_without_original_blanks() {
        let mut board = Board::new();
        board.set_value(Position::new(0, 0), 4).unwrap();
        board.clear_board();
        assert!(board.grid().is_empty());
        assert!(board.original().is_none());
    }

    #[test]
    fn test_load_defaults_current_to_clues() {
        let board = puzzle_board();
        assert_eq!(board.grid().to_string(), PUZZLE);
        assert_eq!(board.original().unwrap().to_string(), PUZZLE);
    }

    #[test]
    fn test_load_with_progress_line() {
        let mut progress = String::from(PUZZLE);
        progress.replace_range(0..1, "4"); // player filled (0, 0)
        let board = Board::load(PUZZLE, Some(&progress)).unwrap();
        assert_eq!(board.grid()[Position::new(0, 0)], Some(D4));
        assert_eq!(board.original().unwrap().to_string(), PUZZLE);
    }

    #[test]
    fn test_load_rejects_malformed_lines() {
        assert_eq!(
            Board::load("123", None),
            Err(BoardError::MalformedBoard(ParseGridError::BadLength(3)))
        );
        let mut bad = String::from(PUZZLE);
        bad.replace_range(10..11, "?");
        assert!(matches!(
            Board::load(PUZZLE, Some(&bad)),
            Err(BoardError::MalformedBoard(ParseGridError::BadCharacter {
                offset: 10,
                ..
            }))
        ));
    }

    #[test]
    fn test_save_round_trip_with_original() {
        let mut board = puzzle_board();
        board.set_value(Position::new(0, 0), 4).unwrap();

        let saved = board.save();
        assert_eq!(saved.lines().count(), 2);

        let restored = Board::from_save(&saved).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_save_without_original_is_one_line() {
        let mut board = Board::new();
        board.set_value(Position::new(0, 0), 4).unwrap();

        let saved = board.save();
        assert_eq!(saved.lines().count(), 1);

        // A single line loads back as clues with no separate progress.
        let restored = Board::from_save(&saved).unwrap();
        assert_eq!(restored.grid(), board.grid());
        assert!(restored.is_given(Position::new(0, 0)));
    }

    #[test]
    fn test_from_save_rejects_empty_input() {
        assert_eq!(
            Board::from_save(""),
            Err(BoardError::MalformedBoard(ParseGridError::BadLength(0)))
        );
    }

    #[test]
    fn test_is_given_tracks_original() {
        let board = puzzle_board();
        assert!(!board.is_given(Position::new(0, 0))); // '0' in PUZZLE
        assert!(board.is_given(Position::new(2, 0))); // '3' in PUZZLE
    }

    #[test]
    fn test_solve_is_read_only() {
        let board = puzzle_board();
        let before = board.clone();
        let solution = board.solve().unwrap();
        assert_eq!(solution.to_string(), SOLUTION);
        assert_eq!(board, before);
    }

    #[test]
    fn test_solve_reports_no_solution() {
        // set_value forbids direct duplicates, so build the contradictory
        // state through load: two 5s in row 0.
        let mut line = "0".repeat(81);
        line.replace_range(0..1, "5");
        line.replace_range(8..9, "5");
        let board = Board::load(&line, None).unwrap();
        assert_eq!(board.solve(), Err(SolveError::NoSolution));
    }

    #[test]
    fn test_from_puzzle_installs_original() {
        let puzzle = GeneratedPuzzle {
            problem: PUZZLE.parse().unwrap(),
            solution: SOLUTION.parse().unwrap(),
            seed: 0,
        };
        let board = Board::from_puzzle(puzzle);
        assert_eq!(board.grid(), board.original().unwrap());
        assert_eq!(board.grid().to_string(), PUZZLE);
    }
}
