//! The 9×9 grid: cell storage, house queries, and line serialization.

use std::{
    error::Error,
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// A 9×9 grid of optional digits.
///
/// Cells are stored in row-major order; empty cells are `None`. The grid is
/// plain storage with neighborhood queries — it does not enforce sudoku
/// rules on writes. Rule-checked editing is layered on top by the board
/// crate, and the solver treats grids as read-only input.
///
/// # Serialization
///
/// [`Display`] renders the grid as exactly 81 ASCII digits in row-major
/// order with `'0'` for empty cells; [`FromStr`] parses the same format and
/// rejects anything else with [`ParseGridError`].
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// let line = grid.to_string();
/// assert_eq!(line.len(), 81);
/// assert!(line.starts_with('5'));
/// assert_eq!(line.parse::<DigitGrid>().unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell value at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos`, overwriting any previous value.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the 9 values of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is 9 or greater.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn row(&self, y: u8) -> [Option<Digit>; 9] {
        std::array::from_fn(|x| self.get(Position::new(x as u8, y)))
    }

    /// Returns the 9 values of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is 9 or greater.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn column(&self, x: u8) -> [Option<Digit>; 9] {
        std::array::from_fn(|y| self.get(Position::new(x, y as u8)))
    }

    /// Returns the 9 values of the 3×3 section containing `pos`, row-major.
    ///
    /// The section origin is found by integer division of both coordinates
    /// by 3.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn section(&self, pos: Position) -> [Option<Digit>; 9] {
        let x0 = pos.x() / 3 * 3;
        let y0 = pos.y() / 3 * 3;
        std::array::from_fn(|i| self.get(Position::new(x0 + i as u8 % 3, y0 + i as u8 / 3)))
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = cell.map_or('0', |digit| char::from(b'0' + digit.value()));
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 81 {
            return Err(ParseGridError::BadLength(s.len()));
        }
        let mut grid = Self::new();
        for (i, byte) in s.bytes().enumerate() {
            let value = match byte {
                b'0' => None,
                b'1'..=b'9' => Some(Digit::from_value(byte - b'0')),
                _ => return Err(ParseGridError::BadCharacter { offset: i, byte }),
            };
            grid.cells[i] = value;
        }
        Ok(grid)
    }
}

/// Error parsing an 81-character grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input was not exactly 81 characters long.
    BadLength(usize),
    /// The input contained a byte that is not an ASCII digit.
    BadCharacter {
        /// Byte offset of the offending character.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "board must be exactly 81 characters, got {len}")
            }
            Self::BadCharacter { offset, byte } => {
                write!(
                    f,
                    "board must contain only digits 0-9, got {:?} at offset {offset}",
                    char::from(*byte)
                )
            }
        }
    }
}

impl Error for ParseGridError {}
