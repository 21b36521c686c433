//! Board coordinates and the fixed peer relation.

/// Peer lookup table over the 81-cell topology.
///
/// For each cell index (row-major), the 20 other cells sharing its row,
/// column, or 3×3 box. The relation is an invariant of the 9×9 grid, not
/// board state, so it is computed once at compile time.
static PEERS: [[u8; 20]; 81] = build_peers();

#[expect(clippy::cast_possible_truncation)]
const fn build_peers() -> [[u8; 20]; 81] {
    let mut table = [[0_u8; 20]; 81];
    let mut i = 0;
    while i < 81 {
        let (y, x) = (i / 9, i % 9);
        let mut n = 0;
        let mut j = 0;
        while j < 81 {
            if j != i {
                let (jy, jx) = (j / 9, j % 9);
                if jy == y || jx == x || (jy / 3 == y / 3 && jx / 3 == x / 3) {
                    table[i][n] = j as u8;
                    n += 1;
                }
            }
            j += 1;
        }
        i += 1;
    }
    table
}

/// A board position.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions map to row-major indices 0-80 for flat storage.
///
/// # Examples
///
/// ```
/// use kudoku_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.index(), 22); // row 2, column 4
/// assert_eq!(pos.box_index(), 1); // top-middle box
/// assert_eq!(pos.peers().count(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Creates a position from a box index (0-8, left to right, top to
    /// bottom) and a cell index within that box (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if either argument is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self {
            x: box_index % 3 * 3 + i % 3,
            y: box_index / 3 * 3 + i / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the 20 peers of this position: every other cell sharing its
    /// row, column, or 3×3 box.
    pub fn peers(self) -> impl Iterator<Item = Self> {
        PEERS[self.index()]
            .iter()
            .map(|&i| Self::from_index(usize::from(i)))
    }
}
