use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A square on the chess board, addressed by row and column.
///
/// Squares off the board are representable, the move generator finds the edges of the board by
/// walking onto them, but they never hold a piece and are rejected by every consumer.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({},{})", row, col)]
pub struct Square {
    #[cfg_attr(test, strategy(1i8..=8))]
    row: i8,
    #[cfg_attr(test, strategy(1i8..=8))]
    col: i8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column, both in the range `1..=8` if valid.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// This square's row.
    #[inline(always)]
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    #[inline(always)]
    pub const fn col(&self) -> i8 {
        self.col
    }

    /// Whether this square lies on the board.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        matches!(self.row, 1..=8) && matches!(self.col, 1..=8)
    }

    /// The square displaced by the given number of rows and columns, which may be off the board.
    #[inline(always)]
    pub const fn shift(self, rows: i8, cols: i8) -> Self {
        Square::new(self.row.saturating_add(rows), self.col.saturating_add(cols))
    }

    /// An iterator over the 64 squares on the board, row by row.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(|i| Square::new(i / 8 + 1, i % 8 + 1))
    }

    /// The indices of this square into an 8x8 grid, if on the board.
    #[inline(always)]
    pub(crate) fn cell(&self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row as usize - 1, self.col as usize - 1))
        } else {
            None
        }
    }
}

#[cfg(test)]
use shakmaty as sm;

#[cfg(test)]
impl From<sm::Square> for Square {
    fn from(sq: sm::Square) -> Self {
        let row = sq.rank().char() as u8 - b'0';
        let col = sq.file().char() as u8 - b'a' + 1;
        Square::new(row as i8, col as i8)
    }
}

#[cfg(test)]
impl From<Square> for sm::Square {
    fn from(sq: Square) -> Self {
        let file = sm::File::new(sq.col() as u32 - 1);
        let rank = sm::Rank::new(sq.row() as u32 - 1);
        sm::Square::from_coords(file, rank)
    }
}
