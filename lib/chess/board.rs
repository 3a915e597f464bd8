use super::{Color, Move, Piece, Role, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{mem, ops::Index};
use tracing::error;

/// Represents an attempt to place a piece on a [`Square`] off the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "square `{}` is not on the board", _0)]
pub struct InvalidSquare(#[error(not(source))] pub Square);

/// Represents a board missing the king of a [`Color`].
///
/// Every query that involves check relies on both kings being on the board, so this indicates a
/// corrupted board rather than a condition to recover from.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "the {} king is missing from the board", _0)]
pub struct MissingKing(#[error(not(source))] pub Color);

/// The chess board.
///
/// The default board is empty, see [`Board::standard`] for the starting arrangement.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    /// The board in the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::default();
        board.reset();
        board
    }

    /// Resets this board to the standard starting arrangement.
    pub fn reset(&mut self) {
        use Role::*;

        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        *self = Board::default();

        for c in Color::iter() {
            let back = c.back_row() as usize - 1;
            let pawns = c.pawn_row() as usize - 1;
            self.0[back] = BACK.map(|r| Some(Piece(c, r)));
            self.0[pawns] = [Some(Piece(c, Pawn)); 8];
        }
    }

    /// Whether a [`Square`] lies on the board.
    #[inline(always)]
    pub fn is_valid(&self, sq: Square) -> bool {
        sq.is_valid()
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self[sq]
    }

    /// Places a [`Piece`] on a [`Square`], or clears it if `None`.
    ///
    /// Returns the piece previously on the square.
    pub fn set(&mut self, sq: Square, p: Option<Piece>) -> Result<Option<Piece>, InvalidSquare> {
        let (r, c) = sq.cell().ok_or(InvalidSquare(sq))?;
        Ok(mem::replace(&mut self.0[r][c], p))
    }

    /// Whether `target` holds a piece of the same color as the piece on `reference`.
    ///
    /// False if either square is empty or off the board.
    #[inline(always)]
    pub fn occupied_by_friendly(&self, target: Square, reference: Square) -> bool {
        match (self[target], self[reference]) {
            (Some(t), Some(r)) => t.color() == r.color(),
            _ => false,
        }
    }

    /// Whether `target` holds a piece of the opposite color to the piece on `reference`.
    ///
    /// False if either square is empty or off the board.
    #[inline(always)]
    pub fn occupied_by_enemy(&self, target: Square, reference: Square) -> bool {
        match (self[target], self[reference]) {
            (Some(t), Some(r)) => t.color() != r.color(),
            _ => false,
        }
    }

    /// An iterator over all pieces on the board, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(move |sq| Some((self[sq]?, sq)))
    }

    /// [`Square`] occupied by the king of a [`Color`].
    pub fn king(&self, side: Color) -> Option<Square> {
        let king = Piece(side, Role::King);
        self.iter().find_map(|(p, sq)| (p == king).then_some(sq))
    }

    /// Whether any piece of color `by` has a pseudo-legal move onto `sq`.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.iter()
            .filter(|(p, _)| p.color() == by)
            .any(|(p, whence)| p.moves(self, whence).iter().any(|m| m.whither() == sq))
    }

    /// Whether the king of a [`Color`] is in [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    pub fn is_check(&self, side: Color) -> Result<bool, MissingKing> {
        match self.king(side) {
            Some(sq) => Ok(self.is_attacked(sq, !side)),
            None => {
                error!(%side, "king not found");
                Err(MissingKing(side))
            }
        }
    }

    /// Plays a [`Move`] without checking whether it is legal.
    ///
    /// The piece on the source square is moved to the destination, replaced by the promoted
    /// piece if the move specifies a promotion. Returns the piece captured, if any.
    ///
    /// Nothing changes if either square is off the board.
    pub fn play(&mut self, m: Move) -> Result<Option<Piece>, InvalidSquare> {
        let (wr, wc) = m.whence().cell().ok_or(InvalidSquare(m.whence()))?;
        let (tr, tc) = m.whither().cell().ok_or(InvalidSquare(m.whither()))?;

        let mover = self.0[wr][wc].take();
        let placed = match Option::<Role>::from(m.promotion()) {
            Some(r) => mover.map(|p| Piece(p.color(), r)),
            None => mover,
        };

        Ok(mem::replace(&mut self.0[tr][tc], placed))
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        match sq.cell() {
            Some((r, c)) => &self.0[r][c],
            None => &None,
        }
    }
}
