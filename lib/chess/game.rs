use super::{Board, Color, MissingKing, Move, Moves, Outcome, Square};
use derive_more::{Constructor, Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Represents a [`Move`] rejected by [`Game::make_move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidMove {
    #[display(fmt = "there is no piece on square `{}`", _0)]
    NoPieceAtSource(#[error(not(source))] Square),

    #[display(fmt = "it is not the {} player's turn", _0)]
    WrongTurn(#[error(not(source))] Color),

    #[display(fmt = "move `{}` is illegal in this position", _0)]
    IllegalMove(#[error(not(source))] Move),

    #[display(fmt = "the board is corrupted")]
    MissingKing(#[error(source)] MissingKing),
}

/// A game of chess: a [`Board`] and the side to move.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Constructor)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::standard(), Color::White)
    }
}

impl Game {
    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Changes the side to move.
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the current board.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// The legal moves of the piece on `whence`, if any.
    ///
    /// Returns `Ok(None)` if the square is empty, and an empty list if the piece has no legal
    /// moves. Legality does not depend on whose turn it is.
    pub fn moves(&self, whence: Square) -> Result<Option<Moves>, MissingKing> {
        let piece = match self.board[whence] {
            None => return Ok(None),
            Some(p) => p,
        };

        let mut legal = Moves::new();

        for m in piece.moves(&self.board, whence) {
            let mut probe = self.board;
            if probe.play(m).is_ok() && !probe.is_check(piece.color())? {
                legal.push(m);
            } else {
                trace!(%m, "pruned move that leaves the king in check");
            }
        }

        Ok(Some(legal))
    }

    /// Every legal move of the side to move, square by square.
    pub fn legal_moves(&self) -> Result<Vec<Move>, MissingKing> {
        let mut moves = Vec::new();

        for (p, whence) in self.board.iter() {
            if p.color() == self.turn {
                moves.extend(self.moves(whence)?.into_iter().flatten());
            }
        }

        Ok(moves)
    }

    fn has_moves(&self, side: Color) -> Result<bool, MissingKing> {
        for (p, whence) in self.board.iter() {
            if p.color() == side && self.moves(whence)?.map_or(false, |ms| !ms.is_empty()) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Whether the king of a [`Color`] is in [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    pub fn is_check(&self, side: Color) -> Result<bool, MissingKing> {
        self.board.is_check(side)
    }

    /// Whether a [`Color`] is [checkmated].
    ///
    /// [checkmated]: https://www.chessprogramming.org/Checkmate
    pub fn is_checkmate(&self, side: Color) -> Result<bool, MissingKing> {
        Ok(self.is_check(side)? && !self.has_moves(side)?)
    }

    /// Whether a [`Color`] is [stalemated].
    ///
    /// [stalemated]: https://www.chessprogramming.org/Stalemate
    pub fn is_stalemate(&self, side: Color) -> Result<bool, MissingKing> {
        Ok(!self.is_check(side)? && !self.has_moves(side)?)
    }

    /// The [`Outcome`] of the game, if the side to move has no legal moves.
    pub fn outcome(&self) -> Result<Option<Outcome>, MissingKing> {
        if self.has_moves(self.turn)? {
            Ok(None)
        } else if self.is_check(self.turn)? {
            Ok(Some(Outcome::Checkmate(!self.turn)))
        } else {
            Ok(Some(Outcome::Stalemate))
        }
    }

    /// Plays a [`Move`] and passes the turn.
    ///
    /// Nothing changes if the move is rejected.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), err)]
    pub fn make_move(&mut self, m: Move) -> Result<(), InvalidMove> {
        let piece = self.board[m.whence()].ok_or(InvalidMove::NoPieceAtSource(m.whence()))?;

        if piece.color() != self.turn {
            return Err(InvalidMove::WrongTurn(piece.color()));
        }

        let legal = self.moves(m.whence()).map_err(InvalidMove::MissingKing)?;
        if !legal.map_or(false, |ms| ms.contains(&m)) {
            return Err(InvalidMove::IllegalMove(m));
        }

        let captured = self.board.play(m).map_err(|_| InvalidMove::IllegalMove(m))?;
        debug!(%m, %piece, ?captured, "played");

        self.turn = !self.turn;
        Ok(())
    }
}

#[cfg(test)]
use proptest::sample::{Selector, SelectorStrategy};

#[cfg(test)]
use proptest::{prelude::*, strategy::Map};

#[cfg(test)]
fn random_game((moves, selector): (usize, Selector)) -> Game {
    let mut game = Game::default();

    for _ in 0..moves {
        let m = match game.legal_moves().map(|ms| selector.try_select(ms)) {
            Ok(Some(m)) => m,
            _ => break,
        };

        if game.make_move(m).is_err() {
            break;
        }
    }

    game
}

#[cfg(test)]
impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = Map<(std::ops::Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..64usize, any::<Selector>()).prop_map(random_game as fn(_) -> _)
    }
}
