use super::{Board, Move, Piece, Promotion, Role, Square};
use arrayvec::ArrayVec;

/// A list of moves from a single square, large enough for a queen in the middle of an open board.
pub type Moves = ArrayVec<Move, 27>;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[rustfmt::skip]
const KNIGHT: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

#[rustfmt::skip]
const KING: [(i8, i8); 8] = [
    (1, 1), (1, -1), (-1, 1), (-1, -1),
    (1, 0), (-1, 0), (0, 1), (0, -1),
];

impl Piece {
    /// The [pseudo-legal] moves of this piece standing on `whence`.
    ///
    /// These obey the movement pattern of the piece and the occupancy of the board, but may leave
    /// the king of the mover in check. Moves are generated in a fixed order: direction by
    /// direction for sliding pieces, offset by offset for the knight and the king, and push,
    /// captures, then double push for pawns.
    ///
    /// [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move
    pub fn moves(&self, board: &Board, whence: Square) -> Moves {
        debug_assert_eq!(board[whence], Some(*self));

        let mut moves = Moves::new();

        match self.role() {
            Role::Pawn => pawn(self, board, whence, &mut moves),
            Role::Knight => leap(board, whence, &KNIGHT, &mut moves),
            Role::Bishop => slide(board, whence, &DIAGONAL, &mut moves),
            Role::Rook => slide(board, whence, &ORTHOGONAL, &mut moves),
            Role::Queen => {
                slide(board, whence, &DIAGONAL, &mut moves);
                slide(board, whence, &ORTHOGONAL, &mut moves);
            }
            Role::King => leap(board, whence, &KING, &mut moves),
        }

        moves
    }
}

fn slide(board: &Board, whence: Square, directions: &[(i8, i8)], moves: &mut Moves) {
    for &(rows, cols) in directions {
        let mut whither = whence.shift(rows, cols);
        while whither.is_valid() && !board.occupied_by_friendly(whither, whence) {
            moves.push(Move(whence, whither, Promotion::None));
            if board.occupied_by_enemy(whither, whence) {
                break;
            }

            whither = whither.shift(rows, cols);
        }
    }
}

fn leap(board: &Board, whence: Square, offsets: &[(i8, i8)], moves: &mut Moves) {
    for &(rows, cols) in offsets {
        let whither = whence.shift(rows, cols);
        if whither.is_valid() && !board.occupied_by_friendly(whither, whence) {
            moves.push(Move(whence, whither, Promotion::None));
        }
    }
}

fn pawn(piece: &Piece, board: &Board, whence: Square, moves: &mut Moves) {
    let color = piece.color();
    let push = color.pawn_push();

    let mut advance = |whither: Square| {
        if whither.row() == color.promotion_row() {
            for p in Promotion::CHOICES {
                moves.push(Move(whence, whither, p));
            }
        } else {
            moves.push(Move(whence, whither, Promotion::None));
        }
    };

    let single = whence.shift(push, 0);
    let is_vacant = |sq: Square| sq.is_valid() && board[sq].is_none();

    if is_vacant(single) {
        advance(single);
    }

    for side in [-1, 1] {
        let whither = whence.shift(push, side);
        if board.occupied_by_enemy(whither, whence) {
            advance(whither);
        }
    }

    let double = single.shift(push, 0);
    if whence.row() == color.pawn_row() && is_vacant(single) && is_vacant(double) {
        advance(double);
    }
}
