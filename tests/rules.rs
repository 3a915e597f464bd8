use lib::chess::{Board, Color::*, Game, InvalidMove, Move, Outcome, Piece, Promotion, Role::*};
use lib::chess::{MissingKing, Square};
use proptest::sample::Selector;
use test_strategy::proptest;

mod common;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

fn mv(whence: (i8, i8), whither: (i8, i8)) -> Move {
    Move(
        sq(whence.0, whence.1),
        sq(whither.0, whither.1),
        Promotion::None,
    )
}

#[test]
fn fools_mate_ends_in_checkmate_of_white() {
    let mut game = Game::default();

    for m in [mv((2, 6), (3, 6)), mv((7, 5), (5, 5)), mv((2, 7), (4, 7))] {
        game.make_move(m).unwrap();
        assert_eq!(game.outcome(), Ok(None));
    }

    game.make_move(mv((8, 4), (4, 8))).unwrap();

    assert_eq!(game.turn(), White);
    assert_eq!(game.is_check(White), Ok(true));
    assert_eq!(game.is_checkmate(White), Ok(true));
    assert_eq!(game.is_stalemate(White), Ok(false));
    assert_eq!(game.is_checkmate(Black), Ok(false));
    assert_eq!(game.legal_moves(), Ok(vec![]));
    assert_eq!(game.outcome(), Ok(Some(Outcome::Checkmate(Black))));
}

#[test]
fn back_rank_mate_ends_in_checkmate_of_black() {
    #[rustfmt::skip]
    let b = common::board([
        "......k.",
        ".....ppp",
        "........",
        "........",
        "........",
        "........",
        "........",
        "R.....K.",
    ]);

    let mut game = Game::new(b, White);
    game.make_move(mv((1, 1), (8, 1))).unwrap();

    assert_eq!(game.is_checkmate(Black), Ok(true));
    assert_eq!(game.outcome(), Ok(Some(Outcome::Checkmate(White))));
}

#[test]
fn cornered_king_without_moves_is_stalemated() {
    #[rustfmt::skip]
    let b = common::board([
        ".......k",
        "........",
        "......Q.",
        "........",
        "........",
        "........",
        "........",
        "K.......",
    ]);

    let game = Game::new(b, Black);

    assert_eq!(game.is_check(Black), Ok(false));
    assert_eq!(game.is_stalemate(Black), Ok(true));
    assert_eq!(game.is_checkmate(Black), Ok(false));
    assert_eq!(game.is_stalemate(White), Ok(false));
    assert_eq!(game.outcome(), Ok(Some(Outcome::Stalemate)));
}

#[test]
fn pawn_reaching_the_last_row_promotes() {
    #[rustfmt::skip]
    let b = common::board([
        "........",
        "P......k",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....K...",
    ]);

    let mut game = Game::new(b, White);
    let moves = game.moves(sq(7, 1)).unwrap().unwrap();

    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.whither() == sq(8, 1)));
    assert_eq!(
        Vec::from_iter(moves.iter().map(|m| m.promotion())),
        Promotion::CHOICES
    );

    let m = Move(sq(7, 1), sq(8, 1), Promotion::Knight);
    game.make_move(m).unwrap();

    assert_eq!(game.board()[sq(8, 1)], Some(Piece(White, Knight)));
    assert_eq!(game.board()[sq(7, 1)], None);
}

#[test]
fn promotion_must_be_specified_on_the_last_row() {
    #[rustfmt::skip]
    let b = common::board([
        "........",
        "P......k",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....K...",
    ]);

    let mut game = Game::new(b, White);
    let m = mv((7, 1), (8, 1));

    assert_eq!(game.make_move(m), Err(InvalidMove::IllegalMove(m)));
    assert_eq!(game.board(), &b);
}

#[test]
fn pawn_may_promote_by_capturing() {
    #[rustfmt::skip]
    let b = common::board([
        ".r.....k",
        "P.......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....K...",
    ]);

    let mut game = Game::new(b, White);
    assert_eq!(game.moves(sq(7, 1)).unwrap().unwrap().len(), 8);

    let m = Move(sq(7, 1), sq(8, 2), Promotion::Queen);
    game.make_move(m).unwrap();

    assert_eq!(game.board()[sq(8, 2)], Some(Piece(White, Queen)));
    assert_eq!(game.is_check(Black), Ok(true));
}

#[test]
fn pinned_piece_cannot_move() {
    #[rustfmt::skip]
    let b = common::board([
        "k...r...",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....B...",
        "....K...",
    ]);

    let game = Game::new(b, White);

    assert!(game.moves(sq(2, 5)).unwrap().unwrap().is_empty());
    assert!(game.legal_moves().unwrap().iter().all(|m| m.whence() == sq(1, 5)));
}

#[test]
fn pinned_piece_may_move_along_the_pin() {
    #[rustfmt::skip]
    let b = common::board([
        "k...r...",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....R...",
        "....K...",
    ]);

    let game = Game::new(b, White);
    let moves = game.moves(sq(2, 5)).unwrap().unwrap();

    assert_eq!(moves.len(), 6);
    assert!(moves.iter().all(|m| m.whither().col() == 5));
    assert!(moves.contains(&mv((2, 5), (8, 5))));
}

#[test]
fn king_cannot_step_into_check() {
    #[rustfmt::skip]
    let b = common::board([
        "k....r..",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....K...",
    ]);

    let mut game = Game::new(b, White);
    let m = mv((1, 5), (1, 6));

    assert_eq!(game.make_move(m), Err(InvalidMove::IllegalMove(m)));
    assert!(!game.legal_moves().unwrap().contains(&m));
    assert!(game.legal_moves().unwrap().contains(&mv((1, 5), (1, 4))));
}

#[test]
fn check_must_be_answered() {
    #[rustfmt::skip]
    let b = common::board([
        "k...r...",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "..R.K...",
    ]);

    let game = Game::new(b, White);
    assert_eq!(game.is_check(White), Ok(true));

    for m in game.legal_moves().unwrap() {
        let mut next = game.clone();
        next.make_move(m).unwrap();
        assert_eq!(next.is_check(White), Ok(false));
    }

    let moves = game.legal_moves().unwrap();
    assert!(!moves.contains(&mv((1, 3), (1, 4))));
    assert!(moves.contains(&mv((1, 5), (1, 4))));
}

#[test]
fn only_the_side_to_move_may_play() {
    let mut game = Game::default();
    let m = mv((7, 5), (5, 5));

    assert_eq!(game.make_move(m), Err(InvalidMove::WrongTurn(Black)));
    assert_eq!(game, Game::default());

    game.make_move(mv((2, 5), (4, 5))).unwrap();
    assert_eq!(game.turn(), Black);
    assert_eq!(game.make_move(m), Ok(()));
    assert_eq!(game.turn(), White);
}

#[test]
fn moving_from_an_empty_square_is_rejected() {
    let mut game = Game::default();
    let m = mv((4, 4), (5, 4));

    assert_eq!(
        game.make_move(m),
        Err(InvalidMove::NoPieceAtSource(sq(4, 4)))
    );
    assert_eq!(game.moves(sq(4, 4)), Ok(None));
    assert_eq!(game, Game::default());
}

#[test]
fn piece_without_legal_moves_is_distinct_from_an_empty_square() {
    let game = Game::default();
    assert_eq!(game.moves(sq(1, 1)).map(|ms| ms.map(|ms| ms.len())), Ok(Some(0)));
    assert_eq!(game.moves(sq(5, 5)), Ok(None));
}

#[test]
fn missing_king_is_reported() {
    #[rustfmt::skip]
    let b = common::board([
        "k.......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "P.......",
        "........",
    ]);

    let mut game = Game::new(b, White);

    assert_eq!(game.is_check(White), Err(MissingKing(White)));
    assert_eq!(game.moves(sq(2, 1)), Err(MissingKing(White)));
    assert_eq!(
        game.make_move(mv((2, 1), (3, 1))),
        Err(InvalidMove::MissingKing(MissingKing(White)))
    );
    assert_eq!(game.board(), &b);
}

#[proptest]
fn board_returns_what_was_set(#[strategy(0usize..64)] moves: usize, selector: Selector) {
    let mut played = Game::default();
    for _ in 0..moves {
        match selector.try_select(played.legal_moves()?) {
            Some(m) => played.make_move(m)?,
            None => break,
        }
    }

    let b: Board = *played.board();
    let mut game = Game::default();
    game.set_board(b);

    assert_eq!(game.board(), &b);
    assert_eq!(game.turn(), White);
}
