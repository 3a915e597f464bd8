use lib::chess::{Board, Color, Piece, Role, Square};

/// Builds a [`Board`] from a diagram that lists row 8 first.
///
/// White pieces are uppercase, black pieces are lowercase and empty squares are `.`.
pub fn board(diagram: [&str; 8]) -> Board {
    let mut b = Board::default();

    for (i, line) in diagram.into_iter().enumerate() {
        assert_eq!(line.len(), 8, "malformed row `{line}`");

        for (j, c) in line.chars().enumerate() {
            let role = match c.to_ascii_lowercase() {
                '.' => continue,
                'p' => Role::Pawn,
                'n' => Role::Knight,
                'b' => Role::Bishop,
                'r' => Role::Rook,
                'q' => Role::Queen,
                'k' => Role::King,
                _ => panic!("unexpected piece `{c}`"),
            };

            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            let sq = Square::new(8 - i as i8, j as i8 + 1);
            b.set(sq, Some(Piece(color, role))).unwrap();
        }
    }

    b
}
