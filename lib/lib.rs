/// Chess domain types and the rules of the game.
pub mod chess;
