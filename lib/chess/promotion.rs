use super::Role;
use serde::{Deserialize, Serialize};

/// A promotion specifier.
///
/// Only a pawn reaching its farthest row promotes, and only to a knight, bishop, rook or queen.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Promotion {
    #[default]
    None,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    /// The promotions a pawn may choose from, in the order they are generated.
    pub const CHOICES: [Promotion; 4] = [
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Queen,
        Promotion::Knight,
    ];
}

impl From<Promotion> for Option<Role> {
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::None => None,
            Promotion::Knight => Some(Role::Knight),
            Promotion::Bishop => Some(Role::Bishop),
            Promotion::Rook => Some(Role::Rook),
            Promotion::Queen => Some(Role::Queen),
        }
    }
}

#[cfg(test)]
use shakmaty as sm;

#[cfg(test)]
impl From<Option<sm::Role>> for Promotion {
    fn from(p: Option<sm::Role>) -> Self {
        match p {
            None => Promotion::None,
            Some(sm::Role::Knight) => Promotion::Knight,
            Some(sm::Role::Bishop) => Promotion::Bishop,
            Some(sm::Role::Rook) => Promotion::Rook,
            Some(sm::Role::Queen) => Promotion::Queen,
            Some(v) => panic!("unexpected {v:?}"),
        }
    }
}

#[cfg(test)]
impl From<Promotion> for Option<sm::Role> {
    fn from(p: Promotion) -> Self {
        Option::<Role>::from(p).map(sm::Role::from)
    }
}
