//! Cell occupants and the two players.

use crate::FREE_SIGN;
use derive_more::Display;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
pub enum Player {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

/// The occupant of a board cell. Free cells have no [`Cell`] at all.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Cell {
    White,
    Black,
    Hole,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Cell {
    /// All cell kinds.
    pub const ALL: [Cell; 3] = [Cell::White, Cell::Black, Cell::Hole];

    /// The character used for this cell in layouts and printed boards.
    pub const fn sign(self) -> char {
        match self {
            Cell::White => 'W',
            Cell::Black => 'B',
            Cell::Hole => '#',
        }
    }

    /// Look up the cell for a sign. The free sign is not a cell.
    pub fn from_sign(sign: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|cell| cell.sign() == sign)
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
            Cell::Hole => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseCellError(pub char);

impl fmt::Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell sign: {}", self.0)
    }
}

impl std::error::Error for ParseCellError {}

impl TryFrom<char> for Cell {
    type Error = ParseCellError;

    fn try_from(sign: char) -> Result<Self, Self::Error> {
        Self::from_sign(sign).ok_or(ParseCellError(sign))
    }
}

/// Returns whether `sign` may appear in a board layout.
pub fn is_layout_sign(sign: char) -> bool {
    sign == FREE_SIGN || Cell::from_sign(sign).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_player() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn player_names() {
        assert_eq!(Player::Black.to_string(), "black");
        assert_eq!(Player::White.to_string(), "white");
    }

    #[test]
    fn signs_round_trip() {
        for cell in Cell::ALL.iter().copied() {
            assert_eq!(Cell::try_from(cell.sign()), Ok(cell));
            assert_eq!(cell.to_string(), cell.sign().to_string());
        }
        assert_eq!(Cell::try_from('-'), Err(ParseCellError('-')));
        assert_eq!(Cell::try_from('x'), Err(ParseCellError('x')));
    }

    #[test]
    fn layout_signs() {
        assert!(is_layout_sign('-'));
        assert!(is_layout_sign('#'));
        assert!(!is_layout_sign(' '));
        assert!(!is_layout_sign('w'));
    }

    #[test]
    fn cell_players() {
        assert_eq!(Cell::from(Player::White), Cell::White);
        assert_eq!(Cell::Black.player(), Some(Player::Black));
        assert_eq!(Cell::Hole.player(), None);
    }
}
