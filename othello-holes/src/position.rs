//! Code for working with [`Position`]s on the Othello board.

use crate::utils;
use derive_more::{From, Into};
use itertools::Itertools;
use std::collections::{btree_set, BTreeSet};
use std::fmt::{self, Display, Formatter, Write};

/// A 1-based (column, row) location on the board.
/// Orders by column first, then by row.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Position {
    x: u8,
    y: u8,
}

/// The legal moves out of a game state, deduplicated and in [`Position`] order.
#[derive(Clone, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(BTreeSet<Position>);

impl Position {
    /// Construct from 1-based column and row coordinates.
    /// Panics if either coordinate is zero.
    pub fn new(x: u8, y: u8) -> Self {
        assert!(x >= 1 && y >= 1, "positions are 1-based");
        Self { x, y }
    }

    /// Construct from 1-based coordinates, or `None` if either is zero.
    pub fn checked(x: u8, y: u8) -> Option<Self> {
        if x == 0 || y == 0 {
            None
        } else {
            Some(Self { x, y })
        }
    }

    /// The 1-based column.
    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    /// The 1-based row.
    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// All positions in the rectangle spanned by `self` and `to`, inclusive,
    /// in row-major order. Empty unless `self` is above and left of `to`.
    pub fn rectangle(self, to: Position) -> impl Iterator<Item = Position> {
        let (from_x, to_x) = (self.x, to.x);
        (self.y..=to.y).flat_map(move |y| (from_x..=to_x).map(move |x| Position { x, y }))
    }
}

/// Convert this [`Position`] into string notation ("A4").
/// Columns past the last letter are written numerically, as in "(27,1)".
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match utils::column_letter(self.x) {
            Some(letter) => {
                f.write_char(letter)?;
                write!(f, "{}", self.y)
            }
            None => write!(f, "({},{})", self.x, self.y),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsePositionError;

impl Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position")
    }
}

impl std::error::Error for ParsePositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Build a [`Position`] from string notation ("A4", "c12").
/// Only the notation is checked here; whether the position lies on a
/// particular board is up to the [`crate::Board`].
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let x = chars
            .next()
            .and_then(utils::column_index)
            .ok_or(ParsePositionError)?;

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParsePositionError);
        }
        let y: u8 = row_str.parse().or(Err(ParsePositionError))?;

        Self::checked(x, y).ok_or(ParsePositionError)
    }
}

impl MoveList {
    /// Returns whether `pos` is in this list.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The number of legal moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no legal moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the moves in [`Position`] order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Position> for MoveList {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveList {
    type Item = Position;
    type IntoIter = btree_set::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = Position;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}
