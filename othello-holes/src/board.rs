//! An immutable sparse Othello board.
//!
//! Only occupied cells are stored; any in-range position missing from the map
//! is free. Every transformation builds a new [`Board`], so a caller holding an
//! older board keeps seeing the same cells.

use crate::cell::is_layout_sign;
use crate::{utils, Cell, GameError, Position, FREE_SIGN, ROW_SEPARATOR};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Board dimensions plus the occupant of every non-free cell.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: BTreeMap<Position, Cell>,
}

impl Board {
    /// A board with no cells at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A board with the given occupants. Occupants outside the board are dropped.
    pub fn new<I>(width: u8, height: u8, cells: I) -> Self
    where
        I: IntoIterator<Item = (Position, Cell)>,
    {
        let cells = cells
            .into_iter()
            .filter(|&(pos, _)| pos.x() <= width && pos.y() <= height)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Parse a layout: `height` rows separated by [`ROW_SEPARATOR`], row 1 first,
    /// each made of exactly `width` cell signs or [`FREE_SIGN`]s.
    pub fn from_layout(width: u8, height: u8, layout: &str) -> Result<Self, GameError> {
        let rows: Vec<&str> = layout.split(ROW_SEPARATOR).collect();
        if rows.len() != height as usize {
            return Err(GameError::InvalidLayout);
        }

        let mut cells = BTreeMap::new();
        for (y, row) in (1..=height).zip(rows) {
            if row.chars().count() != width as usize || !row.chars().all(is_layout_sign) {
                return Err(GameError::InvalidLayout);
            }
            for (x, sign) in (1..=width).zip(row.chars()) {
                if let Some(cell) = Cell::from_sign(sign) {
                    cells.insert(Position::new(x, y), cell);
                }
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Encode the board in the format read by [`Board::from_layout`].
    pub fn to_layout(&self) -> String {
        self.rows(ROW_SEPARATOR).to_string()
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns whether `pos` lies on the board.
    #[inline]
    pub fn is_in_range(&self, pos: Position) -> bool {
        pos.x() <= self.width && pos.y() <= self.height
    }

    /// Returns whether `pos` lies on the board and has no occupant.
    #[inline]
    pub fn is_free(&self, pos: Position) -> bool {
        self.is_in_range(pos) && !self.cells.contains_key(&pos)
    }

    /// Returns whether `pos` holds `cell`.
    #[inline]
    pub fn is_of_player(&self, pos: Position, cell: Cell) -> bool {
        self.cells.get(&pos) == Some(&cell)
    }

    /// Returns whether `pos` holds a hole.
    #[inline]
    pub fn is_hole(&self, pos: Position) -> bool {
        self.is_of_player(pos, Cell::Hole)
    }

    /// The occupant of `pos`, or `None` if it is free or off the board.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(&pos).copied()
    }

    /// Every occupied position and its occupant, in [`Position`] order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().map(|(&pos, &cell)| (pos, cell))
    }

    /// Count the positions holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.values().filter(|&&c| c == cell).count()
    }

    /// Count the positions held by either player.
    pub fn count_occupied(&self) -> usize {
        self.cells.values().filter(|&&c| c != Cell::Hole).count()
    }

    /// Returns whether any position in the rectangle `from..=to` belongs to a player.
    /// `from` is expected to be above and left of `to`.
    pub fn contains_cell(&self, from: Position, to: Position) -> bool {
        from.rectangle(to)
            .any(|pos| matches!(self.cell(pos), Some(cell) if cell != Cell::Hole))
    }

    /// Build a new board with every listed position set to `cell`,
    /// overwriting whatever was there. Off-board positions are ignored.
    pub fn transform_by<I>(&self, positions: I, cell: Cell) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut cells = self.cells.clone();
        for pos in positions {
            if self.is_in_range(pos) {
                trace!(%pos, %cell, "transform");
                cells.insert(pos, cell);
            }
        }

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    fn rows(&self, separator: char) -> Rows<'_> {
        Rows {
            board: self,
            separator,
        }
    }

    /// The sign of every position, row by row.
    fn signs(&self) -> impl Iterator<Item = char> + '_ {
        (1..=self.height).flat_map(move |y| {
            (1..=self.width).map(move |x| {
                self.cell(Position::new(x, y))
                    .map_or(FREE_SIGN, Cell::sign)
            })
        })
    }
}

/// One row per line, free cells shown as [`FREE_SIGN`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rows('\n'), f)
    }
}

/// The board's signs, one row after the other, rows joined by `separator`.
struct Rows<'a> {
    board: &'a Board,
    separator: char,
}

impl fmt::Display for Rows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board;
        utils::format_rows(board.signs(), board.width, board.height, self.separator, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y)
    }

    fn sample() -> Board {
        Board::from_layout(4, 4, "#---,-WB-,-BW-,----").unwrap()
    }

    #[test]
    fn range_checks() {
        let board = sample();
        assert!(board.is_in_range(pos(1, 1)));
        assert!(board.is_in_range(pos(4, 4)));
        assert!(!board.is_in_range(pos(5, 1)));
        assert!(!board.is_in_range(pos(1, 5)));
    }

    #[test]
    fn occupancy_queries() {
        let board = sample();
        assert!(board.is_hole(pos(1, 1)));
        assert!(!board.is_free(pos(1, 1)));
        assert!(board.is_free(pos(2, 1)));
        assert!(!board.is_free(pos(5, 5)));
        assert!(board.is_of_player(pos(2, 2), Cell::White));
        assert!(board.is_of_player(pos(3, 2), Cell::Black));
        assert!(!board.is_of_player(pos(3, 2), Cell::White));
        assert!(!board.is_of_player(pos(2, 1), Cell::White));
        assert_eq!(board.count(Cell::White), 2);
        assert_eq!(board.count(Cell::Hole), 1);
        assert_eq!(board.count_occupied(), 4);
    }

    #[test]
    fn contains_cell_ignores_holes() {
        let board = sample();
        assert!(!board.contains_cell(pos(1, 1), pos(1, 1)));
        assert!(!board.contains_cell(pos(1, 1), pos(4, 1)));
        assert!(board.contains_cell(pos(2, 2), pos(2, 2)));
        assert!(board.contains_cell(pos(1, 1), pos(2, 2)));
        assert!(!board.contains_cell(pos(1, 4), pos(4, 4)));
    }

    #[test]
    fn transform_leaves_original_untouched() {
        let board = sample();
        let changed = board.transform_by(vec![pos(2, 1), pos(3, 2)], Cell::White);

        assert!(board.is_free(pos(2, 1)));
        assert!(board.is_of_player(pos(3, 2), Cell::Black));
        assert!(changed.is_of_player(pos(2, 1), Cell::White));
        assert!(changed.is_of_player(pos(3, 2), Cell::White));
    }

    #[test]
    fn transform_overwrites_holes() {
        let changed = sample().transform_by(vec![pos(1, 1)], Cell::Black);
        assert!(changed.is_of_player(pos(1, 1), Cell::Black));
    }

    #[test]
    fn transform_ignores_off_board() {
        let changed = sample().transform_by(vec![pos(9, 9)], Cell::Black);
        assert_eq!(changed, sample());
    }

    #[test]
    fn layout_round_trip() {
        let layout = "#---,-WB-,-BW-,---#";
        let board = Board::from_layout(4, 4, layout).unwrap();
        assert_eq!(board.to_layout(), layout);
        assert_eq!(Board::from_layout(4, 4, &board.to_layout()), Ok(board));
    }

    #[test]
    fn layout_failures() {
        assert_eq!(
            Board::from_layout(4, 4, "----,-WB-,-BW-"),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            Board::from_layout(4, 4, "----,-WB-,-BW-,---"),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            Board::from_layout(4, 4, "----,-WB-,-BW-,--x-"),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            Board::from_layout(4, 4, "----,-WB-,-BW-,----,"),
            Err(GameError::InvalidLayout)
        );
    }

    #[test]
    fn display_rows() {
        assert_eq!(sample().to_string(), "#---\n-WB-\n-BW-\n----");
        assert_eq!(sample().to_string().replace('\n', ","), sample().to_layout());
    }

    #[test]
    fn empty_board_has_empty_layout() {
        assert_eq!(Board::empty().to_layout(), "");
        assert_eq!(Board::empty().to_string(), "");
    }

    #[test]
    fn new_drops_off_board_cells() {
        let board = Board::new(2, 2, vec![(pos(1, 1), Cell::White), (pos(3, 1), Cell::Black)]);
        assert_eq!(board.cells().count(), 1);
    }
}
