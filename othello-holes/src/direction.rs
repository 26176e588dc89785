//! The eight directions lines are scanned in.

use crate::Position;

/// A unit step on the board. Rows grow downwards.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Right,
    RightDown,
    Down,
    LeftDown,
    Left,
    LeftUp,
    Up,
    RightUp,
}

impl Direction {
    /// Every direction, clockwise starting from the right.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::RightDown,
        Direction::Down,
        Direction::LeftDown,
        Direction::Left,
        Direction::LeftUp,
        Direction::Up,
        Direction::RightUp,
    ];

    /// The (column, row) offset of one step.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Right => (1, 0),
            Direction::RightDown => (1, 1),
            Direction::Down => (0, 1),
            Direction::LeftDown => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::LeftUp => (-1, -1),
            Direction::Up => (0, -1),
            Direction::RightUp => (1, -1),
        }
    }

    /// The position one step from `pos`, or `None` if that leaves the
    /// coordinate space. Board bounds are not checked.
    pub fn step(self, pos: Position) -> Option<Position> {
        let (dx, dy) = self.offset();
        let x = pos.x().checked_add_signed(dx)?;
        let y = pos.y().checked_add_signed(dy)?;
        Position::checked(x, y)
    }

    /// All positions reached by repeatedly stepping from `pos`, excluding `pos`.
    pub fn ray(self, pos: Position) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(pos), move |&next| self.step(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_distinct_units() {
        let mut offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
    }

    #[test]
    fn step_moves_one_cell() {
        let pos = Position::new(3, 3);
        assert_eq!(Direction::Right.step(pos), Some(Position::new(4, 3)));
        assert_eq!(Direction::LeftUp.step(pos), Some(Position::new(2, 2)));
        assert_eq!(Direction::RightUp.step(pos), Some(Position::new(4, 2)));
        assert_eq!(Direction::LeftDown.step(pos), Some(Position::new(2, 4)));
    }

    #[test]
    fn step_off_the_origin() {
        let corner = Position::new(1, 1);
        assert_eq!(Direction::Left.step(corner), None);
        assert_eq!(Direction::Up.step(corner), None);
        assert_eq!(Direction::RightUp.step(corner), None);
        assert_eq!(Direction::Down.step(corner), Some(Position::new(1, 2)));
    }

    #[test]
    fn ray_stops_at_origin() {
        let ray: Vec<_> = Direction::LeftUp.ray(Position::new(3, 4)).collect();
        assert_eq!(ray, vec![Position::new(2, 3), Position::new(1, 2)]);
    }
}
