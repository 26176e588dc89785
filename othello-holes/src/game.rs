//! Implements game-level Othello logic.
//!
//! A [`Game`] never changes: moving, passing, adding holes and ending all
//! return a successor, and failed operations return a [`GameError`] instead.

use crate::{
    Board, Cell, Direction, GameError, MoveList, Player, Position, MAX_HEIGHT, MAX_WIDTH,
    MIN_HEIGHT, MIN_WIDTH,
};
use std::fmt;
use std::iter;
use tracing::{debug, instrument};

/// The starting block, relative to the center of the board.
const START_CELLS: [((u8, u8), Cell); 4] = [
    ((0, 0), Cell::White),
    ((1, 0), Cell::Black),
    ((0, 1), Cell::Black),
    ((1, 1), Cell::White),
];

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Configured, but nobody has moved yet. Holes may still be added.
    New,
    /// At least one move was made.
    Active,
    /// No further moves are accepted.
    GameOver,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win {
        winner: Player,
        winner_count: usize,
        loser_count: usize,
    },
    Draw {
        count: usize,
    },
}

/// What happened when settling whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The current player has a move.
    Continue,
    /// The given player could not move and passed.
    Passed(Player),
    /// Neither player could move.
    Finished(Outcome),
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    mode: GameMode,
    board: Board,
    current: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::empty()
    }
}

impl Game {
    /// A finished game on a board with no cells. Placeholder before a real game exists.
    pub fn empty() -> Self {
        Self {
            mode: GameMode::GameOver,
            board: Board::empty(),
            current: Player::default(),
        }
    }

    /// Start a game with the classic four cells in the middle of the board.
    /// Both dimensions must be even and within the board limits.
    pub fn new(width: u8, height: u8) -> Result<Self, GameError> {
        Self::check_size(width, height)?;
        Ok(Self::starting(Self::middle_cells(width, height)))
    }

    /// Start a game from a board layout (see [`Board::from_layout`]).
    /// An empty layout means the classic start, as in [`Game::new`].
    pub fn with_layout(width: u8, height: u8, layout: &str) -> Result<Self, GameError> {
        if layout.is_empty() {
            return Self::new(width, height);
        }
        Self::check_size(width, height)?;
        Ok(Self::starting(Board::from_layout(width, height, layout)?))
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// The player moving after the current one.
    #[inline]
    pub fn next_player(&self) -> Player {
        !self.current
    }

    /// Returns whether the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.mode == GameMode::GameOver
    }

    /// Get the legal moves for the current player.
    pub fn possible_moves(&self) -> MoveList {
        let own = Cell::from(self.current);
        self.board
            .cells()
            .filter(|&(_, cell)| cell == own)
            .flat_map(|(pos, _)| {
                Direction::ALL
                    .into_iter()
                    .filter_map(move |direction| self.check_direction(pos, direction))
            })
            .collect()
    }

    /// Returns whether the current player has any legal move.
    pub fn can_move(&self) -> bool {
        !self.possible_moves().is_empty()
    }

    /// Place a piece for the current player at `pos` and flip every captured line.
    #[instrument(level = "debug", skip(self), fields(player = %self.current))]
    pub fn move_to(&self, pos: Position) -> Result<Self, GameError> {
        if !self.possible_moves().contains(pos) {
            debug!("illegal move");
            return Err(GameError::IllegalMove { position: pos });
        }

        let flipped: Vec<Position> = Direction::ALL
            .into_iter()
            .flat_map(|direction| self.captures(pos, direction))
            .collect();
        debug!(flipped = flipped.len(), "move");

        Ok(Self {
            mode: GameMode::Active,
            board: self
                .board
                .transform_by(iter::once(pos).chain(flipped), self.current.into()),
            current: self.next_player(),
        })
    }

    /// Turn every position in the rectangle `from..=to` into a hole.
    /// Fails if a player owns any cell in it.
    #[instrument(level = "debug", skip(self))]
    pub fn add_hole(&self, from: Position, to: Position) -> Result<Self, GameError> {
        if self.board.contains_cell(from, to) {
            debug!("hole area not empty");
            return Err(GameError::HoleNotEmpty { from, to });
        }

        Ok(Self {
            mode: self.mode,
            board: self.board.transform_by(from.rectangle(to), Cell::Hole),
            current: self.current,
        })
    }

    /// Let the current player pass.
    pub fn pass_move(&self) -> Self {
        debug!(player = %self.current, "pass");
        Self {
            mode: self.mode,
            board: self.board.clone(),
            current: self.next_player(),
        }
    }

    /// End the game where it stands.
    pub fn end_game(&self) -> Self {
        debug!("game over");
        Self {
            mode: GameMode::GameOver,
            board: self.board.clone(),
            current: self.current,
        }
    }

    /// Score the board: the player with strictly more cells wins.
    pub fn outcome(&self) -> Outcome {
        let white = self.board.count(Cell::White);
        let black = self.board.count(Cell::Black);

        if white == black {
            Outcome::Draw { count: white }
        } else {
            let winner = if white > black {
                Player::White
            } else {
                Player::Black
            };
            Outcome::Win {
                winner,
                winner_count: white.max(black),
                loser_count: white.min(black),
            }
        }
    }

    /// Make sure somebody can move: pass if only the opponent can,
    /// end the game if neither can.
    pub fn settle(self) -> (Self, Turn) {
        if self.can_move() {
            return (self, Turn::Continue);
        }

        let passed = self.pass_move();
        if passed.can_move() {
            (passed, Turn::Passed(self.current))
        } else {
            let ended = self.end_game();
            let outcome = ended.outcome();
            (ended, Turn::Finished(outcome))
        }
    }

    fn starting(board: Board) -> Self {
        Self {
            mode: GameMode::New,
            board,
            current: Player::default(),
        }
    }

    fn check_size(width: u8, height: u8) -> Result<(), GameError> {
        if !is_valid_size(width, MIN_WIDTH, MAX_WIDTH) {
            return Err(GameError::InvalidWidth);
        }
        if !is_valid_size(height, MIN_HEIGHT, MAX_HEIGHT) {
            return Err(GameError::InvalidHeight);
        }
        Ok(())
    }

    fn middle_cells(width: u8, height: u8) -> Board {
        let (x_middle, y_middle) = (width / 2, height / 2);
        Board::new(
            width,
            height,
            START_CELLS
                .iter()
                .map(|&((dx, dy), cell)| (Position::new(dx + x_middle, dy + y_middle), cell)),
        )
    }

    /// Scan from one of our cells across opponent cells to the free cell ending the line.
    fn check_direction(&self, pos: Position, direction: Direction) -> Option<Position> {
        let opponent = Cell::from(self.next_player());
        let first = direction.step(pos)?;
        if !self.board.is_of_player(first, opponent) {
            return None;
        }

        direction
            .ray(first)
            .find(|&next| self.is_invalid(next) || self.board.is_free(next))
            .filter(|&end| self.board.is_free(end))
    }

    fn is_invalid(&self, pos: Position) -> bool {
        !self.board.is_in_range(pos)
            || self.board.is_of_player(pos, self.current.into())
            || self.board.is_hole(pos)
    }

    /// Opponent cells captured along `direction` by a move at `pos`.
    fn captures(&self, pos: Position, direction: Direction) -> Vec<Position> {
        let own = Cell::from(self.current);
        let opponent = Cell::from(self.next_player());

        let mut line = Vec::new();
        for next in direction.ray(pos) {
            match self.board.cell(next) {
                Some(cell) if cell == opponent => line.push(next),
                Some(cell) if cell == own => return line,
                _ => break,
            }
        }
        Vec::new()
    }
}

fn is_valid_size(n: u8, min: u8, max: u8) -> bool {
    n >= min && n <= max && n % 2 == 0
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Draw { .. } => f.write_str("Game has ended in a draw."),
            Outcome::Win {
                winner,
                winner_count,
                loser_count,
            } => write!(
                f,
                "Game Over! {} has won ({}:{})!",
                winner, winner_count, loser_count
            ),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "turn: {}", self.current)
    }
}
