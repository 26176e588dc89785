//! `othello-holes` is an Othello library for irregular boards with "hole" cells.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Position`], [`Cell`], [`Player`] and [`Direction`] are small value types
//!    describing the board coordinates, their occupants and the scan directions.
//!  - [`Board`] is an immutable sparse grid with the queries and the single
//!    transformation the game logic needs, plus the textual layout format.
//!  - [`Game`] is the high-level, safe state machine: move generation, move
//!    application, hole placement, passing and termination. Every operation
//!    returns a new [`Game`]; older values are never changed.
//!
//! [`session`] drives a [`Game`] from text commands and is what the `othello`
//! binary runs.

pub mod session;
pub mod test_utils;

mod board;
mod cell;
mod direction;
mod error;
mod game;
mod position;
mod utils;

pub use board::*;
pub use cell::*;
pub use direction::*;
pub use error::*;
pub use game::*;
pub use position::*;

/// The smallest allowed board width.
pub const MIN_WIDTH: u8 = 2;

/// The largest allowed board width; one column per letter.
pub const MAX_WIDTH: u8 = 26;

/// The smallest allowed board height.
pub const MIN_HEIGHT: u8 = 2;

/// The largest allowed board height.
pub const MAX_HEIGHT: u8 = 98;

/// The sign of a free cell in layouts and printed boards.
pub const FREE_SIGN: char = '-';

/// Separates the rows of a board layout.
pub const ROW_SEPARATOR: char = ',';
