//! A text-command session driving a single [`Game`].
//!
//! The session owns the "current game" slot. Each command parses its
//! arguments, checks them against the current game and, if the engine accepts
//! the operation, swaps in the new game. Rejected commands leave the slot
//! untouched.

use crate::{Game, GameError, GameMode, Position, Turn};
use derive_more::{Display, Error};
use itertools::Itertools;
use std::mem;
use std::str::FromStr;
use tracing::{debug, info};

/// A parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame {
        width: i64,
        height: i64,
        layout: Option<String>,
    },
    Hole {
        from: Position,
        to: Position,
    },
    Move(Position),
    Print,
    Abort,
    PossibleMoves,
    Quit,
}

/// Why a command was rejected.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum CommandError {
    #[display(fmt = "command not found")]
    UnknownCommand,
    #[display(fmt = "invalid number of arguments")]
    ArgumentCount,
    #[display(fmt = "invalid number")]
    InvalidNumber,
    #[display(fmt = "invalid position")]
    InvalidPosition,
    #[display(fmt = "invalid hole")]
    InvalidHole,
    #[display(fmt = "second position must be greater than the first one")]
    HoleOrder,
    #[display(fmt = "there is already an active game")]
    GameRunning,
    #[display(fmt = "can't add hole area. there is no game yet or the game has already started")]
    HoleAfterStart,
    #[display(fmt = "game not started")]
    NotStarted,
    #[display(fmt = "{}", _0)]
    Game(#[error(source)] GameError),
}

impl From<GameError> for CommandError {
    fn from(err: GameError) -> Self {
        CommandError::Game(err)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::UnknownCommand)?;
        let args: Vec<&str> = words.collect();

        let command = match name {
            "newGame" => match args.as_slice() {
                [width, height] => Command::NewGame {
                    width: parse_number(width)?,
                    height: parse_number(height)?,
                    layout: None,
                },
                [width, height, layout] => Command::NewGame {
                    width: parse_number(width)?,
                    height: parse_number(height)?,
                    layout: Some(layout.to_string()),
                },
                _ => return Err(CommandError::ArgumentCount),
            },
            "hole" => {
                let area = single(&args)?;
                let (from, to) = area
                    .split(':')
                    .collect_tuple()
                    .ok_or(CommandError::InvalidHole)?;
                Command::Hole {
                    from: parse_position(from)?,
                    to: parse_position(to)?,
                }
            }
            "move" => Command::Move(parse_position(single(&args)?)?),
            "print" => Command::Print,
            "abort" => Command::Abort,
            "possibleMoves" => Command::PossibleMoves,
            "quit" => Command::Quit,
            _ => return Err(CommandError::UnknownCommand),
        };
        Ok(command)
    }
}

impl Command {
    /// The word that introduces this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::NewGame { .. } => "newGame",
            Command::Hole { .. } => "hole",
            Command::Move(_) => "move",
            Command::Print => "print",
            Command::Abort => "abort",
            Command::PossibleMoves => "possibleMoves",
            Command::Quit => "quit",
        }
    }
}

fn single<'a>(args: &[&'a str]) -> Result<&'a str, CommandError> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(CommandError::ArgumentCount),
    }
}

fn parse_number(s: &str) -> Result<i64, CommandError> {
    s.parse().or(Err(CommandError::InvalidNumber))
}

fn parse_position(s: &str) -> Result<Position, CommandError> {
    s.parse().or(Err(CommandError::InvalidPosition))
}

/// Holds the current game and applies commands to it.
#[derive(Debug)]
pub struct Session {
    game: Game,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A running session without a game.
    pub fn new() -> Self {
        Self {
            game: Game::empty(),
            running: true,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns whether `quit` has not been issued yet.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle one input line and render the reply, errors included.
    /// Blank lines produce no output.
    pub fn execute(&mut self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let name = line.split_whitespace().next().unwrap_or_default();
        let result = self
            .check_mode(name)
            .and_then(|()| line.parse::<Command>())
            .and_then(|command| self.run(command));

        match result {
            Ok(output) => output,
            Err(CommandError::UnknownCommand) => vec![CommandError::UnknownCommand.to_string()],
            Err(err) => {
                debug!(%err, "command rejected");
                vec![format!("Error! {}", err)]
            }
        }
    }

    /// Apply a parsed command to the current game.
    pub fn run(&mut self, command: Command) -> Result<Vec<String>, CommandError> {
        self.check_mode(command.name())?;
        let mut output = Vec::new();

        match command {
            Command::NewGame {
                width,
                height,
                layout,
            } => {
                let width = u8::try_from(width).or(Err(GameError::InvalidWidth))?;
                let height = u8::try_from(height).or(Err(GameError::InvalidHeight))?;
                self.game = Game::with_layout(width, height, layout.as_deref().unwrap_or(""))?;
                info!(width, height, "new game");
                self.settle(&mut output);
            }
            Command::Hole { from, to } => {
                self.require_on_board(from)?;
                self.require_on_board(to)?;
                if from > to {
                    return Err(CommandError::HoleOrder);
                }
                self.game = self.game.add_hole(from, to)?;
                self.settle(&mut output);
            }
            Command::Move(pos) => {
                self.require_on_board(pos)?;
                if !self.game.possible_moves().contains(pos) {
                    output.push("Move not possible.".to_string());
                } else {
                    self.game = self.game.move_to(pos)?;
                    self.settle(&mut output);
                }
            }
            Command::Print => {
                output.extend(self.game.to_string().lines().map(String::from));
            }
            Command::Abort => {
                self.game = self.game.end_game();
                output.push(self.game.outcome().to_string());
            }
            Command::PossibleMoves => {
                output.push(format!(
                    "Possible moves: {}",
                    self.game.possible_moves().iter().join(",")
                ));
            }
            Command::Quit => self.running = false,
        }

        Ok(output)
    }

    /// Reject the command named `name` if the current game mode does not
    /// allow it. Runs before the arguments are looked at.
    fn check_mode(&self, name: &str) -> Result<(), CommandError> {
        match (name, self.game.mode()) {
            ("newGame", GameMode::New | GameMode::Active) => Err(CommandError::GameRunning),
            ("hole", GameMode::Active | GameMode::GameOver) => Err(CommandError::HoleAfterStart),
            ("move" | "print" | "abort" | "possibleMoves", GameMode::GameOver) => {
                Err(CommandError::NotStarted)
            }
            _ => Ok(()),
        }
    }

    fn require_on_board(&self, pos: Position) -> Result<(), CommandError> {
        if self.game.board().is_in_range(pos) {
            Ok(())
        } else {
            Err(CommandError::InvalidPosition)
        }
    }

    /// Pass or finish the game if the player to move is stuck.
    fn settle(&mut self, output: &mut Vec<String>) {
        let (game, turn) = mem::take(&mut self.game).settle();
        self.game = game;

        match turn {
            Turn::Continue => {}
            Turn::Passed(player) => output.push(format!("{} passes.", player)),
            Turn::Finished(outcome) => {
                info!(%outcome, "game finished");
                output.push(outcome.to_string());
            }
        }
    }
}
