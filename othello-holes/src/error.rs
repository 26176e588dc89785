use crate::Position;
use derive_more::{Display, Error};

/// A rejected game operation. The game it was attempted on is unchanged.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum GameError {
    #[display(fmt = "invalid width")]
    InvalidWidth,
    #[display(fmt = "invalid height")]
    InvalidHeight,
    #[display(fmt = "invalid data")]
    InvalidLayout,
    #[display(fmt = "can't add hole ({}:{}). It is not empty", from, to)]
    HoleNotEmpty { from: Position, to: Position },
    #[display(fmt = "it is impossible to move to position {}", position)]
    IllegalMove { position: Position },
}
