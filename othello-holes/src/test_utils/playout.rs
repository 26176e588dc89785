//! Random self-play, used to exercise the engine over many positions.

use crate::{Game, Turn};
use rand::seq::IteratorRandom;
use rand::Rng;

/// A finished random game.
#[derive(Clone, Debug)]
pub struct Playout {
    /// Every state after a move, starting with the initial one.
    pub history: Vec<Game>,
    /// Number of passes along the way.
    pub passes: usize,
}

impl Playout {
    /// The final, finished game.
    pub fn last(&self) -> &Game {
        // history always holds at least the starting game
        &self.history[self.history.len() - 1]
    }
}

/// Play uniformly random legal moves from `game` until nobody can move.
pub fn random_playout<R: Rng>(game: Game, rng: &mut R) -> Playout {
    let mut passes = 0;
    let (mut game, mut turn) = game.settle();
    let mut history = vec![game.clone()];

    loop {
        match turn {
            Turn::Finished(_) => break,
            Turn::Passed(_) => passes += 1,
            Turn::Continue => {}
        }

        let mv = match game.possible_moves().into_iter().choose(rng) {
            Some(mv) => mv,
            None => break,
        };
        let next = match game.move_to(mv) {
            Ok(next) => next,
            Err(_) => break,
        };

        let settled = next.settle();
        game = settled.0;
        turn = settled.1;
        history.push(game.clone());
    }

    Playout { history, passes }
}
