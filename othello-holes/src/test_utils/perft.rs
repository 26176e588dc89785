//! "Perft" performance test: count the number of leaves at a given depth.
//! On the standard 8x8 start the counts match classic Othello.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::Game;

/// Count the leaves `depth` plies below the start of a `width` x `height` game.
/// Panics if the size is not a valid board size.
pub fn run_perft(width: u8, height: u8, depth: u64) -> u64 {
    let game = Game::new(width, height).expect("valid perft board size");
    leaves_below(&game, depth, false)
}

fn leaves_below(game: &Game, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.possible_moves();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(&game.pass_move(), depth - 1, true);
    }

    all_moves
        .iter()
        .filter_map(|mv| game.move_to(mv).ok())
        .map(|next| leaves_below(&next, depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(8, 8, 1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(8, 8, 2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(8, 8, 3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(8, 8, 4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(8, 8, 5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(8, 8, 6), 8200);
}

// The smallest board is already full, so every line ends immediately.
#[test]
fn perft_2x2() {
    assert_eq!(run_perft(2, 2, 1), 1);
    assert_eq!(run_perft(2, 2, 5), 1);
}
