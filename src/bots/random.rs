use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Bot;
use crate::board::{Board, Move};

/// Plays a uniformly random legal move.
pub struct RandomBot {
    rng: Mutex<StdRng>,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomBot {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&self, board: &Board) -> Option<Move> {
        let moves = board.legal_moves();
        moves.choose(&mut *self.rng.lock()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_choices() {
        let a = RandomBot::new(99);
        let b = RandomBot::new(99);
        let mut board = Board::new();
        for _ in 0..12 {
            let mv = a.select_move(&board).unwrap();
            assert_eq!(b.select_move(&board), Some(mv));
            board = board.apply_move(&mv);
        }
    }

    #[test]
    fn test_single_legal_move_is_taken() {
        // Black must answer the check with g7g6
        let board =
            Board::from_fen("rnbqkbnr/ppppp1pp/5p2/7Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
        let mv = RandomBot::new(3).select_move(&board).unwrap();
        assert_eq!(mv.notation(), "g7g6");
    }
}
