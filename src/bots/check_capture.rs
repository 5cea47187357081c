use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Bot;
use crate::board::{Board, GameStatus, Move, MoveList};

/// Greedy tactician: mates when it can, otherwise prefers a random check, then a
/// random capture, then any random legal move.
pub struct CheckCaptureBot {
    rng: Mutex<StdRng>,
}

impl CheckCaptureBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        CheckCaptureBot {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Bot for CheckCaptureBot {
    fn name(&self) -> &str {
        "check-capture"
    }

    fn select_move(&self, board: &Board) -> Option<Move> {
        let moves = board.legal_moves();
        let opponent = board.turn().opponent();

        let mut checks = MoveList::new();
        let mut captures = MoveList::new();
        for mv in &moves {
            let next = board.apply_move(mv);
            if next.status() == GameStatus::Checkmate {
                return Some(*mv);
            }
            if next.flags().check(opponent) {
                checks.push(*mv);
            } else if mv.is_capture() {
                captures.push(*mv);
            }
        }

        let mut rng = self.rng.lock();
        [checks, captures, moves]
            .iter()
            .find(|pool| !pool.is_empty())
            .and_then(|pool| pool.choose(&mut *rng).copied())
    }
}
