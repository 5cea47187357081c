use super::super::{Board, Color, MoveList, Square};
use super::sliders::ALL_DIRECTIONS;

impl Board {
    /// One step in each of the eight directions. Castling moves are not generated.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dx, dy) in ALL_DIRECTIONS {
            if let Ok(to) = from.relative(dx, dy) {
                self.push_step(from, to, color, moves);
            }
        }
    }
}
