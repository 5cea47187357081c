use super::super::{Board, Color, MoveList, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dx, dy) in KNIGHT_OFFSETS {
            if let Ok(to) = from.relative(dx, dy) {
                self.push_step(from, to, color, moves);
            }
        }
    }
}
