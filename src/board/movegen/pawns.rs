use super::super::{Board, Color, MoveList, Square};

impl Board {
    /// Forward pushes onto empty squares (two from the start row when both are empty)
    /// and diagonal captures onto opponent pieces. No en passant, no promotion.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Ok(one) = from.relative(0, dir) {
            if self.is_empty(one) {
                moves.extend(self.create_move(from, one));

                if from.row() == color.pawn_start_row() {
                    if let Ok(two) = from.relative(0, 2 * dir) {
                        if self.is_empty(two) {
                            moves.extend(self.create_move(from, two));
                        }
                    }
                }
            }
        }

        for dx in [-1, 1] {
            if let Ok(target) = from.relative(dx, dir) {
                if self.is_color(target, color.opponent()) {
                    moves.extend(self.create_move(from, target));
                }
            }
        }
    }
}
