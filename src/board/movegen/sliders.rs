use super::super::{Board, Color, MoveList, Square};

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Board {
    /// Walk each ray one square at a time. A ray stops before an own piece and
    /// on (including) the first opponent piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dx, dy) in directions {
            let mut current = from;
            while let Ok(target) = current.relative(dx, dy) {
                if self.is_color(target, color) {
                    break;
                }
                moves.extend(self.create_move(from, target));
                if !self.is_empty(target) {
                    break;
                }
                current = target;
            }
        }
    }
}
