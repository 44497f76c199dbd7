use crate::board::Board;
use crate::permutation::permutation;
use crate::validator::{find_empty, is_safe};
use rand::Rng;

/// Classic randomized backtracking: find the first empty cell, try its
/// candidates in random order, recurse, unplace on failure.
pub fn complete_backtracking(board: &mut Board, rng: &mut impl Rng) -> bool {
    let pos = match find_empty(board) {
        Some(pos) => pos,
        None => return true,
    };

    let n = board.board_size();
    let mut order = vec![0usize; n];
    permutation(&mut order, 1, rng);

    for v in order {
        let v = v as u8;
        if is_safe(board, pos, v) {
            board.set_cell(pos, v);
            if complete_backtracking(board, rng) {
                return true;
            }
            board.set_cell(pos, 0);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::validator::validate_board;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn completes_an_empty_k2_board() {
        let mut board = Board::create(2).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(complete_backtracking(&mut board, &mut rng));
        board.update_stats();
        assert_eq!(board.empty(), 0);
        assert!(validate_board(&board));
    }

    #[test]
    fn completes_a_partially_filled_k3_board() {
        let mut board = Board::create(3).unwrap();
        board.set_cell(Position::new(0, 0), 1);
        board.set_cell(Position::new(1, 1), 2);
        let mut rng = StdRng::seed_from_u64(2);
        assert!(complete_backtracking(&mut board, &mut rng));
        board.update_stats();
        assert!(validate_board(&board));
        assert_eq!(board.get_cell(Position::new(0, 0)), Some(1));
    }
}
