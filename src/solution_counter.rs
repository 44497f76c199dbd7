use crate::board::Board;
use crate::validator::{find_empty, is_safe};

/// Exhaustively backtracks over completions of `board`, counting them up to
/// `limit` and then stopping early. `board` is restored to its input state
/// on return regardless of the outcome.
///
/// A `limit` of 2 is the standard way to distinguish a unique solution from
/// an ambiguous one without enumerating every completion.
pub fn count_solutions(board: &mut Board, limit: usize) -> usize {
    let mut count = 0;
    search(board, limit, &mut count);
    count
}

fn search(board: &mut Board, limit: usize, count: &mut usize) {
    if *count >= limit {
        return;
    }
    let pos = match find_empty(board) {
        Some(pos) => pos,
        None => {
            *count += 1;
            return;
        }
    };
    let n = board.board_size();
    for v in 1..=n as u8 {
        if is_safe(board, pos, v) {
            board.set_cell(pos, v);
            search(board, limit, count);
            board.set_cell(pos, 0);
            if *count >= limit {
                return;
            }
        }
    }
}
