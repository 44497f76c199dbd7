//! The three-phase clue-removal algorithm: Phase 1 seeds one removal per
//! block, Phase 2 iteratively removes values with no alternative placement,
//! and Phase 3 verifies each further removal against the solution counter,
//! consulting the forced-cells registry for protection.

pub mod phase1;
pub mod phase2;
pub mod phase3;

use crate::board::{Board, Position};
use crate::validator::is_safe;

pub use phase1::{phase1, phase1_with_events};
pub use phase2::{phase2, phase2_with_events, Phase2Stats};
pub use phase3::{phase3, phase3_with_events};

/// Whether `value` (currently sitting at `pos`) could legally be placed at
/// some *other* empty cell sharing `pos`'s row, column, or block, if `pos`
/// itself were also empty. If not, clearing `pos` cannot introduce an
/// alternative completion there — no other cell in any of its constraint
/// regions could take `value`.
///
/// Checks under the hypothesis that `pos` is empty (not its current,
/// still-filled state), since otherwise `pos` itself would trivially
/// conflict with every candidate in its own row/column/block. `board` is
/// restored to its input state before returning.
pub fn has_alternative_placement(board: &mut Board, pos: Position, value: u8) -> bool {
    let n = board.board_size();
    board.set_cell(pos, 0);

    let found = (0..n)
        .map(|col| Position::new(pos.row, col))
        .chain((0..n).map(|row| Position::new(row, pos.col)))
        .chain(board.subgrid_at(pos).positions())
        .any(|candidate| {
            candidate != pos && board.get_cell(candidate) == Some(0) && is_safe(board, candidate, value)
        });

    board.set_cell(pos, value);
    found
}
