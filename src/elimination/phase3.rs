use crate::board::{Board, Position};
use crate::difficulty::{phase3_target, Difficulty};
use crate::events::{emit, EventData, EventKind, EventSink};
use crate::forced_cells::{should_protect, ForcedCellsRegistry};
use crate::permutation::shuffle;
use crate::solution_counter::count_solutions;
use rand::Rng;

/// Verified free elimination with protection: shuffles every currently
/// filled cell, then tentatively clears each candidate in turn, keeping the
/// removal only if the board still has exactly one completion, until the
/// proportional target is removed or candidates run out.
///
/// Cells the forced-cells registry marks as protected for `difficulty` are
/// skipped outright, never even tentatively cleared.
pub fn phase3(
    board: &mut Board,
    rng: &mut impl Rng,
    registry: &ForcedCellsRegistry,
    difficulty: Difficulty,
) -> usize {
    phase3_with_events(board, rng, registry, difficulty, &mut None)
}

/// As [`phase3`], additionally emitting `Phase3CellSelected`/`Tested` and
/// `Removed`/`Kept` through `sink`.
pub fn phase3_with_events(
    board: &mut Board,
    rng: &mut impl Rng,
    registry: &ForcedCellsRegistry,
    difficulty: Difficulty,
    sink: &mut Option<EventSink>,
) -> usize {
    let n = board.board_size();
    let k = board.subgrid_size();
    let target = phase3_target(n, k);

    let mut candidates: Vec<Position> = board
        .iter_cells()
        .filter(|&(_, v)| v != 0)
        .map(|(pos, _)| pos)
        .collect();
    shuffle(&mut candidates, rng);

    let mut removed = 0;
    for pos in candidates {
        if removed >= target {
            break;
        }
        if should_protect(registry, pos, difficulty) {
            continue;
        }
        let value = match board.get_cell(pos) {
            Some(v) if v != 0 => v,
            _ => continue,
        };

        emit(sink, EventData::new(EventKind::Phase3CellSelected, board).with_cell(pos, value));
        board.set_cell(pos, 0);
        let solutions = count_solutions(board, 2);
        emit(sink, EventData::new(EventKind::Phase3Tested, board).with_cell(pos, value));
        if solutions == 1 {
            removed += 1;
            emit(
                sink,
                EventData::new(EventKind::Phase3Removed, board)
                    .with_cell(pos, value)
                    .with_cumulative_removed(removed),
            );
        } else {
            board.set_cell(pos, value);
            emit(sink, EventData::new(EventKind::Phase3Kept, board).with_cell(pos, value));
        }
    }

    board.update_stats();
    removed
}
