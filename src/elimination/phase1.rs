use crate::board::{Board, Position};
use crate::events::{emit, EventData, EventKind, EventSink};
use crate::permutation::shuffle;
use rand::Rng;

/// Regional seeding: shuffles block order, then clears exactly one random
/// currently-filled cell from each block — `n` removals total from any
/// complete grid.
pub fn phase1(board: &mut Board, rng: &mut impl Rng) -> usize {
    phase1_with_events(board, rng, &mut None)
}

/// As [`phase1`], additionally emitting `Phase1CellSelected`/`Phase1Removed`
/// at cell granularity through `sink`.
pub fn phase1_with_events(board: &mut Board, rng: &mut impl Rng, sink: &mut Option<EventSink>) -> usize {
    let n = board.board_size();
    let mut block_order: Vec<usize> = (0..n).collect();
    shuffle(&mut block_order, rng);

    let mut removed = 0;
    for block in block_order {
        let sg = board.subgrid(block);
        let filled: Vec<Position> = sg
            .positions()
            .filter(|&p| board.get_cell(p) != Some(0))
            .collect();
        if filled.is_empty() {
            continue;
        }
        let choice = filled[rng.gen_range(0..filled.len())];
        let value = board.get_cell(choice).unwrap_or(0);
        emit(sink, EventData::new(EventKind::Phase1CellSelected, board).with_cell(choice, value));
        board.set_cell(choice, 0);
        removed += 1;
        emit(
            sink,
            EventData::new(EventKind::Phase1Removed, board)
                .with_cell(choice, value)
                .with_cumulative_removed(removed),
        );
    }
    board.update_stats();
    removed
}
