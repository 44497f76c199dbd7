use super::has_alternative_placement;
use crate::board::{Board, Position};
use crate::events::{emit, EventData, EventKind, EventSink};
use crate::permutation::shuffle;
use rand::Rng;

/// Outcome of a Phase 2 run: total cells removed and how many rounds it took
/// to reach the fixed point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Phase2Stats {
    pub removed: usize,
    pub rounds: usize,
}

/// No-alternatives removal: repeats rounds over every currently-filled
/// cell, clearing any cell whose value has no legal alternative placement
/// anywhere in its row, column, or block, until a round removes nothing.
///
/// Iterates row-major within a round (over filled cells only); block order
/// is reshuffled each round for parity with Phase 1/3's shuffled traversal,
/// though the fixed-point property holds regardless of order.
pub fn phase2(board: &mut Board, rng: &mut impl Rng) -> Phase2Stats {
    phase2_with_events(board, rng, &mut None)
}

/// As [`phase2`], additionally emitting `Phase2RoundStart`/`RoundComplete`
/// and `Phase2CellSelected`/`Removed`/`Kept` through `sink`.
pub fn phase2_with_events(board: &mut Board, rng: &mut impl Rng, sink: &mut Option<EventSink>) -> Phase2Stats {
    let n = board.board_size();
    let mut stats = Phase2Stats::default();

    loop {
        let mut block_order: Vec<usize> = (0..n).collect();
        shuffle(&mut block_order, rng);

        emit(sink, EventData::new(EventKind::Phase2RoundStart, board).with_round(stats.rounds as u32));

        let mut removed_this_round = 0;
        for block in block_order {
            let positions: Vec<Position> = board.subgrid(block).positions().collect();
            for pos in positions {
                let value = match board.get_cell(pos) {
                    Some(v) if v != 0 => v,
                    _ => continue,
                };
                emit(sink, EventData::new(EventKind::Phase2CellSelected, board).with_cell(pos, value));
                if !has_alternative_placement(board, pos, value) {
                    board.set_cell(pos, 0);
                    removed_this_round += 1;
                    emit(
                        sink,
                        EventData::new(EventKind::Phase2Removed, board)
                            .with_cell(pos, value)
                            .with_cumulative_removed(stats.removed + removed_this_round),
                    );
                } else {
                    emit(sink, EventData::new(EventKind::Phase2Kept, board).with_cell(pos, value));
                }
            }
        }

        stats.rounds += 1;
        stats.removed += removed_this_round;
        emit(
            sink,
            EventData::new(EventKind::Phase2RoundComplete, board)
                .with_round(stats.rounds as u32)
                .with_cumulative_removed(stats.removed),
        );
        if removed_this_round == 0 {
            break;
        }
    }

    board.update_stats();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::complete_backtracking;
    use crate::elimination::phase1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn is_idempotent_at_its_own_fixed_point() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut board = Board::create(3).unwrap();
        assert!(complete_backtracking(&mut board, &mut rng));
        board.update_stats();
        phase1(&mut board, &mut rng);
        phase2(&mut board, &mut rng);

        let again = phase2(&mut board, &mut rng);
        assert_eq!(again.removed, 0);
        assert_eq!(again.rounds, 1);
    }
}
