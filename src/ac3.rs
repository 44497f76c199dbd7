use crate::board::Position;
use crate::constraint_network::ConstraintNetwork;
use std::collections::VecDeque;
use std::time::Instant;

/// A directed arc `(Xi, Xj)`: revising it may prune `Xi`'s domain using
/// `Xj`'s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub xi: Position,
    pub xj: Position,
}

/// Counters gathered over one AC-3 run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropagationStats {
    pub revisions: usize,
    pub values_removed: usize,
    pub propagations: usize,
    pub time_ms: u64,
    pub consistent: bool,
    /// Whether some domain transitioned from size > 1 to size 1 during this
    /// run, as opposed to having already been a singleton (e.g. from
    /// `ConstraintNetwork::from_board`'s construction-time forward checking)
    /// before the run started.
    pub found_singleton: bool,
}

/// For the all-different constraint between peers, `v` survives in `Xi`
/// unless `Xj`'s domain is the singleton `{v}` (the only way `v` could fail
/// to have a supporting, distinct value in `Xj`). Returns whether `Xi`'s
/// domain changed.
fn revise(net: &mut ConstraintNetwork, xi: Position, xj: Position) -> bool {
    let mut changed = false;
    if let Some(v) = net.get_domain(xj).singleton_value() {
        if net.has_value(xi, v) {
            net.remove_value(xi, v);
            changed = true;
        }
    }
    changed
}

/// `revise_arc` as exposed to callers: revises `(xi, xj)` and reports
/// whether it pruned `xi`'s domain.
pub fn revise_arc(net: &mut ConstraintNetwork, xi: Position, xj: Position) -> bool {
    revise(net, xi, xj)
}

fn run_queue(
    net: &mut ConstraintNetwork,
    mut queue: VecDeque<Arc>,
    stop_on_first_singleton: bool,
) -> PropagationStats {
    let start = Instant::now();
    let mut stats = PropagationStats {
        consistent: true,
        ..Default::default()
    };

    while let Some(Arc { xi, xj }) = queue.pop_front() {
        stats.propagations += 1;
        let before = net.domain_size(xi);
        if revise(net, xi, xj) {
            stats.revisions += 1;
            let after = net.domain_size(xi);
            stats.values_removed += before.saturating_sub(after);

            if net.domain_empty(xi) {
                stats.consistent = false;
                break;
            }
            let became_singleton = before > 1 && after == 1;
            if became_singleton {
                stats.found_singleton = true;
            }
            for &xk in net.peers(xi) {
                if xk != xj {
                    queue.push_back(Arc { xi: xk, xj: xi });
                }
            }
            if stop_on_first_singleton && became_singleton {
                break;
            }
        }
    }

    stats.time_ms = start.elapsed().as_millis() as u64;
    stats
}

/// Enforces arc consistency over every arc in `net`. Returns `true` (and
/// leaves `net` arc-consistent) unless some domain is driven empty, in which
/// case `net` reflects the inconsistency up to the point of detection.
pub fn enforce_consistency(net: &mut ConstraintNetwork) -> PropagationStats {
    let mut queue = VecDeque::new();
    for row in 0..net.n() {
        for col in 0..net.n() {
            let xi = Position::new(row, col);
            for &xj in net.peers(xi) {
                queue.push_back(Arc { xi, xj });
            }
        }
    }
    run_queue(net, queue, false)
}

/// Incremental propagation after assigning `v` at `(r, c)`: seeds the queue
/// with only the arcs pointing *into* `(r, c)` from its peers, rather than
/// the whole network.
pub fn propagate_from(net: &mut ConstraintNetwork, pos: Position) -> PropagationStats {
    let mut queue = VecDeque::new();
    for &peer in net.peers(pos) {
        queue.push_back(Arc { xi: peer, xj: pos });
    }
    run_queue(net, queue, false)
}

/// Like [`enforce_consistency`], but returns as soon as some domain
/// *transitions* to size 1 during the run — not merely because it was
/// already a singleton (e.g. from construction-time forward checking)
/// before this call started.
pub fn find_singles(net: &mut ConstraintNetwork) -> bool {
    let mut queue = VecDeque::new();
    for row in 0..net.n() {
        for col in 0..net.n() {
            let xi = Position::new(row, col);
            for &xj in net.peers(xi) {
                queue.push_back(Arc { xi, xj });
            }
        }
    }
    let stats = run_queue(net, queue, true);
    stats.found_singleton
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn placing_a_value_prunes_every_peer() {
        let mut board = Board::create(3).unwrap();
        board.set_cell(Position::new(0, 0), 5);
        board.update_stats();
        let mut net = ConstraintNetwork::from_board(&board);
        let stats = enforce_consistency(&mut net);
        assert!(stats.consistent);
        for col in 1..9 {
            assert!(!net.has_value(Position::new(0, col), 5));
        }
        for row in 1..9 {
            assert!(!net.has_value(Position::new(row, 0), 5));
        }
        for pos in board.subgrid_at(Position::new(0, 0)).positions() {
            if pos != Position::new(0, 0) {
                assert!(!net.has_value(pos, 5));
            }
        }
        assert_eq!(net.get_domain(Position::new(0, 0)).singleton_value(), Some(5));
    }

    #[test]
    fn eight_of_nine_in_a_row_forces_the_last_single() {
        let mut board = Board::create(3).unwrap();
        for col in 0..8 {
            board.set_cell(Position::new(0, col), (col + 1) as u8);
        }
        board.update_stats();
        let mut net = ConstraintNetwork::from_board(&board);
        let stats = enforce_consistency(&mut net);
        assert!(stats.consistent);
        assert_eq!(net.get_domain(Position::new(0, 8)).singleton_value(), Some(9));
    }

    #[test]
    fn find_singles_detects_a_singleton_produced_during_the_run() {
        // (0,8) starts at domain size 2 ({8, 9}), not already a singleton
        // from construction-time forward checking. Its column peer (1,8)
        // is a pre-existing singleton ({8}); only `find_singles`'s own
        // propagation prunes 8 from (0,8), collapsing it to {9}.
        let board = Board::create(3).unwrap();
        let mut net = ConstraintNetwork::from_board(&board);
        let target = Position::new(0, 8);
        for v in 1..=7u8 {
            net.remove_value(target, v);
        }
        net.assign_value(Position::new(1, 8), 8);
        assert!(find_singles(&mut net));
        assert_eq!(net.get_domain(target).singleton_value(), Some(9));
    }

    #[test]
    fn find_singles_is_false_when_no_domain_ever_collapses() {
        // Every domain is already full; revise() never removes anything,
        // so no domain transitions to size 1 during the run — this must
        // not be confused with `stats.consistent`, which stays true here.
        let board = Board::create(3).unwrap();
        let mut net = ConstraintNetwork::from_board(&board);
        assert!(!find_singles(&mut net));
    }

    #[test]
    fn duplicate_values_in_a_peer_group_are_inconsistent() {
        // Construction's own forward-checking would normally prevent this,
        // but a caller could still force it via direct domain mutation.
        let board = Board::create(2).unwrap();
        let mut net = ConstraintNetwork::from_board(&board);
        net.assign_value(Position::new(0, 0), 1);
        net.assign_value(Position::new(0, 1), 1);
        let stats = enforce_consistency(&mut net);
        assert!(!stats.consistent);
    }
}
