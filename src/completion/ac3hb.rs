use crate::ac3::{enforce_consistency, propagate_from};
use crate::board::{Board, Position};
use crate::constraint_network::ConstraintNetwork;
use crate::forced_cells::{Classification, ForcedCellsRegistry};
use crate::heuristics::mrv;
use crate::permutation::shuffle;
use rand::Rng;
use std::time::Instant;

/// Safety rails distinguishing AC3HB from naive recursion: a recursion-depth
/// bound and a wall-clock budget, both checked at every recursive entry.
/// Exceeding either fails the branch gracefully rather than recursing (or
/// running) without bound — the documented, expected outcome for
/// intractable inputs such as `k=5`.
#[derive(Debug, Clone, Copy)]
pub struct Ac3hbLimits {
    pub max_depth: usize,
    pub timeout_ms: u64,
    /// Selects MRV cell ordering. When `false`, the engine falls back to
    /// the first non-singleton cell in row-major order — still correct,
    /// just without the pruning MRV buys.
    pub use_heuristics: bool,
}

impl Default for Ac3hbLimits {
    fn default() -> Ac3hbLimits {
        Ac3hbLimits {
            max_depth: 150,
            timeout_ms: 60_000,
            use_heuristics: true,
        }
    }
}

/// The first cell with domain size greater than one in row-major order —
/// the `use_heuristics: false` fallback for [`crate::heuristics::mrv`].
fn first_undetermined(net: &ConstraintNetwork) -> Option<Position> {
    for row in 0..net.n() {
        for col in 0..net.n() {
            let pos = Position::new(row, col);
            if net.domain_size(pos) > 1 {
                return Some(pos);
            }
        }
    }
    None
}

/// Why a completion attempt ended, distinguishing the three ways AC3HB can
/// fail to reach it from the single `Inconsistent` bucket `revise`/`propagate`
/// already report: the wall-clock budget ran out, the recursion depth bound
/// was hit, or every branch at some node was genuinely tried and exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success,
    TimedOut,
    DepthExceeded,
    Inconsistent,
}

/// AC-3 + MRV + backtracking. Builds a [`ConstraintNetwork`] from `board`,
/// enforces initial consistency, then recursively assigns MRV-selected
/// cells, registering how each cell got its value in `registry` as it goes.
/// On success, every singleton domain is written back to `board`; on
/// failure `board` is left untouched.
pub fn complete_ac3hb(
    board: &mut Board,
    rng: &mut impl Rng,
    registry: &mut ForcedCellsRegistry,
    limits: Ac3hbLimits,
) -> bool {
    complete_ac3hb_detailed(board, rng, registry, limits) == CompletionOutcome::Success
}

/// As [`complete_ac3hb`], but reports which of [`CompletionOutcome`]'s
/// failure modes applies instead of collapsing them all to `false`.
pub fn complete_ac3hb_detailed(
    board: &mut Board,
    rng: &mut impl Rng,
    registry: &mut ForcedCellsRegistry,
    limits: Ac3hbLimits,
) -> CompletionOutcome {
    let clue = |pos: Position, b: &Board| b.get_cell(pos).unwrap_or(0) != 0;
    let clues: Vec<bool> = (0..board.board_size())
        .flat_map(|r| (0..board.board_size()).map(move |c| Position::new(r, c)))
        .map(|pos| clue(pos, board))
        .collect();

    let mut net = ConstraintNetwork::from_board(board);
    let stats = enforce_consistency(&mut net);
    if !stats.consistent {
        return CompletionOutcome::Inconsistent;
    }

    let start = Instant::now();
    let outcome = solve(&mut net, registry, rng, 0, start, limits, &clues);
    if outcome == CompletionOutcome::Success {
        net.write_singletons_to(board);
    }
    outcome
}

fn solve(
    net: &mut ConstraintNetwork,
    registry: &mut ForcedCellsRegistry,
    rng: &mut impl Rng,
    depth: usize,
    start: Instant,
    limits: Ac3hbLimits,
    clues: &[bool],
) -> CompletionOutcome {
    if start.elapsed().as_millis() as u64 > limits.timeout_ms {
        return CompletionOutcome::TimedOut;
    }
    if depth > limits.max_depth {
        return CompletionOutcome::DepthExceeded;
    }

    register_naked_singles(net, registry, depth, clues);

    if net.all_singletons() {
        return CompletionOutcome::Success;
    }
    let selection = if limits.use_heuristics {
        mrv(net)
    } else {
        first_undetermined(net)
    };
    let pos = match selection {
        Some(pos) => pos,
        None => return CompletionOutcome::Inconsistent,
    };

    let mut values: Vec<u8> = net.get_domain(pos).values().collect();
    shuffle(&mut values, rng);

    for v in values {
        let net_snapshot = net.clone();
        let registry_snapshot = registry.clone();

        net.assign_value(pos, v);
        if !clues[pos.row * net.n() + pos.col] {
            registry.register(pos, v, Classification::Backtracked, depth);
        }

        let stats = propagate_from(net, pos);
        if stats.consistent {
            classify_side_effects(net, &net_snapshot, registry, pos, depth, clues);
            // Timeout/depth-exceeded abort the whole search immediately;
            // only a genuinely exhausted branch (`Inconsistent`) falls
            // through to try this node's next candidate value.
            match solve(net, registry, rng, depth + 1, start, limits, clues) {
                CompletionOutcome::Success => return CompletionOutcome::Success,
                outcome @ (CompletionOutcome::TimedOut | CompletionOutcome::DepthExceeded) => return outcome,
                CompletionOutcome::Inconsistent => {}
            }
        }

        *net = net_snapshot;
        *registry = registry_snapshot;
    }
    CompletionOutcome::Inconsistent
}

/// Registers every singleton domain not already in the registry as
/// `NakedSingle` — a cell whose value was forced purely by an earlier
/// assignment's propagation, with no branching involved. Skips the board's
/// original clues, which aren't forced cells at all.
fn register_naked_singles(
    net: &ConstraintNetwork,
    registry: &mut ForcedCellsRegistry,
    depth: usize,
    clues: &[bool],
) {
    let n = net.n();
    for row in 0..n {
        for col in 0..n {
            let pos = Position::new(row, col);
            if clues[row * n + col] || registry.is_registered(pos) {
                continue;
            }
            if let Some(v) = net.get_domain(pos).singleton_value() {
                registry.register(pos, v, Classification::NakedSingle, depth);
            }
        }
    }
}

/// After assigning `pos`, classifies every other cell whose domain just
/// collapsed to a singleton as a side effect: a direct peer of `pos`
/// becoming singleton is a `HiddenSingle` (the value was the last open spot
/// in some row/column/block); anything further away is `Propagated`.
fn classify_side_effects(
    net: &ConstraintNetwork,
    before: &ConstraintNetwork,
    registry: &mut ForcedCellsRegistry,
    pos: Position,
    depth: usize,
    clues: &[bool],
) {
    let n = net.n();
    let peers = net.peers(pos).to_vec();
    for row in 0..n {
        for col in 0..n {
            let candidate = Position::new(row, col);
            if candidate == pos || clues[row * n + col] || registry.is_registered(candidate) {
                continue;
            }
            if before.domain_size(candidate) > 1 {
                if let Some(v) = net.get_domain(candidate).singleton_value() {
                    let classification = if peers.contains(&candidate) {
                        Classification::HiddenSingle
                    } else {
                        Classification::Propagated
                    };
                    registry.register(candidate, v, classification, depth);
                }
            }
        }
    }
}
