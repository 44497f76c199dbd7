use crate::ac3::{enforce_consistency, PropagationStats};
use crate::board::{Board, Position};
use crate::completion::{complete_ac3hb_detailed, complete_backtracking, Ac3hbLimits, CompletionOutcome};
use crate::constraint_network::ConstraintNetwork;
use crate::difficulty::{difficulty_to_string, evaluate_difficulty, Difficulty};
use crate::elimination::{phase1_with_events, phase2_with_events, phase3_with_events};
use crate::error::GenerationError;
use crate::events::{emit, EventData, EventKind, EventSink};
use crate::forced_cells::ForcedCellsRegistry;
use crate::permutation::permutation;
use crate::rng;

/// Selects which heuristic the completer should use. A single variant
/// today; the field exists so callers can select among future strategies
/// without an API break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicStrategy {
    #[default]
    Mrv,
}

/// Read-only (during a run) knobs for [`generate`]: one `///` line per
/// field, defaults documented inline.
pub struct GenerationConfig<'a> {
    /// Observability sink; disabled (a no-op) when `None`.
    pub callback: Option<EventSink<'a>>,
    /// Number of attempts before giving up, in addition to the first;
    /// `0` means a single attempt. Default: `1`.
    pub max_attempts: usize,
    /// Selects the AC3HB completer over the classic backtracker. Default:
    /// `true`.
    pub use_ac3: bool,
    /// Enables MRV cell ordering inside AC3HB. Default: `true`.
    pub use_heuristics: bool,
    /// Reserved for future heuristic strategies. Default: `Mrv`.
    pub heuristic_strategy: HeuristicStrategy,
    /// Overrides the Phase 3 protection policy instead of deriving it from
    /// `evaluate_difficulty` after Phase 2. Set by [`generate_with_difficulty`].
    /// Default: `None`.
    pub difficulty_override: Option<Difficulty>,
    /// Safety rails passed through to AC3HB. Default: `Ac3hbLimits::default()`.
    pub ac3hb_limits: Ac3hbLimits,
    /// Logs phase/round boundaries to stderr. Default: `false`.
    pub log_phases: bool,
    /// Logs AC-3 propagation statistics to stderr. Default: `false`.
    pub log_ac3: bool,
    /// Logs elapsed time per phase to stderr. Default: `false`.
    pub log_elapsed: bool,
}

impl<'a> Default for GenerationConfig<'a> {
    fn default() -> GenerationConfig<'a> {
        GenerationConfig {
            callback: None,
            max_attempts: 1,
            use_ac3: true,
            use_heuristics: true,
            heuristic_strategy: HeuristicStrategy::default(),
            difficulty_override: None,
            ac3hb_limits: Ac3hbLimits::default(),
            log_phases: false,
            log_ac3: false,
            log_elapsed: false,
        }
    }
}

/// Counters gathered over a `generate` call: per-phase removal counts plus
/// AC-3 and attempt bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationStats {
    pub attempts: usize,
    pub phase1_removed: usize,
    pub phase2_removed: usize,
    pub phase2_rounds: usize,
    pub phase3_removed: usize,
    pub ac3: PropagationStats,
}

/// Produces a full grid (diagonal prefill + completion), then runs the
/// three elimination phases, emitting lifecycle events throughout.
///
/// Returns `true` with `board` holding a puzzle of guaranteed-unique
/// solution, or `false` with `board` left in a well-defined state (either
/// unchanged, or emptied/diagonal-prefilled depending on where the final
/// attempt gave up). Seeds the process-scoped RNG on first use if the
/// caller hasn't already.
pub fn generate(board: &mut Board, config: &mut GenerationConfig, stats: &mut GenerationStats) -> bool {
    try_generate(board, config, stats).is_ok()
}

/// As [`generate`], but reports the reason for failure.
pub fn try_generate(
    board: &mut Board,
    config: &mut GenerationConfig,
    stats: &mut GenerationStats,
) -> Result<(), GenerationError> {
    *stats = GenerationStats::default();
    emit_event(config, EventKind::GenerationStart, board);

    for attempt in 0..=config.max_attempts {
        stats.attempts = attempt + 1;
        match try_one_attempt(board, config, stats) {
            Ok(()) => {
                emit_event(config, EventKind::GenerationComplete, board);
                return Ok(());
            }
            Err(_) if attempt < config.max_attempts => continue,
            Err(_) => {
                emit_event(config, EventKind::GenerationFailed, board);
                return Err(GenerationError::GenerationFailure);
            }
        }
    }
    unreachable!("loop always returns before exhausting its range")
}

/// As [`generate`], but sets the Phase 3 protection policy from
/// `difficulty` instead of whatever `evaluate_difficulty` would later infer.
pub fn generate_with_difficulty(
    board: &mut Board,
    difficulty: Difficulty,
    stats: &mut GenerationStats,
) -> bool {
    let mut config = GenerationConfig {
        difficulty_override: Some(difficulty),
        ..GenerationConfig::default()
    };
    generate(board, &mut config, stats)
}

fn try_one_attempt(
    board: &mut Board,
    config: &mut GenerationConfig,
    stats: &mut GenerationStats,
) -> Result<(), GenerationError> {
    board.init();
    let attempt_start = std::time::Instant::now();

    emit_event(config, EventKind::DiagonalFillStart, board);
    diagonal_prefill(board);
    emit_event(config, EventKind::DiagonalFillComplete, board);
    if config.log_phases {
        eprintln!("diagonal prefill complete: {} cells", board.clues());
    }
    if config.log_elapsed {
        eprintln!("diagonal prefill: {:?} elapsed", attempt_start.elapsed());
    }

    emit_event(config, EventKind::BacktrackStart, board);
    let mut registry = ForcedCellsRegistry::new();
    let completion = if config.use_ac3 {
        emit_event(config, EventKind::Ac3Start, board);
        stats.ac3 = enforce_consistency(&mut ConstraintNetwork::from_board(board));
        if config.log_ac3 {
            eprintln!(
                "ac3: {} revisions, {} values removed, consistent={}",
                stats.ac3.revisions, stats.ac3.values_removed, stats.ac3.consistent
            );
        }
        if !stats.ac3.consistent {
            emit_event(config, EventKind::Ac3DeadEnd, board);
            return Err(GenerationError::Inconsistent);
        }
        emit_event(config, EventKind::Ac3Complete, board);
        let mut limits = config.ac3hb_limits;
        limits.use_heuristics = config.use_heuristics;
        let mut rng = rng::lock();
        complete_ac3hb_detailed(board, &mut *rng, &mut registry, limits)
    } else {
        let mut rng = rng::lock();
        if complete_backtracking(board, &mut *rng) {
            CompletionOutcome::Success
        } else {
            CompletionOutcome::Inconsistent
        }
    };
    match completion {
        CompletionOutcome::Success => {}
        CompletionOutcome::TimedOut => return Err(GenerationError::TimedOut),
        CompletionOutcome::DepthExceeded => return Err(GenerationError::DepthExceeded),
        CompletionOutcome::Inconsistent => return Err(GenerationError::Inconsistent),
    }
    board.update_stats();
    emit_event(config, EventKind::BacktrackComplete, board);
    if config.log_elapsed {
        eprintln!("completion: {:?} elapsed", attempt_start.elapsed());
    }

    emit_event(config, EventKind::Phase1Start, board);
    {
        let mut rng = rng::lock();
        stats.phase1_removed = phase1_with_events(board, &mut *rng, &mut config.callback);
    }
    emit_event(config, EventKind::Phase1Complete, board);
    if config.log_phases {
        eprintln!("phase1 removed {} cells", stats.phase1_removed);
    }

    emit_event(config, EventKind::Phase2Start, board);
    {
        let mut rng = rng::lock();
        let phase2_stats = phase2_with_events(board, &mut *rng, &mut config.callback);
        stats.phase2_removed = phase2_stats.removed;
        stats.phase2_rounds = phase2_stats.rounds;
    }
    emit_event(config, EventKind::Phase2Complete, board);
    if config.log_phases {
        eprintln!(
            "phase2 removed {} cells over {} rounds",
            stats.phase2_removed, stats.phase2_rounds
        );
    }

    let difficulty = config.difficulty_override.unwrap_or_else(|| evaluate_difficulty(board));
    emit_event(config, EventKind::Phase3Start, board);
    {
        let mut rng = rng::lock();
        stats.phase3_removed = phase3_with_events(board, &mut *rng, &registry, difficulty, &mut config.callback);
    }
    emit_event(config, EventKind::Phase3Complete, board);
    if config.log_phases {
        eprintln!(
            "phase3 removed {} cells, targeting {}",
            stats.phase3_removed,
            difficulty_to_string(difficulty)
        );
    }
    if config.log_elapsed {
        eprintln!("attempt: {:?} elapsed total", attempt_start.elapsed());
    }

    board.update_stats();
    Ok(())
}

fn emit_event(config: &mut GenerationConfig, kind: EventKind, board: &Board) {
    emit(&mut config.callback, EventData::new(kind, board));
}

/// Fills the `k` blocks along the main diagonal of the block grid (index
/// `i * (k + 1)` for `i` in `0..k`) with independent random permutations of
/// `1..=n`. Those blocks share no row, column, or block with each other, so
/// every placement is trivially valid — this seed breaks enough symmetry to
/// speed up the completion engine that follows.
fn diagonal_prefill(board: &mut Board) {
    let k = board.subgrid_size();
    let n = board.board_size();
    let mut rng = rng::lock();
    let mut values = vec![0usize; n];
    for i in 0..k {
        permutation(&mut values, 1, &mut *rng);
        let sg = board.subgrid(i * (k + 1));
        for (cell_idx, pos) in sg.positions().enumerate() {
            board.set_cell(pos, values[cell_idx] as u8);
        }
    }
    board.update_stats();
}
