//! Generates playable Latin-square puzzles (generalized Sudoku) of
//! configurable order `k` with a guaranteed-unique completion.
//!
//! For `k` in `2..=5`, the board is `N x N` with `N = k*k`, tiled by `N`
//! non-overlapping `k x k` blocks; every row, column, and block must hold
//! each symbol `1..=N` exactly once.
//!
//! The core pipeline: build an empty [`Board`], run a [`ConstraintNetwork`]
//! + [`ac3`] + [`heuristics`]-driven [`completion`] engine to fill it,
//! then run the three [`elimination`] phases to remove clues down to a
//! minimal, uniqueness-preserving puzzle. [`generator::generate`] wires all
//! of that together; most callers only need it and [`difficulty`].
//!
//! Solving times will vary a lot by `k`: `k=2..3` complete in well under a
//! second, `k=4` takes noticeably longer, and `k=5` is allowed to time out
//! (see [`completion::Ac3hbLimits`]) — that's a documented, expected
//! outcome, not an error.

pub mod ac3;
pub mod board;
pub mod completion;
pub mod constraint_network;
pub mod difficulty;
pub mod domain;
pub mod elimination;
pub mod error;
pub mod events;
pub mod forced_cells;
pub mod generator;
pub mod heuristics;
pub mod permutation;
pub mod rng;
pub mod solution_counter;
pub mod validator;

pub use board::{Board, Position, SubGrid};
pub use constraint_network::ConstraintNetwork;
pub use difficulty::{difficulty_to_string, evaluate_difficulty, Difficulty};
pub use error::GenerationError;
pub use forced_cells::{Classification, ForcedCellsRegistry};
pub use generator::{generate, generate_with_difficulty, try_generate, GenerationConfig, GenerationStats};
