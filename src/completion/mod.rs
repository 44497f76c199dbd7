//! Two interchangeable engines for completing a partially filled [`Board`]
//! into a full Latin square: [`backtracking::complete_backtracking`] (plain
//! randomized backtracking) and [`ac3hb::complete_ac3hb`] (arc consistency +
//! MRV + backtracking, with a depth bound and a wall-clock timeout).
//!
//! [`Board`]: crate::board::Board

pub mod ac3hb;
pub mod backtracking;

pub use ac3hb::{complete_ac3hb, complete_ac3hb_detailed, Ac3hbLimits, CompletionOutcome};
pub use backtracking::complete_backtracking;
