//! Dedicated to record constant parameters that
//! influence the solver's design choice.

/// Strategy used by the command-line driver when neither the problem file
/// nor the command line names one.
pub const DEFAULT_STRATEGY: &str = "backtracking";

/// Logs backtracking progress every this many tentative assignments.
pub const SEARCH_PROGRESS_INTERVAL: u64 = 100_000;

/// Name of the crate's log target, raised to `Debug` by `--verbose`.
pub const LOG_TARGET: &str = "colorsolve";
