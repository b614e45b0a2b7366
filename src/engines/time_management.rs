//! Depth and wall-clock budgeting for the minimax engine.
//!
//! Difficulty is a single integer: the search depth. The time budget is
//! derived from it by a fixed step function.

use std::time::{Duration, Instant};

pub const MIN_DEPTH: u8 = 2;
pub const MAX_DEPTH: u8 = 8;
pub const DEFAULT_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub time_limit: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_limit: time_limit_for_depth(DEFAULT_DEPTH),
        }
    }
}

impl SearchConfig {
    /// Clamp `requested` to `MIN_DEPTH..=MAX_DEPTH` and derive the budget.
    pub fn for_difficulty(requested: i64) -> Self {
        let depth = requested.clamp(i64::from(MIN_DEPTH), i64::from(MAX_DEPTH)) as u8;
        Self {
            depth,
            time_limit: time_limit_for_depth(depth),
        }
    }

    /// Fixed depth with a budget that never runs out in practice.
    pub fn unbounded(depth: u8) -> Self {
        Self {
            depth,
            time_limit: Duration::from_secs(60 * 60 * 24),
        }
    }
}

/// 5 s below depth 6, 8 s for 6 and 7, 15 s from 8 up.
pub fn time_limit_for_depth(depth: u8) -> Duration {
    let secs = match depth {
        8.. => 15,
        6..=7 => 8,
        _ => 5,
    };
    Duration::from_secs(secs)
}

/// Wall-clock budget of one top-level search.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    started: Instant,
    limit: Duration,
}

impl TimeBudget {
    pub fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.elapsed() > self.limit
    }
}
