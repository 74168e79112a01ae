//! Per-turn search limits derived from the session [`Config`].
//!
//! Gomocup managers announce either a fixed time per turn or a match
//! clock (`timeout_match` / `time_left`) with an optional increment.
//! [`TimeControl`] captures which one applies and [`SearchLimits`] turns
//! it into a budget for the move selector.

use std::time::{Duration, Instant};

use super::Config;

/// Expected number of own moves still to play when spreading the match clock.
pub const MOVES_TO_GO_ESTIMATE: u64 = 25;

/// Time kept back for protocol round trips.
pub const MOVE_OVERHEAD_MS: u64 = 30;

/// The turn budget never drops below this.
pub const MIN_TURN_TIME_MS: u64 = 10;

/// Time control in force for the next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeControl {
    /// No time information from the manager.
    #[default]
    Infinite,
    /// Fixed time per move.
    MoveTime { time_ms: u64 },
    /// Match clock with remaining time and increment.
    Incremental { time_left_ms: u64, inc_ms: u64 },
}

impl TimeControl {
    /// Pick the time control announced through `INFO`.
    ///
    /// `timeout_turn` wins. Without it the match clock is used, falling back
    /// to `timeout_match` before the first `time_left` arrives.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        if config.timeout_turn() > 0 {
            return TimeControl::MoveTime {
                time_ms: config.timeout_turn(),
            };
        }
        let time_left_ms = if config.time_left() > 0 {
            config.time_left()
        } else {
            config.timeout_match()
        };
        if time_left_ms > 0 {
            TimeControl::Incremental {
                time_left_ms,
                inc_ms: config.time_inc(),
            }
        } else {
            TimeControl::Infinite
        }
    }

    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        matches!(self, TimeControl::Infinite)
    }

    /// Milliseconds to spend on this turn, or `None` when unlimited.
    #[must_use]
    pub fn turn_budget_ms(&self) -> Option<u64> {
        let raw = match *self {
            TimeControl::Infinite => return None,
            TimeControl::MoveTime { time_ms } => time_ms,
            TimeControl::Incremental {
                time_left_ms,
                inc_ms,
            } => (time_left_ms / MOVES_TO_GO_ESTIMATE + inc_ms).min(time_left_ms),
        };
        Some(raw.saturating_sub(MOVE_OVERHEAD_MS).max(MIN_TURN_TIME_MS))
    }
}

/// Limits handed to a [`MoveSelector`](super::MoveSelector) for one turn.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    start: Instant,
    /// Turn budget, `None` when unlimited.
    pub time: Option<Duration>,
    pub max_depth: u32,
    /// Node budget, `None` when unlimited.
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    /// Limits for a turn starting now.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let control = TimeControl::from_config(config);
        SearchLimits {
            start: Instant::now(),
            time: control.turn_budget_ms().map(Duration::from_millis),
            max_depth: config.max_depth(),
            max_nodes: (config.max_nodes() > 0).then_some(config.max_nodes()),
        }
    }

    #[must_use]
    pub fn unlimited() -> Self {
        SearchLimits {
            start: Instant::now(),
            time: None,
            max_depth: u32::MAX,
            max_nodes: None,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.time.map(|t| self.start + t)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns true once the turn budget is spent.
    #[must_use]
    pub fn is_time_up(&self) -> bool {
        self.deadline().is_some_and(|d| Instant::now() >= d)
    }
}
