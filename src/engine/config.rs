//! Tunable session parameters set by `START` and `INFO`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::MAX_BOARD_SIZE;

/// Memory ceiling used when none (or zero) is configured: 350 MiB.
pub const DEFAULT_MAX_MEMORY: u64 = 350 * 1024 * 1024;

/// Default search depth limit in plies.
pub const DEFAULT_MAX_DEPTH: u32 = 28;

/// Session configuration.
///
/// Times are in milliseconds. A zero time or node limit means "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    timeout_turn: u64,
    timeout_match: u64,
    time_left: u64,
    time_inc: u64,
    max_memory: u64,
    max_depth: u32,
    max_nodes: u64,
    /// 0: five or more win, 1: exactly five, 4: renju.
    rule: i32,
    /// 0: human, 1: AI opponent, 2: tournament, 3: network tournament.
    game_type: i32,
    continuous: i32,
    width: u32,
    height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timeout_turn: 0,
            timeout_match: 0,
            time_left: 0,
            time_inc: 0,
            max_memory: DEFAULT_MAX_MEMORY,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: 0,
            rule: 0,
            game_type: 0,
            continuous: 0,
            width: MAX_BOARD_SIZE,
            height: MAX_BOARD_SIZE,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timeout_turn(&mut self, ms: u64) -> &mut Self {
        self.timeout_turn = ms;
        self
    }

    pub fn set_timeout_match(&mut self, ms: u64) -> &mut Self {
        self.timeout_match = ms;
        self
    }

    pub fn set_time_left(&mut self, ms: u64) -> &mut Self {
        self.time_left = ms;
        self
    }

    pub fn set_time_inc(&mut self, ms: u64) -> &mut Self {
        self.time_inc = ms;
        self
    }

    /// Zero restores [`DEFAULT_MAX_MEMORY`].
    pub fn set_max_memory(&mut self, bytes: u64) -> &mut Self {
        self.max_memory = if bytes == 0 {
            DEFAULT_MAX_MEMORY
        } else {
            bytes
        };
        self
    }

    pub fn set_max_depth(&mut self, plies: u32) -> &mut Self {
        self.max_depth = plies;
        self
    }

    /// Zero removes the node limit.
    pub fn set_max_nodes(&mut self, nodes: u64) -> &mut Self {
        self.max_nodes = nodes;
        self
    }

    pub fn set_rule(&mut self, rule: i32) -> &mut Self {
        self.rule = rule;
        self
    }

    pub fn set_game_type(&mut self, game_type: i32) -> &mut Self {
        self.game_type = game_type;
        self
    }

    pub fn set_continuous(&mut self, continuous: i32) -> &mut Self {
        self.continuous = continuous;
        self
    }

    pub fn set_width(&mut self, width: u32) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_height(&mut self, height: u32) -> &mut Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn timeout_turn(&self) -> u64 {
        self.timeout_turn
    }

    #[must_use]
    pub fn timeout_match(&self) -> u64 {
        self.timeout_match
    }

    #[must_use]
    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    #[must_use]
    pub fn time_inc(&self) -> u64 {
        self.time_inc
    }

    /// Memory ceiling in bytes, never zero.
    #[must_use]
    pub fn max_memory(&self) -> u64 {
        self.max_memory
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[must_use]
    pub fn max_nodes(&self) -> u64 {
        self.max_nodes
    }

    #[must_use]
    pub fn rule(&self) -> i32 {
        self.rule
    }

    #[must_use]
    pub fn game_type(&self) -> i32 {
        self.game_type
    }

    #[must_use]
    pub fn continuous(&self) -> i32 {
        self.continuous
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}
