#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use clock::*;
pub use engine::*;
pub use error::*;
pub use feedback::*;
pub use generator::*;
pub use input::*;
pub use pattern::*;
pub use render::*;
pub use sink::*;
pub use slot::*;
pub use timer::*;
pub use types::*;

mod clock;
mod engine;
mod error;
mod feedback;
mod generator;
mod input;
mod pattern;
mod render;
mod sink;
mod slot;
mod timer;
mod types;

/// How a search decides whether the round is complete.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Any entered pattern found in the slots completes the round.
    AnyPattern,
    /// Only the secret pattern may be searched for, other patterns are rejected.
    SecretOnly,
}

impl Default for SearchMode {
    fn default() -> Self {
        Self::AnyPattern
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub slots: usize,
    pub pattern_len: usize,
    pub round_secs: Seconds,
    /// Show the secret pattern in the opening feedback.
    pub reveal_target: bool,
    pub search_mode: SearchMode,
}

impl GameConfig {
    pub const fn new_unchecked(slots: usize, pattern_len: usize, round_secs: Seconds) -> Self {
        Self {
            slots,
            pattern_len,
            round_secs,
            reveal_target: true,
            search_mode: SearchMode::AnyPattern,
        }
    }

    pub fn new(slots: usize, pattern_len: usize, round_secs: Seconds) -> Self {
        let clamped_slots = slots.clamp(1, MAX_SLOTS);
        let clamped_pattern_len = pattern_len.clamp(1, clamped_slots);
        let clamped_round_secs = round_secs.clamp(1, MAX_ROUND_SECS);
        let clamped = (clamped_slots, clamped_pattern_len, clamped_round_secs);
        if clamped != (slots, pattern_len, round_secs) {
            log::warn!(
                "Config clamped, requested {} slots / {} digits / {}s, using {} / {} / {}s",
                slots,
                pattern_len,
                round_secs,
                clamped_slots,
                clamped_pattern_len,
                clamped_round_secs
            );
        }
        Self::new_unchecked(clamped_slots, clamped_pattern_len, clamped_round_secs)
    }

    pub const fn with_reveal_target(mut self, reveal_target: bool) -> Self {
        self.reveal_target = reveal_target;
        self
    }

    pub const fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SLOTS, DEFAULT_PATTERN_LEN, DEFAULT_ROUND_SECS)
    }
}

/// Outcome of searching the slots for a pattern
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    NotFound,
    Found(MatchWindow),
}
