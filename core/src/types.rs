use serde::{Deserialize, Serialize};

/// A single decimal digit, always in `0..=MAX_DIGIT`.
pub type Digit = u8;

/// Whole seconds on the round timer.
pub type Seconds = u32;

pub const MAX_DIGIT: Digit = 9;

pub const DEFAULT_SLOTS: usize = 8;
pub const DEFAULT_PATTERN_LEN: usize = 3;
pub const DEFAULT_ROUND_SECS: Seconds = 60;

pub const MAX_SLOTS: usize = 64;
pub const MAX_ROUND_SECS: Seconds = 3600;

/// Bounds of a matched run of slots, `start..start + len`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchWindow {
    pub start: usize,
    pub len: usize,
}

impl MatchWindow {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub const fn end(self) -> usize {
        self.start + self.len
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}
