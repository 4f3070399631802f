use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait PatternGenerator {
    fn generate(&mut self, len: usize) -> SecretPattern;
}

/// Target digits the player is asked to build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretPattern {
    digits: SmallVec<[Digit; 4]>,
}

impl SecretPattern {
    pub fn new(digits: &[Digit]) -> Result<Self> {
        if digits.iter().any(|&digit| digit > MAX_DIGIT) {
            return Err(GameError::InvalidDigit);
        }
        Ok(Self {
            digits: digits.into(),
        })
    }

    /// All-zero placeholder used before the first round starts.
    pub(crate) fn blank(len: usize) -> Self {
        Self {
            digits: core::iter::repeat_n(0, len).collect(),
        }
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Formats as `1, 2, 3`.
impl fmt::Display for SecretPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
