use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Digit;

/// Content of one position in the slot row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Empty,
    Digit(Digit),
}

impl Slot {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Digit(digit) => Some(digit),
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Option<Digit>> for Slot {
    fn from(value: Option<Digit>) -> Self {
        value.map_or(Self::Empty, Self::Digit)
    }
}

/// Empty slots display as nothing at all.
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Digit(digit) => write!(f, "{digit}"),
        }
    }
}
