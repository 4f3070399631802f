use core::fmt;

use crate::*;

/// Status text produced by every operation and timer tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    FindPattern(SecretPattern),
    FindHidden,
    Inserted { value: Digit, index: usize },
    Deleted { index: usize },
    Found,
    NotFound,
    Reset,
    Time(Seconds),
    Expired,
    Rejected(GameError),
}

impl Feedback {
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<GameError> for Feedback {
    fn from(err: GameError) -> Self {
        Self::Rejected(err)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Feedback::*;
        match self {
            FindPattern(secret) => write!(f, "Find this pattern: {secret}"),
            FindHidden => f.write_str("Find the hidden pattern!"),
            Inserted { value, index } => write!(f, "Inserted {value} at index {index}!"),
            Deleted { index } => write!(f, "Deleted element at index {index}."),
            Found => f.write_str("Pattern found! Level Complete!"),
            NotFound => f.write_str("Pattern not found!"),
            Reset => f.write_str("Game reset! New pattern generated."),
            Time(secs) => write!(f, "Time: {secs}s"),
            Expired => f.write_str("Time's up! Mission failed."),
            Rejected(err) => write!(f, "{err}"),
        }
    }
}
