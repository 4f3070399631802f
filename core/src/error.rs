use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Index out of bounds!")]
    IndexOutOfBounds,
    #[error("Enter a valid digit (0–9).")]
    InvalidDigit,
    #[error("Enter a valid pattern (e.g., 1,2,3)")]
    EmptyPattern,
    #[error("That is not the target pattern!")]
    NotTarget,
    #[error("Round has not started yet.")]
    NotStarted,
    #[error("Round over! Press reset to play again.")]
    RoundOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
