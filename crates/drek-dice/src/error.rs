//! Error types for dice pools and success tests.

/// Errors that can occur while rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A pool size was not a positive integer.
    #[error("invalid size of dice pool: {0}")]
    InvalidPoolSize(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
