use thiserror::Error;

/// Faults the engine cannot recover from on its own.
#[derive(Debug, Error)]
pub enum Error {
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input stream closed")]
    ConsoleClosed,
    #[error("target score {0} is outside the range 1 to 10")]
    TargetScore(u32),
}

/// Rejected player input. The message is shown to the player as-is
/// before asking again.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum InputError {
    #[error("Invalid entry. Please enter a number from 1 to 5.")]
    NotANumber,
    #[error("Invalid option: {0}. Valid options are 1 to 5.")]
    OutOfRange(i64),
}
