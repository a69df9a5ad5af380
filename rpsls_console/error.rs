use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpslsError {
    #[error(transparent)]
    Core(#[from] rpsls_core::Error),
    #[error("failed to start logging: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("failed to install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}
