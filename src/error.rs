use std::io;

use thiserror::Error;

/// An error returned while creating or driving a [`Console`](crate::Console).
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Only one instance of Console can exist at once!")]
    AlreadyInitialized,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    pub fn is_already_initialized(&self) -> bool {
        matches!(self, ConsoleError::AlreadyInitialized)
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
