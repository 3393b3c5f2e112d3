//! Error types raised by repository implementations.

use game_core::{ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("player repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid player name: {0:?}")]
    InvalidName(String),
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Internal,
            Self::Io(_) => ErrorSeverity::Recoverable,
            Self::Serialization(_) => ErrorSeverity::Internal,
            Self::InvalidName(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPO_LOCK_POISONED",
            Self::Io(_) => "REPO_IO",
            Self::Serialization(_) => "REPO_SERIALIZATION",
            Self::InvalidName(_) => "REPO_INVALID_NAME",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
