//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the directory, repositories and item factory so
//! clients can bubble them up with consistent context.
use std::fmt;

use game_core::{ErrorSeverity, GameError, InboxError, ItemId};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Why an item did not reach a recipient.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("player '{name}' is neither resident nor stored")]
    PlayerNotFound { name: String },

    #[error("item factory could not create {item_id}")]
    ItemCreationFailed { item_id: ItemId },

    #[error("inbox of '{name}' rejected the item")]
    InboxRejected {
        name: String,
        #[source]
        source: InboxError,
    },

    #[error("resident player record lock was poisoned")]
    RecordPoisoned,

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl GameError for DeliveryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PlayerNotFound { .. } | Self::ItemCreationFailed { .. } => {
                ErrorSeverity::Validation
            }
            Self::InboxRejected { source, .. } => source.severity(),
            Self::RecordPoisoned => ErrorSeverity::Internal,
            Self::Storage(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerNotFound { .. } => "PLAYER_NOT_FOUND",
            Self::ItemCreationFailed { .. } => "ITEM_CREATION_FAILED",
            Self::InboxRejected { .. } => "INBOX_REJECTED",
            Self::RecordPoisoned => "RECORD_POISONED",
            Self::Storage(_) => "STORAGE",
        }
    }
}

/// Errors raised while assembling a [`Postmaster`](crate::Postmaster).
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("postmaster is missing its {0}")]
    MissingCollaborator(Collaborator),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collaborator {
    Directory,
    Repository,
    ItemFactory,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Collaborator::Directory => "player directory",
            Collaborator::Repository => "player repository",
            Collaborator::ItemFactory => "item factory",
        };
        write!(f, "{}", label)
    }
}
