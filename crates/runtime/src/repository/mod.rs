//! Repository layer for persisted player records.
//!
//! Repositories handle data that outlives a login session: the player record
//! and everything in its inbox. Resident (logged-in) players are tracked by
//! the [`directory`](crate::directory) instead.

mod error;
mod traits;

pub mod file;
pub mod memory;

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepo;
pub use traits::PlayerRepository;

use game_core::Player;

/// Encode a player record with bincode.
pub(crate) fn encode_player(player: &Player) -> Result<Vec<u8>> {
    bincode::serialize(player).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Decode a player record with bincode.
pub(crate) fn decode_player(bytes: &[u8]) -> Result<Player> {
    bincode::deserialize(bytes).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Resolve the storage key for `name`, rejecting names that cannot be stored.
pub(crate) fn storage_key(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if !game_core::is_valid_name(trimmed) {
        return Err(RepositoryError::InvalidName(name.to_string()));
    }
    Ok(game_core::name_key(trimmed))
}
