//! Repository contract for loading and saving player records.

use game_core::Player;

use super::error::Result;

/// Repository for player persistence.
///
/// Players are keyed by [`game_core::name_key`], so lookups are
/// case-insensitive.
pub trait PlayerRepository: Send + Sync {
    /// Populate `record` with the stored player named `name`.
    ///
    /// Returns `Ok(false)` if no such player is stored. On any non-`Ok(true)`
    /// return the record may be partially written; callers must treat it as
    /// garbage and only drop it.
    fn load_by_name(&self, name: &str, record: &mut Player) -> Result<bool>;

    /// Write the full player record, replacing any stored copy.
    fn save(&self, player: &Player) -> Result<()>;

    /// Check if a player is stored under `name`.
    fn exists(&self, name: &str) -> bool;

    /// Delete a stored player. Deleting a missing player is not an error.
    fn delete(&self, name: &str) -> Result<()>;

    /// List the keys of all stored players, sorted.
    fn list_names(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
