//! In-memory PlayerRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::Player;

use crate::repository::{
    PlayerRepository, RepositoryError, Result, decode_player, encode_player, storage_key,
};

/// In-memory implementation of PlayerRepository.
///
/// Records are kept bincode-encoded, so a loaded player is always a fresh
/// copy that shares nothing with the stored one.
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryPlayerRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Create a repository pre-populated with `players`.
    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Result<Self> {
        let repo = Self::new();
        for player in players {
            repo.save(&player)?;
        }
        Ok(repo)
    }
}

impl Default for InMemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRepository for InMemoryPlayerRepo {
    fn load_by_name(&self, name: &str, record: &mut Player) -> Result<bool> {
        let Ok(key) = storage_key(name) else {
            return Ok(false);
        };
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        match players.get(&key) {
            Some(bytes) => {
                *record = decode_player(bytes)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn save(&self, player: &Player) -> Result<()> {
        let key = storage_key(&player.name)?;
        let bytes = encode_player(player)?;
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(key, bytes);
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        let Ok(key) = storage_key(name) else {
            return false;
        };
        self.players
            .read()
            .map(|players| players.contains_key(&key))
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let key = storage_key(name)?;
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.remove(&key);
        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut names: Vec<String> = players.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }
}
