//! In-memory player directory backed by a map of shared handles.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use game_core::{Player, PlayerStatus, name_key};

use super::{PlayerDirectory, PlayerHandle};
use crate::repository::{PlayerRepository, RepositoryError, Result};

/// Directory of logged-in players.
pub struct InMemoryPlayerDirectory {
    players: RwLock<HashMap<String, PlayerHandle>>,
}

impl InMemoryPlayerDirectory {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Make `player` resident and mark it online.
    ///
    /// A player already resident under the same name is replaced; the old
    /// handle stays valid for whoever still holds it.
    pub fn login(&self, mut player: Player) -> Result<PlayerHandle> {
        player.status = PlayerStatus::Online;
        let key = player.key();
        let handle = Arc::new(RwLock::new(player));

        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if players.insert(key.clone(), Arc::clone(&handle)).is_some() {
            tracing::warn!("Player '{}' was already resident; replaced", key);
        }

        tracing::debug!("Player '{}' logged in", key);
        Ok(handle)
    }

    /// Remove a resident player, mark it offline and return its handle.
    pub fn logout(&self, name: &str) -> Result<Option<PlayerHandle>> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let Some(handle) = players.remove(&name_key(name)) else {
            return Ok(None);
        };
        drop(players);

        handle
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .status = PlayerStatus::Offline;

        tracing::debug!("Player '{}' logged out", name_key(name));
        Ok(Some(handle))
    }

    /// Log a player out and write its record to `repository`.
    ///
    /// Returns `false` if the player was not resident.
    pub fn logout_and_save(&self, name: &str, repository: &dyn PlayerRepository) -> Result<bool> {
        let Some(handle) = self.logout(name)? else {
            return Ok(false);
        };
        let player = handle.read().map_err(|_| RepositoryError::LockPoisoned)?;
        repository.save(&player)?;
        Ok(true)
    }

    /// Keys of all resident players, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = match self.players.read() {
            Ok(players) => players.keys().cloned().collect(),
            Err(_) => {
                tracing::warn!("Player directory lock poisoned; listing no resident players");
                Vec::new()
            }
        };
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        match self.players.read() {
            Ok(players) => players.len(),
            Err(_) => {
                tracing::warn!("Player directory lock poisoned; counting no resident players");
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPlayerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerDirectory for InMemoryPlayerDirectory {
    fn find_loaded(&self, name: &str) -> Option<PlayerHandle> {
        match self.players.read() {
            Ok(players) => players.get(&name_key(name)).cloned(),
            Err(_) => {
                tracing::warn!("Player directory lock poisoned; treating '{}' as not resident", name);
                None
            }
        }
    }
}
