//! File-based PlayerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::Player;

use crate::repository::{
    PlayerRepository, RepositoryError, Result, decode_player, encode_player, storage_key,
};

/// File-based implementation of PlayerRepository.
///
/// # File Format
///
/// Each player is stored as `player_{key}.bin` in bincode format, where `key`
/// is the lowercased player name. Writes go to a temp file first and are
/// moved into place with a rename.
pub struct FilePlayerRepository {
    base_dir: PathBuf,
}

impl FilePlayerRepository {
    /// Create a new file-based player repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a player file.
    fn player_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("player_{}.bin", key))
    }
}

impl PlayerRepository for FilePlayerRepository {
    fn load_by_name(&self, name: &str, record: &mut Player) -> Result<bool> {
        let Ok(key) = storage_key(name) else {
            return Ok(false);
        };
        let path = self.player_path(&key);

        if !path.exists() {
            tracing::debug!("No stored player '{}' at {}", key, path.display());
            return Ok(false);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        *record = decode_player(&bytes)?;

        tracing::debug!("Loaded player '{}' from {}", key, path.display());

        Ok(true)
    }

    fn save(&self, player: &Player) -> Result<()> {
        let key = storage_key(&player.name)?;
        let path = self.player_path(&key);
        let temp_path = path.with_extension("bin.tmp");

        let bytes = encode_player(player)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved player '{}' to {}", key, path.display());

        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        storage_key(name)
            .map(|key| self.player_path(&key).exists())
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let key = storage_key(name)?;
        let path = self.player_path(&key);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted player '{}'", key);
        }

        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(key) = filename
                    .strip_prefix("player_")
                    .and_then(|s| s.strip_suffix(".bin"))
            {
                names.push(key.to_string());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
