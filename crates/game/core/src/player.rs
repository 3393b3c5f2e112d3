//! Player record as seen by the mail subsystem.

use crate::config::GameConfig;
use crate::inbox::Inbox;

/// Connection status of a player.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerStatus {
    /// Connected and driven by the game loop.
    Online,
    /// Not connected; changes must be written back to storage.
    #[default]
    Offline,
}

/// A player record.
///
/// Records are created blank and then populated, either by the game server
/// when a player logs in or by a repository loading it from storage.
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub status: PlayerStatus,
    pub inbox: Inbox,
}

impl Player {
    /// Creates an offline player with an empty inbox.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, &GameConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            status: PlayerStatus::Offline,
            inbox: Inbox::from_config(config),
        }
    }

    /// Lookup key for this player, see [`name_key`].
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    pub fn is_offline(&self) -> bool {
        self.status == PlayerStatus::Offline
    }

    pub fn is_online(&self) -> bool {
        self.status == PlayerStatus::Online
    }
}

/// Normalizes a player name for lookups. Names are case-insensitive.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns true if `name` can be stored and looked up.
///
/// Accepts 1..=[`GameConfig::MAX_PLAYER_NAME_LEN`] characters made of ASCII
/// letters, digits, spaces, `-`, `_` and `'`, with no leading or trailing space.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= GameConfig::MAX_PLAYER_NAME_LEN
        && name.trim() == name
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '\''))
}
