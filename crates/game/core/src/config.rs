/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of items an inbox accepts before insertions without
    /// [`InsertFlags::NO_LIMIT`](crate::InsertFlags::NO_LIMIT) are rejected.
    pub inbox_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Longest player name accepted by the directory and repositories.
    pub const MAX_PLAYER_NAME_LEN: usize = 30;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INBOX_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self {
            inbox_capacity: Self::DEFAULT_INBOX_CAPACITY,
        }
    }

    pub fn with_inbox_capacity(inbox_capacity: usize) -> Self {
        Self { inbox_capacity }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
