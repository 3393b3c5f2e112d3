//! Directory of resident (currently loaded) players.
//!
//! The directory owns the lifetime of every record it hands out. Callers get
//! a [`PlayerHandle`], a shared reference that keeps the record alive while
//! in use but never ends its life: dropping a handle only gives the
//! reference back.

mod memory;

pub use memory::InMemoryPlayerDirectory;

use std::sync::{Arc, RwLock};

use game_core::Player;

/// Shared reference to a resident player record.
pub type PlayerHandle = Arc<RwLock<Player>>;

/// Lookup of players resident in memory.
pub trait PlayerDirectory: Send + Sync {
    /// Find a resident player by name (case-insensitive).
    ///
    /// `None` means the player is not resident; it may still exist in storage.
    fn find_loaded(&self, name: &str) -> Option<PlayerHandle>;
}
