//! Mail domain types shared by the runtime and tools.
//!
//! `game-core` defines the player record, its inbox and the items delivered
//! into it. It holds no I/O; lookup, persistence and item creation are
//! provided by the `runtime` crate.
pub mod config;
pub mod error;
pub mod inbox;
pub mod item;
pub mod player;

pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use inbox::{Inbox, InboxError, InsertFlags, InsertPosition};
pub use item::{Item, ItemDefinition, ItemId, ItemSerial};
pub use player::{Player, PlayerStatus, is_valid_name, name_key};
