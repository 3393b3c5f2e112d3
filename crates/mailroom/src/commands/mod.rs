//! Command implementations for mailroom
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod create_player;
mod deliver;
mod inbox;
mod list_players;

pub use create_player::CreatePlayer;
pub use deliver::Deliver;
pub use inbox::ShowInbox;
pub use list_players::ListPlayers;
