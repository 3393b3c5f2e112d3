//! Create a stored player record with an empty inbox.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use game_core::{GameConfig, Player, is_valid_name};
use runtime::PlayerRepository;

use crate::context::MailContext;

/// Create an empty, offline player record
#[derive(Parser)]
pub struct CreatePlayer {
    /// Player name (case-insensitive, at most 30 characters)
    #[arg(value_name = "NAME")]
    name: String,

    /// Replace an existing record with the same name
    #[arg(short, long)]
    force: bool,
}

impl CreatePlayer {
    pub fn execute(self, ctx: &MailContext) -> Result<()> {
        if !is_valid_name(&self.name) {
            bail!(
                "Invalid player name '{}' (1 to {} characters)",
                self.name,
                GameConfig::MAX_PLAYER_NAME_LEN
            );
        }

        if ctx.repository.exists(&self.name) && !self.force {
            bail!("Player '{}' already exists (use --force to replace)", self.name);
        }

        let player = Player::with_config(self.name.as_str(), &ctx.game_config);
        ctx.repository.save(&player)?;

        println!(
            "{} Created player {}",
            style("✓").green().bold(),
            style(&player.name).cyan()
        );

        Ok(())
    }
}
