//! List stored players.

use anyhow::Result;
use clap::Parser;
use console::style;

use runtime::PlayerRepository;

use crate::context::MailContext;

/// List stored players
#[derive(Parser)]
pub struct ListPlayers {}

impl ListPlayers {
    pub fn execute(self, ctx: &MailContext) -> Result<()> {
        let names = ctx.repository.list_names()?;

        if names.is_empty() {
            println!("{}", style("No stored players").dim());
            return Ok(());
        }

        println!(
            "{} in {}",
            style(format!("{} players", names.len())).bold(),
            ctx.repository.base_dir().display()
        );
        for name in names {
            println!("  {}", name);
        }

        Ok(())
    }
}
