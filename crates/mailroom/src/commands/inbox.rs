//! Show the inbox of a player.

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::context::MailContext;

/// Show the inbox of a player
#[derive(Parser)]
pub struct ShowInbox {
    /// Player name
    #[arg(value_name = "NAME")]
    name: String,
}

impl ShowInbox {
    pub fn execute(self, ctx: &MailContext) -> Result<()> {
        let entries = ctx.postmaster.inbox(&self.name)?;

        println!(
            "{} {} ({} items)",
            style("Inbox of").bold(),
            style(&self.name).cyan(),
            entries.len()
        );

        for (index, entry) in entries.iter().enumerate() {
            println!(
                "  {:>4}  {:<24} {:>3}x  {}  serial {}",
                index, entry.name, entry.count, entry.item_id, entry.serial.0
            );
        }

        Ok(())
    }
}
