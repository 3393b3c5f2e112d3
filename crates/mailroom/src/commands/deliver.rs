//! Deliver one item to a player, online or offline.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use game_core::ItemId;
use runtime::DeliveryError;

use crate::context::MailContext;

/// Deliver one item to a player
#[derive(Parser)]
pub struct Deliver {
    /// Recipient player name
    #[arg(value_name = "NAME")]
    name: String,

    /// Catalog id of the item kind to create
    #[arg(value_name = "ITEM_ID")]
    item_id: u16,

    /// Number of items to deliver, one delivery each
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,
}

impl Deliver {
    pub fn execute(self, ctx: &MailContext) -> Result<()> {
        let item_id = ItemId(self.item_id);

        for _ in 0..self.count {
            match ctx.postmaster.add_item_to_recipient(&self.name, item_id) {
                Ok(delivery) => {
                    println!(
                        "{} {} -> {} (serial {}, slot {})",
                        style("✓").green().bold(),
                        delivery.item_id,
                        style(&delivery.recipient).cyan(),
                        delivery.serial.0,
                        delivery.index
                    );
                    if !delivery.persisted && delivery.residency == runtime::Residency::Loaded {
                        println!(
                            "{} Delivery was not saved; see the log for details",
                            style("!").yellow().bold()
                        );
                    }
                }
                Err(err @ DeliveryError::PlayerNotFound { .. }) => {
                    bail!("{} (create it with `mailroom create-player`)", err)
                }
                Err(err) => bail!(err),
            }
        }

        let snapshot = ctx.postmaster.metrics().snapshot();
        tracing::debug!("Delivery metrics: {:?}", snapshot);

        Ok(())
    }
}
