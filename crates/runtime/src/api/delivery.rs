//! Results of a successful delivery.

use game_core::{Item, ItemId, ItemSerial};

/// Who owned the recipient record during a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Residency {
    /// Resident in the directory; the directory keeps ownership.
    Resident,
    /// Loaded from storage for this delivery and released afterwards.
    Loaded,
}

/// Receipt for an item placed in an inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Recipient name as stored in the record.
    pub recipient: String,
    pub item_id: ItemId,
    pub serial: ItemSerial,
    /// Inbox index the item landed at.
    pub index: usize,
    pub residency: Residency,
    /// Whether the record was written to storage afterwards.
    pub persisted: bool,
}

/// Read-only copy of one inbox entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxEntry {
    pub item_id: ItemId,
    pub serial: ItemSerial,
    pub name: String,
    pub count: u16,
}

impl From<&Item> for InboxEntry {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id,
            serial: item.serial,
            name: item.name.clone(),
            count: item.count,
        }
    }
}
