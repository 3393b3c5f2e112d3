//! Per-player inbox.
//!
//! The inbox is an insertion target for delivered items. It owns every item
//! it holds; a rejected insertion hands the item back inside the error.

use bitflags::bitflags;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemId};

/// Where an item should land in the inbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsertPosition {
    /// No preference; the inbox picks the slot.
    #[default]
    Anywhere,
    Front,
    Back,
    /// Exact index; must be `<= len`.
    At(usize),
}

bitflags! {
    /// Modifiers applied to a single insertion.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InsertFlags: u8 {
        /// Skip the capacity check.
        const NO_LIMIT = 1 << 0;
    }
}

/// Errors raised by [`Inbox::insert`]. Both variants return the item.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InboxError {
    #[error("inbox is full (capacity: {capacity}), rejected {item}")]
    Full { capacity: usize, item: Box<Item> },

    #[error("insert index {index} out of range (len: {len}), rejected {item}")]
    InvalidIndex {
        index: usize,
        len: usize,
        item: Box<Item>,
    },
}

impl InboxError {
    /// Recovers ownership of the rejected item.
    pub fn into_item(self) -> Item {
        match self {
            Self::Full { item, .. } | Self::InvalidIndex { item, .. } => *item,
        }
    }
}

impl GameError for InboxError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } => ErrorSeverity::Recoverable,
            Self::InvalidIndex { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INBOX_FULL",
            Self::InvalidIndex { .. } => "INBOX_INVALID_INDEX",
        }
    }
}

/// Ordered container of delivered items.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inbox {
    items: Vec<Item>,
    capacity: usize,
}

impl Inbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.inbox_capacity)
    }

    /// Inserts an item and returns the index it landed at.
    ///
    /// Without [`InsertFlags::NO_LIMIT`] the insertion fails once `len`
    /// reaches `capacity`. Items never merge; each insertion adds one entry.
    pub fn insert(
        &mut self,
        item: Item,
        position: InsertPosition,
        flags: InsertFlags,
    ) -> Result<usize, InboxError> {
        let len = self.items.len();

        if !flags.contains(InsertFlags::NO_LIMIT) && len >= self.capacity {
            return Err(InboxError::Full {
                capacity: self.capacity,
                item: Box::new(item),
            });
        }

        let index = match position {
            InsertPosition::Front => 0,
            InsertPosition::Anywhere | InsertPosition::Back => len,
            InsertPosition::At(index) if index <= len => index,
            InsertPosition::At(index) => {
                return Err(InboxError::InvalidIndex {
                    index,
                    len,
                    item: Box::new(item),
                });
            }
        };

        self.items.insert(index, item);
        Ok(index)
    }

    /// Removes and returns the item at `index`.
    pub fn take(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items of the given kind.
    pub fn count_of(&self, id: ItemId) -> usize {
        self.items.iter().filter(|item| item.id == id).count()
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
