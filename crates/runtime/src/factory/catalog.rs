//! [`ItemFactory`] backed by an in-memory item catalog.
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use game_core::{Item, ItemDefinition, ItemId, ItemSerial};

use super::ItemFactory;

/// ItemFactory implementation with static item definitions.
pub struct CatalogItemFactory {
    definitions: HashMap<ItemId, ItemDefinition>,
    next_serial: AtomicU64,
}

impl CatalogItemFactory {
    pub fn new() -> Self {
        Self::with_next_serial(1)
    }

    /// Start serial numbering at `next_serial`.
    ///
    /// Use a value above every serial already persisted, e.g. a timestamp,
    /// so items created by different processes never collide.
    pub fn with_next_serial(next_serial: u64) -> Self {
        Self {
            definitions: HashMap::new(),
            next_serial: AtomicU64::new(next_serial),
        }
    }

    /// Build a factory from catalog definitions.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut factory = Self::new();
        for def in definitions {
            factory.add_definition(def);
        }
        factory
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id, def);
    }

    pub fn definition(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(&id)
    }

    /// All definitions sorted by id.
    pub fn definitions(&self) -> Vec<&ItemDefinition> {
        let mut defs: Vec<_> = self.definitions.values().collect();
        defs.sort_by_key(|def| def.id);
        defs
    }
}

impl Default for CatalogItemFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemFactory for CatalogItemFactory {
    fn create(&self, id: ItemId) -> Option<Item> {
        let Some(def) = self.definitions.get(&id) else {
            tracing::debug!("No item definition for {}", id);
            return None;
        };
        let serial = ItemSerial(self.next_serial.fetch_add(1, Ordering::Relaxed));
        Some(Item::from_definition(def, serial))
    }
}
