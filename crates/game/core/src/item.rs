//! Item types.
//!
//! - [`ItemId`]: kind identifier shared by every item of one definition
//! - [`ItemSerial`]: unique identity of a single created item
//! - [`ItemDefinition`]: static catalog entry an item is created from
//! - [`Item`]: a concrete item instance, owned by whatever container holds it

use core::fmt;

/// Item kind identifier (a catalog key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u16);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Unique identity of one created item instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSerial(pub u64);

/// Static item definition from the item catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    /// Largest count a single created item may carry. Always at least 1.
    pub max_count: u16,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, max_count: u16) -> Self {
        Self {
            id,
            name: name.into(),
            max_count: max_count.max(1),
        }
    }

    pub fn is_stackable(&self) -> bool {
        self.max_count > 1
    }
}

/// A concrete item instance.
///
/// Items are move-only: whichever container holds the value owns it, and
/// dropping the container drops the item.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub serial: ItemSerial,
    pub name: String,
    pub count: u16,
}

impl Item {
    /// Creates a single-count item from a definition.
    pub fn from_definition(definition: &ItemDefinition, serial: ItemSerial) -> Self {
        Self {
            id: definition.id,
            serial,
            name: definition.name.clone(),
            count: 1,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{}x {} ({})", self.count, self.name, self.id)
        } else {
            write!(f, "{} ({})", self.name, self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_clamps_max_count() {
        let def = ItemDefinition::new(ItemId(3), "Scroll", 0);
        assert_eq!(def.max_count, 1);
        assert!(!def.is_stackable());
    }

    #[test]
    fn test_item_from_definition_is_single() {
        let def = ItemDefinition::new(ItemId(7), "Gold Coin", 100);
        let item = Item::from_definition(&def, ItemSerial(9));
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.serial, ItemSerial(9));
        assert_eq!(item.count, 1);
        assert_eq!(item.to_string(), "Gold Coin (item#7)");
    }
}
