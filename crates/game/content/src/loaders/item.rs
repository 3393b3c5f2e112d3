//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog shipped with the crate, used when no catalog file is configured.
pub const BUILTIN_ITEMS_RON: &str = include_str!("../../data/items.ron");

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of ItemDefinitions.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load the catalog embedded in the crate.
    pub fn builtin() -> LoadResult<Vec<ItemDefinition>> {
        Self::parse(BUILTIN_ITEMS_RON)
    }

    /// Parse catalog RON text. Duplicate item ids are rejected.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for def in &catalog.items {
            if !seen.insert(def.id) {
                anyhow::bail!("Duplicate item id {} in catalog", def.id.0);
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ItemId;

    #[test]
    fn test_builtin_catalog_parses() {
        let items = ItemLoader::builtin().unwrap();
        assert!(items.iter().any(|d| d.id == ItemId(42)));
        assert!(items.iter().any(|d| d.id == ItemId(7)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let ron = r#"(items: [
            (id: ItemId(1), name: "A", max_count: 1),
            (id: ItemId(1), name: "B", max_count: 1),
        ])"#;
        let err = ItemLoader::parse(ron).unwrap_err();
        assert!(err.to_string().contains("Duplicate item id 1"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ItemLoader::load(Path::new("/nonexistent/items.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
