//! Item creation.
//!
//! Static item definitions come from the content catalog; the factory turns a
//! kind id into a fresh, uniquely numbered [`Item`].

mod catalog;

pub use catalog::CatalogItemFactory;

use game_core::{Item, ItemId};

/// Creates item instances from kind ids.
pub trait ItemFactory: Send + Sync {
    /// Create one item of kind `id`.
    ///
    /// `None` signals an unknown or unavailable item kind. The returned item
    /// is owned by the caller.
    fn create(&self, id: ItemId) -> Option<Item>;
}
