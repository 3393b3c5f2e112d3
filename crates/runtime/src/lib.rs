//! Runtime services for delivering items into player inboxes.
//!
//! This crate wires together the player directory, player repositories and
//! the item factory behind a single delivery API. Consumers build a
//! [`Postmaster`] and call [`Postmaster::add_item_to_recipient`].
//!
//! Modules are organized by responsibility:
//! - [`postmaster`] hosts the delivery service and its builder
//! - [`recipient`] expresses who owns the recipient record
//! - [`api`] exposes the result and error types clients interact with
//! - [`directory`], [`repository`] and [`factory`] provide the collaborators
//! - [`metrics`] counts allocations, releases, creations and saves
pub mod api;
pub mod directory;
pub mod factory;
pub mod metrics;
pub mod postmaster;
pub mod recipient;
pub mod repository;

pub use api::{
    Collaborator, Delivery, DeliveryError, InboxEntry, Residency, Result, RuntimeError,
};
pub use directory::{InMemoryPlayerDirectory, PlayerDirectory, PlayerHandle};
pub use factory::{CatalogItemFactory, ItemFactory};
pub use metrics::{DeliveryMetrics, MetricsSnapshot};
pub use postmaster::{Postmaster, PostmasterBuilder, RuntimeConfig};
pub use recipient::{OwnedPlayer, Recipient};
pub use repository::{
    FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository, RepositoryError,
};
