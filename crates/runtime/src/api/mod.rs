//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on ownership and infrastructure.

pub mod delivery;
pub mod errors;

pub use delivery::{Delivery, InboxEntry, Residency};
pub use errors::{Collaborator, DeliveryError, Result, RuntimeError};
