//! Item delivery into player inboxes.
//!
//! [`Postmaster`] ties the three collaborators together: the directory of
//! resident players, the player repository and the item factory. Each
//! delivery resolves its recipient into a [`Recipient`], which decides by
//! type alone whether the record is released at the end.

use std::sync::Arc;

use game_core::{GameConfig, InsertFlags, InsertPosition, ItemId, PlayerStatus};

use crate::api::{Collaborator, Delivery, DeliveryError, InboxEntry, Result, RuntimeError};
use crate::directory::PlayerDirectory;
use crate::factory::ItemFactory;
use crate::metrics::DeliveryMetrics;
use crate::recipient::{OwnedPlayer, Recipient};
use crate::repository::PlayerRepository;

/// Runtime configuration for the postmaster.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
}

/// Delivers items into player inboxes.
///
/// Design: the postmaster owns no player records. Resident records belong to
/// the directory; records loaded from storage live only for the duration of
/// one call.
pub struct Postmaster {
    config: RuntimeConfig,
    directory: Arc<dyn PlayerDirectory>,
    repository: Arc<dyn PlayerRepository>,
    items: Arc<dyn ItemFactory>,
    metrics: Arc<DeliveryMetrics>,
}

impl Postmaster {
    /// Create a new postmaster builder
    pub fn builder() -> PostmasterBuilder {
        PostmasterBuilder::new()
    }

    pub fn metrics(&self) -> &Arc<DeliveryMetrics> {
        &self.metrics
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Deliver one item of kind `item_id` to the player named `recipient`.
    ///
    /// 1. A resident player is used in place. Otherwise a fresh record is
    ///    allocated and loaded from storage; if that fails, nothing else
    ///    happens.
    /// 2. The item is created; if that fails, nothing is inserted.
    /// 3. The item goes into the inbox anywhere, ignoring the capacity.
    /// 4. Offline players are saved once.
    ///
    /// A loaded record is released exactly once on every path, including
    /// errors. A resident record is never released.
    pub fn add_item_to_recipient(&self, recipient: &str, item_id: ItemId) -> Result<Delivery> {
        let result = self.deliver(recipient, item_id);

        match &result {
            Ok(delivery) => {
                self.metrics.record_delivery();
                tracing::info!(
                    "Delivered {} (serial {}) to '{}' [{}, persisted={}]",
                    delivery.item_id,
                    delivery.serial.0,
                    delivery.recipient,
                    delivery.residency,
                    delivery.persisted
                );
            }
            Err(err) => {
                self.metrics.record_failure();
                tracing::debug!("Delivery of {} to '{}' failed: {}", item_id, recipient, err);
            }
        }

        result
    }

    /// Copy out the inbox of `name` without changing it.
    pub fn inbox(&self, name: &str) -> Result<Vec<InboxEntry>> {
        let recipient = self.resolve(name)?;
        recipient.with_player(|player| player.inbox.items().iter().map(InboxEntry::from).collect())
    }

    fn deliver(&self, name: &str, item_id: ItemId) -> Result<Delivery> {
        let mut recipient = self.resolve(name)?;

        let item = self
            .items
            .create(item_id)
            .ok_or(DeliveryError::ItemCreationFailed { item_id })?;
        self.metrics.record_item_created();
        let serial = item.serial;

        let (index, recipient_name, offline) = recipient.with_player_mut(|player| {
            player
                .inbox
                .insert(item, InsertPosition::Anywhere, InsertFlags::NO_LIMIT)
                .map(|index| (index, player.name.clone(), player.is_offline()))
        })?
        .map_err(|source| DeliveryError::InboxRejected {
            name: name.to_string(),
            source,
        })?;

        let persisted = offline && self.persist(&recipient)?;

        Ok(Delivery {
            recipient: recipient_name,
            item_id,
            serial,
            index,
            residency: recipient.residency(),
            persisted,
        })
    }

    /// Resolve `name` to a resident record or a freshly loaded one.
    fn resolve(&self, name: &str) -> Result<Recipient> {
        if let Some(handle) = self.directory.find_loaded(name) {
            tracing::debug!("'{}' is resident", name);
            return Ok(Recipient::Resident(handle));
        }

        let mut record = OwnedPlayer::allocate(&self.config.game_config, Arc::clone(&self.metrics));
        // On both error paths `record` is dropped here, which releases it.
        if self.repository.load_by_name(name, &mut record)? {
            tracing::debug!("'{}' loaded from storage", name);
            // Not in the directory means not connected, whatever was saved.
            if record.is_online() {
                tracing::debug!("'{}' was stored as online; treating as offline", name);
                record.status = PlayerStatus::Offline;
            }
            Ok(Recipient::Loaded(record))
        } else {
            Err(DeliveryError::PlayerNotFound {
                name: name.to_string(),
            })
        }
    }

    /// Best-effort save. Returns whether the record was written.
    fn persist(&self, recipient: &Recipient) -> Result<bool> {
        let saved = recipient.with_player(|player| self.repository.save(player))?;

        match saved {
            Ok(()) => {
                self.metrics.record_save();
                Ok(true)
            }
            Err(err) => {
                self.metrics.record_save_failure();
                tracing::warn!(
                    "Saving {} recipient after delivery failed: {}",
                    recipient.residency(),
                    err
                );
                Ok(false)
            }
        }
    }
}

/// Builder for [`Postmaster`].
pub struct PostmasterBuilder {
    config: RuntimeConfig,
    directory: Option<Arc<dyn PlayerDirectory>>,
    repository: Option<Arc<dyn PlayerRepository>>,
    items: Option<Arc<dyn ItemFactory>>,
    metrics: Option<Arc<DeliveryMetrics>>,
}

impl PostmasterBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            directory: None,
            repository: None,
            items: None,
            metrics: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required player directory
    pub fn directory(mut self, directory: Arc<dyn PlayerDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Set required player repository
    pub fn repository(mut self, repository: Arc<dyn PlayerRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set required item factory
    pub fn items(mut self, items: Arc<dyn ItemFactory>) -> Self {
        self.items = Some(items);
        self
    }

    /// Share a metrics tracker (a fresh one is created otherwise)
    pub fn metrics(mut self, metrics: Arc<DeliveryMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the postmaster
    pub fn build(self) -> std::result::Result<Postmaster, RuntimeError> {
        let directory = self
            .directory
            .ok_or(RuntimeError::MissingCollaborator(Collaborator::Directory))?;
        let repository = self
            .repository
            .ok_or(RuntimeError::MissingCollaborator(Collaborator::Repository))?;
        let items = self
            .items
            .ok_or(RuntimeError::MissingCollaborator(Collaborator::ItemFactory))?;

        Ok(Postmaster {
            config: self.config,
            directory,
            repository,
            items,
            metrics: self.metrics.unwrap_or_default(),
        })
    }
}
