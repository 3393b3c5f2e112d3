//! Ownership-tagged access to a recipient's player record.
//!
//! A record is either resident (the directory owns it, we hold a shared
//! handle) or loaded for the current operation (we own it outright). The two
//! cases are distinct types, so there is no flag to get wrong: an
//! [`OwnedPlayer`] is released exactly once when it is dropped, and a
//! [`PlayerHandle`] can only give its reference back.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use game_core::{GameConfig, Player};

use crate::api::{DeliveryError, Residency, Result};
use crate::directory::PlayerHandle;
use crate::metrics::DeliveryMetrics;

/// A player record allocated and owned by the current operation.
///
/// Allocation and release are reported to [`DeliveryMetrics`], which makes
/// the exactly-once release observable.
pub struct OwnedPlayer {
    player: Player,
    metrics: Arc<DeliveryMetrics>,
}

impl OwnedPlayer {
    /// Allocate a blank record, ready to be populated from storage.
    ///
    /// `config` only shapes the blank placeholder. A successful load replaces
    /// the whole record, inbox capacity included, with the stored one.
    pub fn allocate(config: &GameConfig, metrics: Arc<DeliveryMetrics>) -> Self {
        metrics.record_allocation();
        Self {
            player: Player::with_config(String::new(), config),
            metrics,
        }
    }
}

impl Deref for OwnedPlayer {
    type Target = Player;

    fn deref(&self) -> &Player {
        &self.player
    }
}

impl DerefMut for OwnedPlayer {
    fn deref_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}

impl Drop for OwnedPlayer {
    fn drop(&mut self) {
        self.metrics.record_release();
        tracing::trace!("Released loaded player record '{}'", self.player.name);
    }
}

/// The record an item is being delivered to.
pub enum Recipient {
    /// Resident in the directory. Never released here.
    Resident(PlayerHandle),
    /// Loaded from storage. Released when this value is dropped.
    Loaded(OwnedPlayer),
}

impl Recipient {
    pub fn residency(&self) -> Residency {
        match self {
            Self::Resident(_) => Residency::Resident,
            Self::Loaded(_) => Residency::Loaded,
        }
    }

    /// Run `f` with shared access to the record.
    pub fn with_player<R>(&self, f: impl FnOnce(&Player) -> R) -> Result<R> {
        match self {
            Self::Resident(handle) => {
                let player = handle.read().map_err(|_| DeliveryError::RecordPoisoned)?;
                Ok(f(&*player))
            }
            Self::Loaded(owned) => Ok(f(&**owned)),
        }
    }

    /// Run `f` with exclusive access to the record.
    ///
    /// For resident records the write lock is held only for the duration of
    /// `f`.
    pub fn with_player_mut<R>(&mut self, f: impl FnOnce(&mut Player) -> R) -> Result<R> {
        match self {
            Self::Resident(handle) => {
                let mut player = handle.write().map_err(|_| DeliveryError::RecordPoisoned)?;
                Ok(f(&mut *player))
            }
            Self::Loaded(owned) => Ok(f(&mut **owned)),
        }
    }
}
