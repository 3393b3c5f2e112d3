//! Wiring of the runtime collaborators for one CLI invocation.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use game_content::{ContentFactory, ItemLoader};
use game_core::{GameConfig, ItemDefinition};
use runtime::{
    CatalogItemFactory, FilePlayerRepository, InMemoryPlayerDirectory, Postmaster, RuntimeConfig,
};

use crate::config::MailroomConfig;
use crate::dirs;

/// Everything a subcommand needs: the storage and a postmaster over it.
pub struct MailContext {
    pub game_config: GameConfig,
    pub repository: Arc<FilePlayerRepository>,
    pub postmaster: Postmaster,
}

impl MailContext {
    pub fn build(config: MailroomConfig) -> Result<Self> {
        let save_dir = config.save_data_dir.clone().unwrap_or_else(dirs::data_dir);
        let repository = Arc::new(
            FilePlayerRepository::new(&save_dir)
                .with_context(|| format!("Failed to open save directory {}", save_dir.display()))?,
        );

        let content = config.content_dir.as_ref().map(ContentFactory::new);
        let game_config = config.game_config(match &content {
            Some(content) => content.load_config()?,
            None => GameConfig::default(),
        });
        let definitions = load_definitions(&config, content.as_ref())?;
        tracing::debug!("Loaded {} item definitions", definitions.len());

        let mut items = CatalogItemFactory::with_next_serial(initial_serial());
        for definition in definitions {
            items.add_definition(definition);
        }

        // A one-shot process has nobody logged in: every recipient is loaded
        // from storage.
        let postmaster = Postmaster::builder()
            .config(RuntimeConfig {
                game_config: game_config.clone(),
            })
            .directory(Arc::new(InMemoryPlayerDirectory::new()))
            .repository(repository.clone())
            .items(Arc::new(items))
            .build()?;

        tracing::debug!("Using save directory {}", save_dir.display());

        Ok(Self {
            game_config,
            repository,
            postmaster,
        })
    }
}

/// An explicit catalog wins over the content directory, which wins over the
/// built-in catalog.
fn load_definitions(
    config: &MailroomConfig,
    content: Option<&ContentFactory>,
) -> Result<Vec<ItemDefinition>> {
    match (&config.item_catalog, content) {
        (Some(path), _) => ItemLoader::load(path),
        (None, Some(content)) => content.load_items(),
        (None, None) => ItemLoader::builtin(),
    }
}

/// Serials must stay unique across invocations, so start from the clock.
pub(crate) fn initial_serial() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX))
        .unwrap_or(1)
}
