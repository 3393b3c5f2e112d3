//! Mailroom configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Configuration required to run the mailroom tool.
#[derive(Clone, Debug, Default)]
pub struct MailroomConfig {
    pub save_data_dir: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
    pub item_catalog: Option<PathBuf>,
    /// Overrides the capacity from `config.toml` when set.
    pub inbox_capacity: Option<usize>,
    pub log_dir: Option<PathBuf>,
}

impl MailroomConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR` - Directory for player saves (default: platform-specific)
    /// - `CONTENT_DIR` - Directory holding `config.toml` and `items.ron`
    /// - `ITEM_CATALOG` - RON item catalog (default: `CONTENT_DIR/items.ron`, else built-in)
    /// - `INBOX_CAPACITY` - Capacity of newly created inboxes (default: 1000)
    /// - `MAILROOM_LOG_DIR` - Also write logs to `mailroom.log` in this directory
    pub fn from_env() -> Self {
        Self {
            save_data_dir: env::var("SAVE_DATA_DIR").ok().map(PathBuf::from),
            content_dir: env::var("CONTENT_DIR").ok().map(PathBuf::from),
            item_catalog: env::var("ITEM_CATALOG").ok().map(PathBuf::from),
            inbox_capacity: read_env::<usize>("INBOX_CAPACITY"),
            log_dir: env::var("MAILROOM_LOG_DIR").ok().map(PathBuf::from),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, catalog: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.save_data_dir = data_dir;
        }
        if catalog.is_some() {
            self.item_catalog = catalog;
        }
        self
    }

    /// Apply the capacity override to a loaded game configuration.
    pub fn game_config(&self, mut base: GameConfig) -> GameConfig {
        if let Some(capacity) = self.inbox_capacity {
            base.inbox_capacity = capacity;
        }
        base
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let base = MailroomConfig {
            save_data_dir: Some(PathBuf::from("/env/saves")),
            item_catalog: Some(PathBuf::from("/env/items.ron")),
            ..MailroomConfig::default()
        };

        let config = base.with_overrides(Some(PathBuf::from("/cli/saves")), None);
        assert_eq!(config.save_data_dir, Some(PathBuf::from("/cli/saves")));
        assert_eq!(config.item_catalog, Some(PathBuf::from("/env/items.ron")));
    }

    #[test]
    fn test_capacity_override() {
        let config = MailroomConfig {
            inbox_capacity: Some(5),
            ..MailroomConfig::default()
        };
        assert_eq!(config.game_config(GameConfig::default()).inbox_capacity, 5);

        let config = MailroomConfig::default();
        assert_eq!(
            config.game_config(GameConfig::with_inbox_capacity(9)).inbox_capacity,
            9
        );
    }
}
