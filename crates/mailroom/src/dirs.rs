//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific data directory for player saves
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/mailroom/players`
/// - Linux: `~/.local/share/mailroom/players` (or `$XDG_DATA_HOME/mailroom/players`)
/// - Windows: `%APPDATA%\mailroom\players`
/// - Fallback: `./save_data/players`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "mailroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("players")
}
