//! Filesystem locations for storage, configuration, and exports.
//!
//! This module resolves the platform directories the app uses: the data
//! directory holding the persisted log, the TOML configuration file, and the
//! default export destination.

use std::path::PathBuf;

/// File name of the persisted log blob inside the data directory.
pub const STORAGE_FILE_NAME: &str = "train-car-logger.json";

/// Returns the data directory for carlog storage.
///
/// Resolves to `~/.local/share/carlog` on Linux (per the XDG base directory
/// spec) and the platform equivalent elsewhere. Falls back to `.carlog` in
/// the current directory when no home directory can be determined.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map_or_else(|| PathBuf::from(".carlog"), |d| d.join("carlog"))
}

/// Returns the path of the persisted log file.
#[must_use]
pub fn storage_file() -> PathBuf {
    data_dir().join(STORAGE_FILE_NAME)
}

/// Returns the path of the TOML configuration file.
///
/// Resolves to `~/.config/carlog/config.toml` on Linux and the platform
/// equivalent elsewhere.
#[must_use]
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .map_or_else(|| PathBuf::from(".carlog"), |d| d.join("carlog"))
        .join("config.toml")
}

/// Returns the default directory for export files.
///
/// Prefers the platform download directory, falling back to the home
/// directory and finally the data directory.
#[must_use]
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_file_lives_in_the_data_dir() {
        let file = storage_file();
        assert!(file.starts_with(data_dir()));
        assert_eq!(
            file.file_name().and_then(|n| n.to_str()),
            Some(STORAGE_FILE_NAME)
        );
    }

    #[test]
    fn config_file_is_toml() {
        assert_eq!(
            config_file().extension().and_then(|e| e.to_str()),
            Some("toml")
        );
    }
}
