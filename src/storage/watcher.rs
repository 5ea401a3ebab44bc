//! External-change notification for the persisted log.
//!
//! A second running instance of the app shares the same storage file. When it
//! writes, this watcher pushes a refresh signal into the main event loop so the
//! reader's in-memory view is replaced without a manual reload. The mechanism
//! is push-based (filesystem notification), not polled.
//!
//! The watcher observes the data file's parent directory because the store's
//! atomic saves rename a temp file over the target; watching the file inode
//! directly would go stale after the first save. Our own saves land here too;
//! the resulting reload is idempotent.

use crate::domain::error::{CarlogError, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::Sender;

/// Starts watching the directory containing `data_file`, sending a unit signal
/// for every create/modify/remove event that touches the file.
///
/// Returns the watcher handle, which must be kept alive for the lifetime of
/// the subscription.
///
/// # Errors
///
/// Returns a storage error if the watcher cannot be created or the directory
/// cannot be watched. Callers may treat this as non-fatal: without the watcher
/// the app still works, it just won't observe other contexts' writes.
pub fn start_watcher(data_file: &Path, tx: Sender<()>) -> Result<RecommendedWatcher> {
    let file_name = data_file.file_name().map(std::ffi::OsStr::to_os_string);

    let mut watcher = notify::recommended_watcher(
        move |res: std::result::Result<Event, notify::Error>| match res {
            Ok(event) => {
                let relevant = matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                );
                if relevant
                    && event
                        .paths
                        .iter()
                        .any(|p| p.file_name() == file_name.as_deref())
                {
                    tracing::debug!(kind = ?event.kind, "storage file changed externally");
                    let _ = tx.send(());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "storage watcher error");
            }
        },
    )
    .map_err(|e| CarlogError::Storage(format!("failed to create storage watcher: {e}")))?;

    let dir = data_file.parent().unwrap_or_else(|| Path::new("."));
    tracing::debug!(dir = ?dir, "watching storage directory");
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(|e| CarlogError::Storage(format!("failed to watch storage directory: {e}")))?;

    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn signals_on_external_write_to_the_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("train-car-logger.json");
        std::fs::write(&file, r#"{"data": []}"#).unwrap();

        let (tx, rx) = mpsc::channel();
        let _watcher = start_watcher(&file, tx).unwrap();

        std::fs::write(
            &file,
            r#"{"data": [{"timestamp": 1, "car": "1111", "line": "A"}]}"#,
        )
        .unwrap();

        rx.recv_timeout(Duration::from_secs(3))
            .expect("expected a change signal after the external write");
    }

    #[test]
    fn ignores_writes_to_sibling_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("train-car-logger.json");
        std::fs::write(&file, r#"{"data": []}"#).unwrap();

        let (tx, rx) = mpsc::channel();
        let _watcher = start_watcher(&file, tx).unwrap();

        std::fs::write(dir.path().join("other.json"), "{}").unwrap();

        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    }
}
