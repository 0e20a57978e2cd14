// ABOUTME: Watches the token config file and reloads the config store when it changes
// ABOUTME: Watches the parent directory so editors that replace the file are still seen

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use tokenlens_core::ConfigStore;
use tokenlens_logging::{debug, info, warn};
use tokenlens_types::ThemeFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    Created,
    Modified,
}

/// File system watcher for a single config file
pub struct ConfigWatcher {
    /// The notify watcher instance
    _watcher: notify::RecommendedWatcher,
    event_receiver: mpsc::UnboundedReceiver<Result<Event, notify::Error>>,
    config_path: PathBuf,
    file_name: OsString,
}

impl ConfigWatcher {
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let file_name = config_path
            .file_name()
            .map(OsStr::to_os_string)
            .with_context(|| format!("Config path has no file name: {}", config_path.display()))?;
        let dir = config_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let (tx, rx) = mpsc::unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            if tx.send(res).is_err() {
                // Receiver dropped, the watcher is going away
            }
        })?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch directory: {}", dir.display()))?;

        info!(config_path = %config_path.display(), "Watching token config");

        Ok(Self {
            _watcher: watcher,
            event_receiver: rx,
            config_path,
            file_name,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Wait for the next create or modify event on the config file.
    pub async fn next_change(&mut self) -> Option<ConfigChange> {
        while let Some(event_result) = self.event_receiver.recv().await {
            match event_result {
                Ok(event) => {
                    if let Some(change) = config_change(&event, &self.file_name) {
                        return Some(change);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Config watcher error");
                }
            }
        }
        None
    }
}

fn config_change(event: &Event, file_name: &OsStr) -> Option<ConfigChange> {
    let change = match event.kind {
        EventKind::Create(_) => ConfigChange::Created,
        EventKind::Modify(_) => ConfigChange::Modified,
        _ => return None,
    };
    event
        .paths
        .iter()
        .any(|path| path.file_name() == Some(file_name))
        .then_some(change)
}

/// Reload `store` on every change reported by `watcher`.
///
/// A config that fails to load leaves the previous one active.
pub fn spawn_reloader(
    mut watcher: ConfigWatcher,
    store: Arc<ConfigStore>,
    default_theme: String,
    filter: ThemeFilter,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(change) = watcher.next_change().await {
            info!(
                config_path = %watcher.config_path().display(),
                change = ?change,
                "Token config changed on disk"
            );
            match store.reload(watcher.config_path(), &default_theme, &filter) {
                Ok(version) => debug!(version, "Reloaded token config"),
                Err(_) => debug!("Reload failed, previous token config kept"),
            }
        }
    })
}
