// ABOUTME: Holds the active token config behind an atomically swappable pointer
// ABOUTME: Readers take a snapshot per request; reloads swap the whole config at once

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwapOption;
use tokenlens_logging::{error, info};
use tokenlens_types::ThemeFilter;

use crate::error::Result;
use crate::loader::load_token_config;
use crate::normalize::TokenConfig;

/// The current [`TokenConfig`], if one has been loaded, plus a version that
/// increases with every successful replacement.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: ArcSwapOption<TokenConfig>,
    version: AtomicU64,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TokenConfig) -> Self {
        let store = Self::new();
        store.replace(config);
        store
    }

    /// The config to use for the rest of a request.
    pub fn snapshot(&self) -> Option<Arc<TokenConfig>> {
        self.current.load_full()
    }

    /// Swap in `config`, returning the new version.
    pub fn replace(&self, config: TokenConfig) -> u64 {
        self.current.store(Some(Arc::new(config)));
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        info!(version, "Token config replaced");
        version
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Reload from `path`. On failure the previous config stays active.
    pub fn reload(&self, path: &Path, default_theme: &str, filter: &ThemeFilter) -> Result<u64> {
        match load_token_config(path, default_theme, filter) {
            Ok(config) => Ok(self.replace(config)),
            Err(err) => {
                error!(
                    path = %path.display(),
                    error = %err,
                    version = self.version(),
                    "Failed to reload token config, keeping the previous one"
                );
                Err(err)
            }
        }
    }
}
