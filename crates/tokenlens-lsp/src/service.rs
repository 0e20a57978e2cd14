// ABOUTME: The Tokenlens service: shared state and request context for the host hooks
// ABOUTME: Takes one config snapshot per request and classifies the property at the position

use std::path::Path;
use std::sync::Arc;

use tokenlens_core::docs::{resolved_table, shorthand_note};
use tokenlens_core::{BlockId, ConfigStore, TokenConfig, classify, insert_block, resolve};
use tokenlens_logging::{debug, error, info};
use tokenlens_syntax::{ScopeMatch, locate};
use tokenlens_types::{PluginOptions, PropertyToken};

use crate::host::HostDocument;

/// Answers completion, completion-resolve and hover requests for token-valued
/// style properties.
#[derive(Debug, Clone)]
pub struct TokenLens {
    store: Arc<ConfigStore>,
    options: PluginOptions,
}

/// State shared by one request.
pub(crate) struct RequestContext {
    pub config: Arc<TokenConfig>,
    pub scope: ScopeMatch,
    pub property: PropertyToken,
}

impl TokenLens {
    pub fn new(options: PluginOptions, store: Arc<ConfigStore>) -> Self {
        Self { store, options }
    }

    /// Create the service and load the token config found under `root`.
    ///
    /// A config that fails to load is logged and the service starts as a
    /// pass-through until a reload succeeds.
    pub fn start(root: &Path, options: PluginOptions) -> Self {
        let store = Arc::new(ConfigStore::new());
        let path = options.token_config_path(root);
        match store.reload(&path, &options.default_theme, &options.theme_filter) {
            Ok(version) => info!(config_path = %path.display(), version, "Token config loaded"),
            Err(err) => error!(
                config_path = %path.display(),
                error = %err,
                "Token config was not parsed, hooks will pass results through"
            ),
        }
        Self::new(options, store)
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Locate and classify the property at `offset`, or `None` if there is
    /// nothing to augment.
    pub(crate) fn request_context(
        &self,
        document: &HostDocument<'_>,
        offset: usize,
    ) -> Option<RequestContext> {
        let config = self.store.snapshot()?;
        let scope = locate(
            document.source,
            document.tree,
            offset,
            document.oracle,
            &self.options.scope,
        );
        if !scope.in_scope {
            return None;
        }

        let property = classify(
            scope.property()?,
            &config,
            self.options.unknown_shorthand_fallback,
        )?;
        debug!(
            offset,
            property = %property.canonical_property,
            category = %property.category,
            shorthand = property.is_shorthand,
            "Classified style property"
        );

        Some(RequestContext {
            config,
            scope,
            property,
        })
    }

    /// Insert the shorthand note if enabled. Returns whether it was inserted.
    pub(crate) fn insert_shorthand_note(&self, doc: &mut String, property: &PropertyToken) -> bool {
        if !self.options.show_shorthand_translations {
            return false;
        }
        let Some(original) = property.original_property.as_deref() else {
            return false;
        };
        insert_block(
            doc,
            BlockId::Shorthand,
            Some(&shorthand_note(original, &property.canonical_property)),
        );
        true
    }

    /// Insert the value table for `entry`. Returns whether it resolved.
    pub(crate) fn insert_token_table(
        &self,
        doc: &mut String,
        context: &RequestContext,
        entry: &str,
    ) -> bool {
        let Some(resolved) = resolve(entry, context.property.category, &context.config) else {
            debug!(entry, category = %context.property.category, "No token value found");
            return false;
        };
        insert_block(
            doc,
            BlockId::Token,
            Some(&resolved_table(&resolved, self.options.color_tile_size)),
        );
        true
    }
}
