// ABOUTME: Plugin option data types read from the host's project configuration
// ABOUTME: Pure data structures for filters, theme selection and scope recognition rules

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::category::Category;

/// Callback deciding whether a token should be hidden, keyed by category name and token.
pub type TokenPredicate = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Category name used by filters for theme colours.
pub const THEME_COLOR_FILTER_KEY: &str = "themeColor";

/// Top-level plugin options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Directory of the app whose generated token config is read
    #[serde(alias = "pathToApp")]
    pub app_path: PathBuf,

    /// Token config location, relative to `app_path` unless absolute
    pub config_file: PathBuf,

    /// Theme listed first in theme tables
    #[serde(alias = "defaultTheme")]
    pub default_theme: String,

    /// Swatch size in pixels
    #[serde(alias = "colorTileSize")]
    pub color_tile_size: u32,

    #[serde(alias = "completionFilters")]
    pub completion_filters: CompletionFilters,

    #[serde(alias = "showShorthandTranslations")]
    pub show_shorthand_translations: bool,

    pub unknown_shorthand_fallback: UnknownShorthandFallback,

    pub theme_filter: ThemeFilter,

    pub scope: ScopeRules,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            app_path: PathBuf::from("apps/next"),
            config_file: PathBuf::from(".tamagui/tamagui.config.json"),
            default_theme: "light".to_string(),
            color_tile_size: 18,
            completion_filters: CompletionFilters::default(),
            show_shorthand_translations: true,
            unknown_shorthand_fallback: UnknownShorthandFallback::default(),
            theme_filter: ThemeFilter::default(),
            scope: ScopeRules::default(),
        }
    }
}

impl PluginOptions {
    /// Absolute or root-relative path of the token config file.
    pub fn token_config_path(&self, root: &std::path::Path) -> PathBuf {
        let app = if self.app_path.is_absolute() {
            self.app_path.clone()
        } else {
            root.join(&self.app_path)
        };
        if self.config_file.is_absolute() {
            self.config_file.clone()
        } else {
            app.join(&self.config_file)
        }
    }
}

/// Which suggestions are decorated and which are dropped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionFilters {
    #[serde(alias = "showColorTokens")]
    pub show_color_tokens: bool,

    /// Show `$true` / `$-true` in space and size scales
    #[serde(alias = "showTrueTokens")]
    pub show_true_tokens: bool,

    pub custom: CustomFilter,
}

impl Default for CompletionFilters {
    fn default() -> Self {
        Self {
            show_color_tokens: true,
            show_true_tokens: true,
            custom: CustomFilter::default(),
        }
    }
}

/// Per-category allow/deny lists plus an optional programmatic predicate.
///
/// A token is hidden when the predicate returns true, when it is listed in
/// `deny` for its category, or when its category has a non-empty `allow`
/// list that does not name it. Theme colours use the `themeColor` key.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomFilter {
    pub allow: HashMap<String, Vec<String>>,
    pub deny: HashMap<String, Vec<String>>,
    #[serde(skip)]
    predicate: Option<TokenPredicate>,
}

impl fmt::Debug for CustomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFilter")
            .field("allow", &self.allow)
            .field("deny", &self.deny)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

impl CustomFilter {
    /// Attach a predicate returning true for tokens that should be hidden.
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Whether `token` in `category` should be dropped from suggestions.
    pub fn hides(&self, category: &str, token: &str) -> bool {
        if let Some(predicate) = &self.predicate {
            if predicate(category, token) {
                return true;
            }
        }
        if let Some(denied) = self.deny.get(category) {
            if denied.iter().any(|entry| same_token(entry, token)) {
                return true;
            }
        }
        match self.allow.get(category) {
            Some(allowed) if !allowed.is_empty() => {
                !allowed.iter().any(|entry| same_token(entry, token))
            }
            _ => false,
        }
    }
}

/// Compare list entries with or without the leading `$`.
fn same_token(entry: &str, token: &str) -> bool {
    entry.trim_start_matches('$') == token.trim_start_matches('$')
}

/// Category applied to a shorthand whose expansion maps to no category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownShorthandFallback {
    #[default]
    None,
    Category(Category),
}

/// Which themes contribute to the theme-colour table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFilter {
    /// Drop themes named like component variants (`dark_Button`)
    pub exclude_component_themes: bool,
    /// Always kept, even when they look like component themes
    pub include: Vec<String>,
    /// Never kept
    pub exclude: Vec<String>,
}

impl Default for ThemeFilter {
    fn default() -> Self {
        Self {
            exclude_component_themes: true,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// Names the locator uses to recognise themed-component scopes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeRules {
    /// Callee names of "create styled component" calls
    pub styled_factories: Vec<String>,
    /// Type alias names identifying themed components
    pub component_type_names: Vec<String>,
    /// Internal properties whose presence marks a themed component type
    pub marker_properties: Vec<String>,
    /// Property carrying the component's variant props type
    pub variant_props_marker: String,
}

impl Default for ScopeRules {
    fn default() -> Self {
        Self {
            styled_factories: vec!["styled".to_string()],
            component_type_names: vec!["TamaguiComponent".to_string()],
            marker_properties: vec!["staticConfig".to_string()],
            variant_props_marker: "___variantProps".to_string(),
        }
    }
}

impl ScopeRules {
    pub fn is_styled_factory(&self, callee: &str) -> bool {
        self.styled_factories.iter().any(|name| name == callee)
    }

    /// Matches `TamaguiComponent` as well as rendered generics like `TamaguiComponent<..>`.
    pub fn is_component_type_name(&self, type_name: &str) -> bool {
        self.component_type_names.iter().any(|name| {
            type_name == name
                || type_name
                    .strip_prefix(name.as_str())
                    .is_some_and(|rest| rest.starts_with('<'))
        })
    }
}
