// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer shared by the resolver, the locator and the host hooks

pub mod category;
pub mod options;
pub mod token;

// Re-export commonly used types
pub use category::Category;
pub use options::{
    CompletionFilters, CustomFilter, PluginOptions, ScopeRules, ThemeFilter, TokenPredicate,
    UnknownShorthandFallback, THEME_COLOR_FILTER_KEY,
};
pub use token::{
    PropertyToken, ResolvedToken, ScaleToken, TextSpan, ThemeToken, ThemeValue,
    VariantDescription,
};
