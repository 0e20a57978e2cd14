// ABOUTME: Token resolver turning `$name` / `$category.name` references into values
// ABOUTME: Theme colours take precedence over the plain colour scale for colour properties

use once_cell::sync::Lazy;
use regex::Regex;

use tokenlens_types::{Category, ResolvedToken, ScaleToken, ThemeToken};

use crate::normalize::TokenConfig;

/// `$category.name`, where category is one of the fixed scales.
pub(crate) static EXPLICIT_CATEGORY_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$(color|radius|size|space|zIndex)\.(.+)$")
        .expect("explicit category token pattern is valid")
});

/// Strip one leading and one trailing quote character, if present.
pub fn sanitize_quoted(text: &str) -> &str {
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text.strip_suffix(['"', '\'']).unwrap_or(text)
}

/// Split `$category.name` into its category and name.
pub fn split_explicit_category(token: &str) -> Option<(Category, &str)> {
    let captures = EXPLICIT_CATEGORY_TOKEN.captures(token)?;
    let category = Category::parse(captures.get(1)?.as_str())?;
    Some((category, captures.get(2)?.as_str()))
}

/// Resolve `token_text` for a property of `default_category`.
///
/// `None` means no documentation is available; it is not an error.
pub fn resolve(
    token_text: &str,
    default_category: Category,
    config: &TokenConfig,
) -> Option<ResolvedToken> {
    let sanitized = sanitize_quoted(token_text);

    if default_category == Category::Color {
        if let Some(per_theme) = config.theme_color(sanitized) {
            return Some(ResolvedToken::Theme(ThemeToken {
                token: sanitized.to_string(),
                per_theme: per_theme.to_vec(),
            }));
        }
    }

    resolve_scale(sanitized, default_category, config).map(ResolvedToken::Scale)
}

/// Scale-only lookup, honouring an explicit `$category.` override.
pub fn resolve_scale(
    token_text: &str,
    default_category: Category,
    config: &TokenConfig,
) -> Option<ScaleToken> {
    let sanitized = sanitize_quoted(token_text);
    let (category, name) =
        split_explicit_category(sanitized).unwrap_or((default_category, sanitized));
    if name.is_empty() {
        return None;
    }

    let token = if name.starts_with('$') {
        name.to_string()
    } else {
        format!("${name}")
    };
    let value = config
        .lookup(category, &token)
        .filter(|value| !value.is_empty())?;

    Some(ScaleToken {
        category,
        value: value.to_string(),
        token,
    })
}
