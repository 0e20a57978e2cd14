// ABOUTME: Property classifier mapping a source property name to its token category
// ABOUTME: Expands shorthands one level and applies the unknown-shorthand fallback policy

use tokenlens_types::{PropertyToken, UnknownShorthandFallback};

use crate::normalize::TokenConfig;
use crate::properties::category_for_property;

/// Classify `property`, expanding it through the config's shorthand table.
///
/// Shorthands do not chain: `px -> paddingHorizontal` is looked up once and the
/// result is never expanded again. Returns `None` when no category applies.
pub fn classify(
    property: &str,
    config: &TokenConfig,
    fallback: UnknownShorthandFallback,
) -> Option<PropertyToken> {
    let expanded = config.shorthand(property);
    let canonical = expanded.unwrap_or(property);

    let category = match (category_for_property(canonical), expanded, fallback) {
        (Some(category), _, _) => category,
        (None, Some(_), UnknownShorthandFallback::Category(category)) => category,
        _ => return None,
    };

    let is_shorthand = expanded.is_some();
    Some(PropertyToken {
        category,
        canonical_property: canonical.to_string(),
        is_shorthand,
        original_property: is_shorthand.then(|| property.to_string()),
    })
}
