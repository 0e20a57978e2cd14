// ABOUTME: Flattens a raw design-system config into category-indexed lookup tables
// ABOUTME: Builds the theme-colour index ordered by theme depth with the default theme first

use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use tokenlens_types::{Category, ThemeFilter, ThemeValue};

use crate::error::{ConfigError, Result};

/// Separator between a theme and its sub-theme (`dark_green`).
pub const THEME_SEPARATOR: char = '_';

/// The normalized, immutable token configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenConfig {
    categories: BTreeMap<Category, BTreeMap<String, String>>,
    shorthands: BTreeMap<String, String>,
    theme_colors: BTreeMap<String, Vec<ThemeValue>>,
}

impl TokenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scale token. Keys are stored `$`-prefixed.
    pub fn with_token(mut self, category: Category, key: &str, value: &str) -> Self {
        self.categories
            .entry(category)
            .or_default()
            .insert(dollar_prefixed(key), value.to_string());
        self
    }

    pub fn with_shorthand(mut self, shorthand: &str, property: &str) -> Self {
        self.shorthands
            .insert(shorthand.to_string(), property.to_string());
        self
    }

    /// Append a theme's value for a colour key; callers supply themes in display order.
    pub fn with_theme_color(mut self, key: &str, theme: &str, value: &str) -> Self {
        self.theme_colors
            .entry(dollar_prefixed(key))
            .or_default()
            .push(ThemeValue {
                theme: theme.to_string(),
                value: value.to_string(),
            });
        self
    }

    pub fn scale(&self, category: Category) -> Option<&BTreeMap<String, String>> {
        self.categories.get(&category)
    }

    /// Value of `$`-prefixed `token` in `category`.
    pub fn lookup(&self, category: Category, token: &str) -> Option<&str> {
        self.categories
            .get(&category)
            .and_then(|scale| scale.get(token))
            .map(String::as_str)
    }

    pub fn shorthand(&self, property: &str) -> Option<&str> {
        self.shorthands.get(property).map(String::as_str)
    }

    pub fn shorthands(&self) -> &BTreeMap<String, String> {
        &self.shorthands
    }

    pub fn theme_color(&self, token: &str) -> Option<&[ThemeValue]> {
        self.theme_colors.get(token).map(Vec::as_slice)
    }

    pub fn theme_colors(&self) -> &BTreeMap<String, Vec<ThemeValue>> {
        &self.theme_colors
    }

    pub fn token_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }
}

/// Parse and normalize a JSON document.
pub fn normalize_str(source: &str, default_theme: &str, filter: &ThemeFilter) -> Result<TokenConfig> {
    let raw: Value = serde_json::from_str(source)?;
    normalize(&raw, default_theme, filter)
}

/// Normalize a raw config document.
///
/// The config object may sit at the document root or one level down under a
/// wrapper key. It must contain `tokens` and `themes` objects.
pub fn normalize(raw: &Value, default_theme: &str, filter: &ThemeFilter) -> Result<TokenConfig> {
    let root = find_config_object(raw).ok_or(ConfigError::MissingSection("tokens"))?;

    let tokens = root
        .get("tokens")
        .ok_or(ConfigError::MissingSection("tokens"))?
        .as_object()
        .ok_or_else(|| ConfigError::invalid_section("tokens", "expected an object"))?;
    let themes = root
        .get("themes")
        .ok_or(ConfigError::MissingSection("themes"))?
        .as_object()
        .ok_or_else(|| ConfigError::invalid_section("themes", "expected an object"))?;

    let mut config = TokenConfig::new();

    for category in Category::ALL {
        let Some(entries) = tokens.get(category.as_str()) else {
            continue;
        };
        let entries = entries.as_object().ok_or_else(|| {
            ConfigError::invalid_section(format!("tokens.{category}"), "expected an object")
        })?;
        config
            .categories
            .insert(category, flatten_scale(category, entries));
    }

    if let Some(shorthands) = root.get("shorthands").and_then(Value::as_object) {
        config.shorthands = shorthands
            .iter()
            .filter_map(|(short, full)| full.as_str().map(|full| (short.clone(), full.to_string())))
            .collect();
    }

    config.theme_colors = flatten_themes(themes, default_theme, filter)?;

    Ok(config)
}

fn find_config_object(raw: &Value) -> Option<&Map<String, Value>> {
    let root = raw.as_object()?;
    if root.contains_key("tokens") {
        return Some(root);
    }
    root.values()
        .filter_map(Value::as_object)
        .find(|inner| inner.contains_key("tokens"))
}

fn flatten_scale(category: Category, entries: &Map<String, Value>) -> BTreeMap<String, String> {
    let mut scale = BTreeMap::new();
    for (map_key, entry) in entries {
        let (name, raw_value) = match entry {
            Value::Object(variable) => {
                let name = variable
                    .get("key")
                    .and_then(Value::as_str)
                    .map(dollar_prefixed)
                    .unwrap_or_else(|| dollar_prefixed(map_key));
                (name, variable.get("val"))
            }
            other => (dollar_prefixed(map_key), Some(other)),
        };
        match raw_value.and_then(|value| format_token_value(category, value)) {
            Some(value) => {
                scale.insert(name, value);
            }
            None => {
                tokenlens_logging::debug!(category = %category, token = %name, "Skipping token without a usable value");
            }
        }
    }
    scale
}

fn format_token_value(category: Category, value: &Value) -> Option<String> {
    match value {
        Value::Number(number) if category.is_pixel_scale() => {
            Some(format!("{}px", format_number(number)))
        }
        Value::Number(number) => Some(format_number(number)),
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Integral floats print without a fractional part (`8.0` -> `8`).
fn format_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => (float as i64).to_string(),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

/// Nesting depth of a theme name: the number of separators it contains.
pub fn theme_depth(theme: &str) -> usize {
    theme.matches(THEME_SEPARATOR).count()
}

/// Whether `theme` is `default_theme` or one of its sub-themes.
pub fn is_default_or_descendant(theme: &str, default_theme: &str) -> bool {
    theme == default_theme
        || theme
            .strip_prefix(default_theme)
            .is_some_and(|rest| rest.starts_with(THEME_SEPARATOR))
}

/// Naming convention for per-component variant themes: a separator followed by
/// an uppercase letter (`light_Button`, `dark_red_Card`).
pub fn is_component_theme(theme: &str) -> bool {
    theme
        .split(THEME_SEPARATOR)
        .skip(1)
        .any(|segment| segment.starts_with(|c: char| c.is_ascii_uppercase()))
}

fn validate_theme_name(theme: &str) -> Result<()> {
    if theme.is_empty() {
        return Err(ConfigError::malformed_theme(theme, "theme name is empty"));
    }
    if theme.split(THEME_SEPARATOR).any(str::is_empty) {
        return Err(ConfigError::malformed_theme(
            theme,
            format!("empty segment around '{THEME_SEPARATOR}'"),
        ));
    }
    Ok(())
}

fn keep_theme(theme: &str, filter: &ThemeFilter) -> bool {
    if filter.exclude.iter().any(|name| name == theme) {
        return false;
    }
    if filter.include.iter().any(|name| name == theme) {
        return true;
    }
    !(filter.exclude_component_themes && is_component_theme(theme))
}

/// Sort order for theme tables: shallower first, then the default theme and its
/// descendants, then by name.
pub fn sort_themes(themes: &mut [&str], default_theme: &str) {
    themes.sort_by(|a, b| {
        theme_depth(a)
            .cmp(&theme_depth(b))
            .then_with(|| {
                let a_default = is_default_or_descendant(a, default_theme);
                let b_default = is_default_or_descendant(b, default_theme);
                b_default.cmp(&a_default)
            })
            .then_with(|| a.cmp(b))
    });
}

fn flatten_themes(
    themes: &Map<String, Value>,
    default_theme: &str,
    filter: &ThemeFilter,
) -> Result<BTreeMap<String, Vec<ThemeValue>>> {
    for theme in themes.keys() {
        validate_theme_name(theme)?;
    }

    let mut names: Vec<&str> = themes
        .keys()
        .map(String::as_str)
        .filter(|theme| keep_theme(theme, filter))
        .collect();
    sort_themes(&mut names, default_theme);

    let mut theme_colors: BTreeMap<String, Vec<ThemeValue>> = BTreeMap::new();
    for theme in names {
        let entries = themes
            .get(theme)
            .and_then(Value::as_object)
            .ok_or_else(|| ConfigError::invalid_section(format!("themes.{theme}"), "expected an object"))?;

        for (key, variable) in entries {
            if key == "id" {
                continue;
            }
            if key.is_empty() {
                return Err(ConfigError::malformed_theme(theme, "empty colour key"));
            }
            let value = match variable {
                Value::Object(inner) => inner.get("val").and_then(value_as_text),
                other => value_as_text(other),
            };
            let Some(value) = value else {
                continue;
            };
            theme_colors
                .entry(dollar_prefixed(key))
                .or_default()
                .push(ThemeValue {
                    theme: theme.to_string(),
                    value,
                });
        }
    }

    Ok(theme_colors)
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(format_number(number)),
        _ => None,
    }
}

fn dollar_prefixed(key: &str) -> String {
    if key.starts_with('$') {
        key.to_string()
    } else {
        format!("${key}")
    }
}
