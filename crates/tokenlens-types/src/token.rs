// ABOUTME: Result types for property classification and token resolution
// ABOUTME: Text spans, classified properties and resolved token values

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Half-open byte range `[start, end)` into a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `position` lies inside the span, both ends inclusive.
    pub fn touches(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }
}

/// A style property mapped to its token category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyToken {
    pub category: Category,
    /// The property name after shorthand expansion
    pub canonical_property: String,
    pub is_shorthand: bool,
    /// The name as written in source, only set for shorthands
    pub original_property: Option<String>,
}

/// One theme's value for a theme colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeValue {
    pub theme: String,
    pub value: String,
}

/// A token found in one of the category scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleToken {
    pub category: Category,
    /// The `$`-prefixed key the value was found under
    pub token: String,
    pub value: String,
}

/// A theme colour, resolved for every theme that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToken {
    pub token: String,
    /// Ordered base themes first, default theme first within a depth
    pub per_theme: Vec<ThemeValue>,
}

impl ThemeToken {
    /// Value for `theme`, falling back to the first entry.
    pub fn value_for(&self, theme: &str) -> Option<&str> {
        self.per_theme
            .iter()
            .find(|entry| entry.theme == theme)
            .or_else(|| self.per_theme.first())
            .map(|entry| entry.value.as_str())
    }
}

/// A fully populated token resolution. Misses are represented by `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedToken {
    Scale(ScaleToken),
    Theme(ThemeToken),
}

impl ResolvedToken {
    pub fn category(&self) -> Category {
        match self {
            ResolvedToken::Scale(scale) => scale.category,
            ResolvedToken::Theme(_) => Category::Color,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            ResolvedToken::Scale(scale) => &scale.token,
            ResolvedToken::Theme(theme) => &theme.token,
        }
    }

    pub fn is_color(&self) -> bool {
        self.category() == Category::Color
    }
}

/// One variant prop of a themed component and the values it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescription {
    pub name: String,
    pub values: Vec<String>,
}
