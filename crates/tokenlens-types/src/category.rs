// ABOUTME: The fixed set of design-token categories (scales)
// ABOUTME: Parsing, display names and serde mapping for color/space/size/radius/zIndex

use serde::{Deserialize, Serialize};
use std::fmt;

/// A namespace of related design tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Color,
    Space,
    Size,
    Radius,
    ZIndex,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: [Category; 5] = [
        Category::Color,
        Category::Space,
        Category::Size,
        Category::Radius,
        Category::ZIndex,
    ];

    /// Name as it appears in token configs and in `$category.name` tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Space => "space",
            Category::Size => "size",
            Category::Radius => "radius",
            Category::ZIndex => "zIndex",
        }
    }

    /// Title-cased name used in rendered documentation ("Space", "ZIndex").
    pub fn title(self) -> &'static str {
        match self {
            Category::Color => "Color",
            Category::Space => "Space",
            Category::Size => "Size",
            Category::Radius => "Radius",
            Category::ZIndex => "ZIndex",
        }
    }

    /// Parse a category name exactly as written in a token reference.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }

    /// Whether numeric values in this scale carry a pixel unit.
    pub fn is_pixel_scale(self) -> bool {
        matches!(self, Category::Space | Category::Size | Category::Radius)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
