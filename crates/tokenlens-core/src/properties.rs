// ABOUTME: Built-in table mapping style property names to token categories
// ABOUTME: Mirrors the design-system library's own property categorisation

use tokenlens_types::Category;

const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "backgroundColor",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderStartColor",
    "borderEndColor",
    "borderBlockColor",
    "borderBlockStartColor",
    "borderBlockEndColor",
    "borderInlineColor",
    "borderInlineStartColor",
    "borderInlineEndColor",
    "outlineColor",
    "shadowColor",
    "textDecorationColor",
    "textShadowColor",
    "placeholderTextColor",
    "tintColor",
    "caretColor",
    "fill",
    "stroke",
];

const SPACE_PROPERTIES: &[&str] = &[
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "paddingStart",
    "paddingEnd",
    "paddingHorizontal",
    "paddingVertical",
    "paddingBlock",
    "paddingBlockStart",
    "paddingBlockEnd",
    "paddingInline",
    "paddingInlineStart",
    "paddingInlineEnd",
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "marginStart",
    "marginEnd",
    "marginHorizontal",
    "marginVertical",
    "marginBlock",
    "marginBlockStart",
    "marginBlockEnd",
    "marginInline",
    "marginInlineStart",
    "marginInlineEnd",
    "gap",
    "rowGap",
    "columnGap",
    "space",
    "spaceDirection",
    "top",
    "right",
    "bottom",
    "left",
    "start",
    "end",
    "inset",
    "x",
    "y",
    "shadowRadius",
    "borderWidth",
    "borderTopWidth",
    "borderRightWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "outlineWidth",
    "outlineOffset",
];

const SIZE_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "minWidth",
    "minHeight",
    "maxWidth",
    "maxHeight",
    "blockSize",
    "minBlockSize",
    "maxBlockSize",
    "inlineSize",
    "minInlineSize",
    "maxInlineSize",
    "size",
    "flexBasis",
];

const RADIUS_PROPERTIES: &[&str] = &[
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderTopStartRadius",
    "borderTopEndRadius",
    "borderBottomStartRadius",
    "borderBottomEndRadius",
    "borderStartStartRadius",
    "borderStartEndRadius",
    "borderEndStartRadius",
    "borderEndEndRadius",
];

const Z_INDEX_PROPERTIES: &[&str] = &["zIndex"];

/// Category of a canonical (already expanded) property name.
pub fn category_for_property(property: &str) -> Option<Category> {
    [
        (Category::Color, COLOR_PROPERTIES),
        (Category::Space, SPACE_PROPERTIES),
        (Category::Size, SIZE_PROPERTIES),
        (Category::Radius, RADIUS_PROPERTIES),
        (Category::ZIndex, Z_INDEX_PROPERTIES),
    ]
    .into_iter()
    .find(|(_, properties)| properties.contains(&property))
    .map(|(category, _)| category)
}
