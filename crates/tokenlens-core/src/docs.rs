// ABOUTME: Renders resolved tokens into markdown tables with inline colour swatches
// ABOUTME: Covers scale tokens, colour tokens, theme colour sets, shorthand notes and variants

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use tokenlens_types::{Category, ResolvedToken, ThemeToken, ThemeValue, VariantDescription};

use crate::color::parse_color;
use crate::normalize::THEME_SEPARATOR;

const INDENT: &str = "&nbsp;&nbsp;";

const CHECKERBOARD: &str = concat!(
    "<defs>",
    "<pattern id=\"pattern-checker\" x=\"0\" y=\"0\" width=\"8\" height=\"8\" patternUnits=\"userSpaceOnUse\">",
    "<rect x=\"0\" y=\"0\" width=\"4\" height=\"4\" fill=\"#fff\" />",
    "<rect x=\"4\" y=\"0\" width=\"4\" height=\"4\" fill=\"#000\" />",
    "<rect x=\"0\" y=\"4\" width=\"4\" height=\"4\" fill=\"#000\" />",
    "<rect x=\"4\" y=\"4\" width=\"4\" height=\"4\" fill=\"#fff\" />",
    "</pattern>",
    "</defs>",
    "<rect x=\"1\" y=\"1\" width=\"22\" height=\"22\" rx=\"4\" fill=\"url(#pattern-checker)\" />",
);

/// Inline SVG swatch for a colour value, or an empty string when the value is
/// not a colour we can parse.
pub fn color_swatch(value: &str, tile_size: u32) -> String {
    let Some(color) = parse_color(value) else {
        return String::new();
    };

    let backdrop = if color.is_translucent() { CHECKERBOARD } else { "" };
    let fill = escape_attribute(value);
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" width=\"{tile_size}\" height=\"{tile_size}\">{backdrop}<rect x=\"1\" y=\"1\" width=\"22\" height=\"22\" fill=\"{fill}\" rx=\"4\" /></svg>"
    );
    format!("![Image](data:image/svg+xml;base64,{})", STANDARD.encode(svg))
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("| {} |", header.join(" | ")));
    lines.push(format!(
        "| {} |",
        header.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
    ));
    for row in rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.join("\n")
}

/// Two-row table for a non-colour scale token.
pub fn token_table(category: Category, value: &str) -> String {
    render_table(
        &["Scale", "Value"],
        &[vec![category.title().to_string(), value.to_string()]],
    )
}

/// Two-row table for a plain colour token.
pub fn color_table(value: &str, tile_size: u32) -> String {
    render_table(
        &["Color", "Value"],
        &[vec![color_swatch(value, tile_size), format!("`{value}`")]],
    )
}

/// One row per theme, keeping the normalizer's order. Runs of two or more
/// sub-themes sharing a parent are grouped under a header row.
pub fn theme_table(token: &ThemeToken, tile_size: u32) -> String {
    let mut rows = Vec::with_capacity(token.per_theme.len());

    for run in parent_runs(&token.per_theme) {
        match parent_of(&run[0].theme) {
            Some(parent) if run.len() > 1 => {
                rows.push(vec![
                    String::new(),
                    format!("**{}**", title_case(parent)),
                    String::new(),
                ]);
                for entry in run {
                    let leaf = &entry.theme[parent.len() + 1..];
                    rows.push(theme_row(entry, format!("{INDENT}{}", title_case(leaf)), tile_size));
                }
            }
            _ => {
                for entry in run {
                    rows.push(theme_row(entry, format!("**{}**", title_case(&entry.theme)), tile_size));
                }
            }
        }
    }

    render_table(&["Color", "Theme", "Value"], &rows)
}

fn theme_row(entry: &ThemeValue, label: String, tile_size: u32) -> Vec<String> {
    vec![
        color_swatch(&entry.value, tile_size),
        label,
        format!("`{}`", entry.value),
    ]
}

/// Splits entries into maximal runs of consecutive themes with the same parent.
fn parent_runs(entries: &[ThemeValue]) -> Vec<&[ThemeValue]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for index in 1..=entries.len() {
        let boundary = index == entries.len()
            || parent_of(&entries[index].theme) != parent_of(&entries[start].theme);
        if boundary {
            runs.push(&entries[start..index]);
            start = index;
        }
    }
    runs
}

fn parent_of(theme: &str) -> Option<&str> {
    theme
        .rfind(THEME_SEPARATOR)
        .map(|separator| &theme[..separator])
}

/// `dark_green_alt` -> `Dark Green Alt`.
pub fn title_case(name: &str) -> String {
    name.split(THEME_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Table for whatever the resolver found.
pub fn resolved_table(resolved: &ResolvedToken, tile_size: u32) -> String {
    match resolved {
        ResolvedToken::Theme(theme) => theme_table(theme, tile_size),
        ResolvedToken::Scale(scale) if scale.category == Category::Color => {
            color_table(&scale.value, tile_size)
        }
        ResolvedToken::Scale(scale) => token_table(scale.category, &scale.value),
    }
}

pub fn shorthand_note(shorthand: &str, property: &str) -> String {
    format!("`{shorthand}` is short for `{property}`")
}

/// `| Variant | Values |` table; `None` when there is nothing to list.
pub fn variants_summary(variants: &[VariantDescription]) -> Option<String> {
    if variants.is_empty() {
        return None;
    }
    let rows: Vec<Vec<String>> = variants
        .iter()
        .map(|variant| {
            let values = if variant.values.is_empty() {
                "-".to_string()
            } else {
                variant
                    .values
                    .iter()
                    .map(|value| format!("`{value}`"))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            vec![format!("`{}`", variant.name), values]
        })
        .collect();
    Some(render_table(&["Variant", "Values"], &rows))
}
