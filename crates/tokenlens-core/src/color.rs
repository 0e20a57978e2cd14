// ABOUTME: Minimal CSS colour parsing for swatch rendering
// ABOUTME: Understands hex, rgb(a), hsl(a), transparent and the common named colours

/// An sRGB colour with straight alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn is_translucent(&self) -> bool {
        self.a < 1.0
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("black", Rgba::opaque(0, 0, 0)),
    ("white", Rgba::opaque(255, 255, 255)),
    ("red", Rgba::opaque(255, 0, 0)),
    ("green", Rgba::opaque(0, 128, 0)),
    ("lime", Rgba::opaque(0, 255, 0)),
    ("blue", Rgba::opaque(0, 0, 255)),
    ("yellow", Rgba::opaque(255, 255, 0)),
    ("cyan", Rgba::opaque(0, 255, 255)),
    ("aqua", Rgba::opaque(0, 255, 255)),
    ("magenta", Rgba::opaque(255, 0, 255)),
    ("fuchsia", Rgba::opaque(255, 0, 255)),
    ("gray", Rgba::opaque(128, 128, 128)),
    ("grey", Rgba::opaque(128, 128, 128)),
    ("silver", Rgba::opaque(192, 192, 192)),
    ("maroon", Rgba::opaque(128, 0, 0)),
    ("olive", Rgba::opaque(128, 128, 0)),
    ("purple", Rgba::opaque(128, 0, 128)),
    ("teal", Rgba::opaque(0, 128, 128)),
    ("navy", Rgba::opaque(0, 0, 128)),
    ("orange", Rgba::opaque(255, 165, 0)),
    ("pink", Rgba::opaque(255, 192, 203)),
    ("brown", Rgba::opaque(165, 42, 42)),
    ("gold", Rgba::opaque(255, 215, 0)),
    ("indigo", Rgba::opaque(75, 0, 130)),
    ("violet", Rgba::opaque(238, 130, 238)),
    ("coral", Rgba::opaque(255, 127, 80)),
    ("salmon", Rgba::opaque(250, 128, 114)),
    ("tomato", Rgba::opaque(255, 99, 71)),
    ("crimson", Rgba::opaque(220, 20, 60)),
    ("turquoise", Rgba::opaque(64, 224, 208)),
];

/// Parse a CSS colour value. Returns `None` for anything not understood.
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if value == "transparent" {
        return Some(Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
        });
    }
    if let Some(args) = function_args(&value, &["rgb", "rgba"]) {
        return parse_rgb(&args);
    }
    if let Some(args) = function_args(&value, &["hsl", "hsla"]) {
        return parse_hsl(&args);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, color)| *color)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expand = |digit: &str| u8::from_str_radix(&digit.repeat(2), 16).ok();
    let pair = |pair: &str| u8::from_str_radix(pair, 16).ok();

    let (r, g, b, a) = match hex.len() {
        3 | 4 => (
            expand(&hex[0..1])?,
            expand(&hex[1..2])?,
            expand(&hex[2..3])?,
            hex.get(3..4).map(expand).unwrap_or(Some(255))?,
        ),
        6 | 8 => (
            pair(&hex[0..2])?,
            pair(&hex[2..4])?,
            pair(&hex[4..6])?,
            hex.get(6..8).map(pair).unwrap_or(Some(255))?,
        ),
        _ => return None,
    };

    Some(Rgba {
        r,
        g,
        b,
        a: f32::from(a) / 255.0,
    })
}

/// Arguments of `name(...)` for any of `names`, split on commas, whitespace and `/`.
fn function_args(value: &str, names: &[&str]) -> Option<Vec<String>> {
    let open = value.find('(')?;
    let name = value[..open].trim();
    if !names.contains(&name) {
        return None;
    }
    let inner = value[open + 1..].strip_suffix(')')?;
    Some(
        inner
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn parse_alpha(part: Option<&String>) -> Option<f32> {
    match part {
        None => Some(1.0),
        Some(text) => {
            let alpha = match text.strip_suffix('%') {
                Some(percent) => percent.parse::<f32>().ok()? / 100.0,
                None => text.parse::<f32>().ok()?,
            };
            Some(alpha.clamp(0.0, 1.0))
        }
    }
}

fn parse_channel(text: &str) -> Option<u8> {
    let value = match text.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? * 2.55,
        None => text.parse::<f32>().ok()?,
    };
    Some(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_rgb(args: &[String]) -> Option<Rgba> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    Some(Rgba {
        r: parse_channel(&args[0])?,
        g: parse_channel(&args[1])?,
        b: parse_channel(&args[2])?,
        a: parse_alpha(args.get(3))?,
    })
}

fn parse_hsl(args: &[String]) -> Option<Rgba> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue = args[0].trim_end_matches("deg").parse::<f32>().ok()?;
    let saturation = args[1].strip_suffix('%')?.parse::<f32>().ok()? / 100.0;
    let lightness = args[2].strip_suffix('%')?.parse::<f32>().ok()? / 100.0;
    let (r, g, b) = hsl_to_rgb(
        hue.rem_euclid(360.0),
        saturation.clamp(0.0, 1.0),
        lightness.clamp(0.0, 1.0),
    );
    Some(Rgba {
        r,
        g,
        b,
        a: parse_alpha(args.get(3))?,
    })
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}
