use crate::css::{LexicalUnit, StyleKey, StyleValue};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const BORDER_STYLE_KEYWORDS: &[&str] = &["none", "hidden", "solid", "dashed", "dotted", "double"];

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("magenta", [255, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("teal", [0, 128, 128]),
];

/// Parses a lexical unit into a `StyleValue` for one family of properties.
///
/// `StyleKey::handler` picks the variant for each property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleValueHandler {
    Color,
    /// Like `Color`, but also accepts the `auto` identifier.
    AutoColor,
    Length,
    BorderStyle,
    Keyword(&'static [&'static str]),
}

impl StyleValueHandler {
    pub fn create_value(self, key: StyleKey, unit: &LexicalUnit) -> ChartResult<StyleValue> {
        match self {
            Self::AutoColor => {
                if unit
                    .as_ident()
                    .is_some_and(|ident| ident.eq_ignore_ascii_case("auto"))
                {
                    return Ok(StyleValue::Auto);
                }
                Self::Color.create_value(key, unit)
            }
            Self::Color => parse_color(key, unit).map(StyleValue::Color),
            Self::Length => parse_length(key, unit).map(StyleValue::Length),
            Self::BorderStyle => parse_keyword(key, unit, BORDER_STYLE_KEYWORDS),
            Self::Keyword(allowed) => parse_keyword(key, unit, allowed),
        }
    }
}

fn parse_color(key: StyleKey, unit: &LexicalUnit) -> ChartResult<Color> {
    match unit {
        LexicalUnit::Ident(name) => {
            if name.eq_ignore_ascii_case("transparent") {
                return Ok(Color::rgba(0.0, 0.0, 0.0, 0.0));
            }
            NAMED_COLORS
                .iter()
                .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
                .map(|(_, [r, g, b])| Color::from_rgb8(*r, *g, *b))
                .ok_or_else(|| invalid(key, format!("unknown color name `{name}`")))
        }
        LexicalUnit::Hash(hex) => parse_hex_color(key, hex),
        LexicalUnit::Function { name, args } => parse_rgb_function(key, name, args),
        other => Err(invalid(key, format!("expected a color, got {other:?}"))),
    }
}

fn parse_hex_color(key: StyleKey, hex: &str) -> ChartResult<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid(key, format!("malformed hex color `#{hex}`")));
    }
    let digits: Vec<u8> = hex
        .chars()
        .filter_map(|ch| ch.to_digit(16))
        .map(|digit| digit as u8)
        .collect();
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 16 + d).collect(),
        6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
        _ => return Err(invalid(key, format!("malformed hex color `#{hex}`"))),
    };
    let alpha = channels.get(3).copied().unwrap_or(u8::MAX);
    Ok(Color::from_rgba8(channels[0], channels[1], channels[2], alpha))
}

fn parse_rgb_function(key: StyleKey, name: &str, args: &[LexicalUnit]) -> ChartResult<Color> {
    let expected = match name {
        "rgb" => 3,
        "rgba" => 4,
        other => return Err(invalid(key, format!("unsupported color function `{other}`"))),
    };
    if args.len() != expected {
        return Err(invalid(
            key,
            format!("`{name}()` takes {expected} arguments, got {}", args.len()),
        ));
    }

    let mut channels = [0.0; 3];
    for (slot, arg) in channels.iter_mut().zip(args) {
        *slot = match arg {
            LexicalUnit::Number(value) => value / 255.0,
            LexicalUnit::Percentage(value) => value / 100.0,
            other => return Err(invalid(key, format!("invalid color channel {other:?}"))),
        };
    }
    let alpha = match args.get(3) {
        None => 1.0,
        Some(LexicalUnit::Number(value)) => *value,
        Some(LexicalUnit::Percentage(value)) => value / 100.0,
        Some(other) => return Err(invalid(key, format!("invalid alpha channel {other:?}"))),
    };

    let color = Color::rgba(channels[0], channels[1], channels[2], alpha);
    color
        .validate()
        .map_err(|e| invalid(key, e.to_string()))?;
    Ok(color)
}

fn parse_length(key: StyleKey, unit: &LexicalUnit) -> ChartResult<f64> {
    let px = match unit {
        LexicalUnit::Number(value) => *value,
        LexicalUnit::Dimension { value, unit } => match unit.as_str() {
            "px" => *value,
            "pt" => value * 4.0 / 3.0,
            other => return Err(invalid(key, format!("unsupported length unit `{other}`"))),
        },
        LexicalUnit::Ident(keyword) => match keyword.to_ascii_lowercase().as_str() {
            "thin" => 1.0,
            "medium" => 3.0,
            "thick" => 5.0,
            other => return Err(invalid(key, format!("unknown length keyword `{other}`"))),
        },
        other => return Err(invalid(key, format!("expected a length, got {other:?}"))),
    };
    if px < 0.0 {
        return Err(invalid(key, "length must be >= 0".to_owned()));
    }
    Ok(px)
}

fn parse_keyword(key: StyleKey, unit: &LexicalUnit, allowed: &[&str]) -> ChartResult<StyleValue> {
    let keyword = match unit {
        LexicalUnit::Ident(ident) | LexicalUnit::String(ident) => ident.to_ascii_lowercase(),
        other => return Err(invalid(key, format!("expected a keyword, got {other:?}"))),
    };
    if allowed.contains(&keyword.as_str()) {
        Ok(StyleValue::Keyword(keyword))
    } else {
        Err(invalid(key, format!("unexpected keyword `{keyword}`")))
    }
}

fn invalid(key: StyleKey, reason: String) -> ChartError {
    ChartError::InvalidStyle {
        property: key.css_name().to_owned(),
        reason,
    }
}
