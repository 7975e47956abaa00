use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Resolved style value attached to an element's layout style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StyleValue {
    /// Unspecified; the renderer keeps its own default.
    Auto,
    Color(Color),
    /// Length resolved to pixels.
    Length(f64),
    Number(f64),
    /// Lower-cased keyword.
    Keyword(String),
}

impl StyleValue {
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_length(&self) -> Option<f64> {
        match self {
            Self::Length(px) | Self::Number(px) => Some(*px),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// CSS text of the value, as it would appear in a declaration.
    #[must_use]
    pub fn css_text(&self) -> String {
        match self {
            Self::Auto => "auto".to_owned(),
            Self::Color(color) => format!(
                "rgba({}, {}, {}, {})",
                channel_to_u8(color.red),
                channel_to_u8(color.green),
                channel_to_u8(color.blue),
                color.alpha
            ),
            Self::Length(px) => format!("{px}px"),
            Self::Number(value) => format!("{value}"),
            Self::Keyword(keyword) => keyword.clone(),
        }
    }
}

fn channel_to_u8(value: f64) -> u8 {
    // Channels are validated to [0, 1] by the color handler.
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
