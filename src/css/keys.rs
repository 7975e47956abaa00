use serde::{Deserialize, Serialize};

use crate::css::StyleValueHandler;

const ORIENTATION_KEYWORDS: &[&str] = &["vertical", "horizontal"];
const VISIBILITY_KEYWORDS: &[&str] = &["visible", "hidden"];

/// Style properties understood by the chart generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKey {
    Color,
    FirstBarColor,
    LastBarColor,
    PositiveBarColor,
    NegativeBarColor,
    BorderTopColor,
    BorderTopStyle,
    BorderTopWidth,
    Orientation,
    ItemLabelVisible,
}

impl StyleKey {
    pub const ALL: [Self; 10] = [
        Self::Color,
        Self::FirstBarColor,
        Self::LastBarColor,
        Self::PositiveBarColor,
        Self::NegativeBarColor,
        Self::BorderTopColor,
        Self::BorderTopStyle,
        Self::BorderTopWidth,
        Self::Orientation,
        Self::ItemLabelVisible,
    ];

    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::FirstBarColor => "first-bar-color",
            Self::LastBarColor => "last-bar-color",
            Self::PositiveBarColor => "positive-bar-color",
            Self::NegativeBarColor => "negative-bar-color",
            Self::BorderTopColor => "border-top-color",
            Self::BorderTopStyle => "border-top-style",
            Self::BorderTopWidth => "border-top-width",
            Self::Orientation => "orientation",
            Self::ItemLabelVisible => "item-label-visible",
        }
    }

    /// Case-insensitive property-name lookup.
    #[must_use]
    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.css_name().eq_ignore_ascii_case(name.trim()))
    }

    /// The value handler responsible for parsing this property.
    #[must_use]
    pub const fn handler(self) -> StyleValueHandler {
        match self {
            Self::Color => StyleValueHandler::Color,
            Self::FirstBarColor
            | Self::LastBarColor
            | Self::PositiveBarColor
            | Self::NegativeBarColor
            | Self::BorderTopColor => StyleValueHandler::AutoColor,
            Self::BorderTopStyle => StyleValueHandler::BorderStyle,
            Self::BorderTopWidth => StyleValueHandler::Length,
            Self::Orientation => StyleValueHandler::Keyword(ORIENTATION_KEYWORDS),
            Self::ItemLabelVisible => StyleValueHandler::Keyword(VISIBILITY_KEYWORDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StyleKey;

    #[test]
    fn css_names_round_trip() {
        for key in StyleKey::ALL {
            assert_eq!(StyleKey::from_css_name(key.css_name()), Some(key));
        }
        assert_eq!(
            StyleKey::from_css_name(" Border-Top-Color "),
            Some(StyleKey::BorderTopColor)
        );
        assert_eq!(StyleKey::from_css_name("margin"), None);
    }
}
