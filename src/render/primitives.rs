use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, u8::MAX)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash policy for bar outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl StrokeStyle {
    /// Maps a CSS border-style keyword; `none`/`hidden` and unknown keywords
    /// have no stroke.
    #[must_use]
    pub fn from_border_style(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// Outline stroke applied to one series' bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderStroke {
    pub width: f64,
    pub style: StrokeStyle,
}

impl BorderStroke {
    #[must_use]
    pub const fn new(width: f64, style: StrokeStyle) -> Self {
        Self { width, style }
    }

    /// On/off dash lengths in pixels, empty for continuous strokes.
    #[must_use]
    pub fn dash_pattern(self) -> Vec<f64> {
        match self.style {
            StrokeStyle::Solid | StrokeStyle::Double => Vec::new(),
            StrokeStyle::Dashed => vec![self.width * 3.0, self.width * 3.0],
            StrokeStyle::Dotted => vec![self.width, self.width],
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "outline stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
