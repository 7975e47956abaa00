use crate::core::ChartElement;
use crate::css::StyleKey;
use crate::render::{BorderStroke, StrokeStyle};

/// Outline width used when an element sets a border style but no width.
pub const DEFAULT_BORDER_WIDTH_PX: f64 = 1.0;

/// Builds the bar outline stroke from an element's top border.
///
/// Returns `None` when no visible border style is set or the width is zero.
#[must_use]
pub fn border_stroke(element: &ChartElement) -> Option<BorderStroke> {
    let style = element.layout_style();
    let stroke_style = style
        .keyword(StyleKey::BorderTopStyle)
        .and_then(StrokeStyle::from_border_style)?;
    let width = style
        .length(StyleKey::BorderTopWidth)
        .unwrap_or(DEFAULT_BORDER_WIDTH_PX);
    (width > 0.0).then_some(BorderStroke::new(width, stroke_style))
}
