use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::CategoryDataset;
use crate::error::{ChartError, ChartResult};
use crate::generator::ChartType;
use crate::render::{BorderStroke, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Per-series renderer overrides. `None` keeps the renderer default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesRenderStyle {
    pub paint: Option<Color>,
    pub outline_paint: Option<Color>,
    pub outline_stroke: Option<BorderStroke>,
    pub item_labels_visible: Option<bool>,
}

/// Bar colors specific to waterfall plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterfallPaints {
    pub first_bar: Color,
    pub last_bar: Color,
    pub positive_bar: Color,
    pub negative_bar: Color,
}

impl Default for WaterfallPaints {
    fn default() -> Self {
        Self {
            first_bar: Color::from_rgb8(0x22, 0x22, 0xFF),
            last_bar: Color::from_rgb8(0xFF, 0xFF, 0x22),
            positive_bar: Color::from_rgb8(0x22, 0xFF, 0x22),
            negative_bar: Color::from_rgb8(0xFF, 0x22, 0x22),
        }
    }
}

/// Configuration handed to a bar renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarRendererState {
    pub draw_bar_outline: bool,
    /// Keyed by dataset series index.
    pub series: IndexMap<usize, SeriesRenderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waterfall: Option<WaterfallPaints>,
}

impl BarRendererState {
    pub fn series_mut(&mut self, column: usize) -> &mut SeriesRenderStyle {
        self.series.entry(column).or_default()
    }

    #[must_use]
    pub fn series(&self, column: usize) -> Option<&SeriesRenderStyle> {
        self.series.get(&column)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for style in self.series.values() {
            for color in [style.paint, style.outline_paint].into_iter().flatten() {
                color.validate()?;
            }
            if let Some(stroke) = style.outline_stroke {
                stroke.validate()?;
            }
        }
        if let Some(paints) = self.waterfall {
            for color in [
                paints.first_bar,
                paints.last_bar,
                paints.positive_bar,
                paints.negative_bar,
            ] {
                color.validate()?;
            }
        }
        Ok(())
    }
}

/// A configured category chart, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChart {
    pub chart_type: ChartType,
    pub title: Option<String>,
    pub category_axis_label: Option<String>,
    pub value_axis_label: Option<String>,
    pub orientation: PlotOrientation,
    pub legend: bool,
    pub tooltips: bool,
    pub urls: bool,
    pub dataset: CategoryDataset,
    pub renderer: BarRendererState,
}

impl CategoryChart {
    pub fn validate(&self) -> ChartResult<()> {
        self.dataset.validate()?;
        if let Some(column) = self
            .renderer
            .series
            .keys()
            .find(|column| **column >= self.dataset.series_count())
        {
            return Err(ChartError::InvalidData(format!(
                "renderer styles series {column} but dataset has {} series",
                self.dataset.series_count()
            )));
        }
        self.renderer.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart json: {e}")))
    }
}
