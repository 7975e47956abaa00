//! Chart generators: one per chart type, each reading configuration off a
//! `ChartDocument` and producing a renderer-ready `CategoryChart`.

mod bar;
mod chart;
mod common;
mod waterfall;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ChartDocument;
use crate::data::ChartTableModel;
use crate::error::{ChartError, ChartResult};

pub use bar::BarChartGenerator;
pub use chart::{
    BarRendererState, CategoryChart, PlotOrientation, SeriesRenderStyle, WaterfallPaints,
};
pub use common::series_column;
pub use waterfall::WaterfallBarChartGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Bar,
    Waterfall,
}

impl ChartType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Waterfall => "waterfall",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "waterfall" => Ok(Self::Waterfall),
            other => Err(ChartError::UnsupportedChartType(other.to_owned())),
        }
    }
}

/// Builds a chart of one type from a chart document and its data.
pub trait ChartGenerator {
    fn chart_type(&self) -> ChartType;

    fn create_chart(
        &self,
        document: &ChartDocument,
        data: &ChartTableModel,
    ) -> ChartResult<CategoryChart>;
}

#[must_use]
pub fn generator_for(chart_type: ChartType) -> Box<dyn ChartGenerator> {
    match chart_type {
        ChartType::Bar => Box::new(BarChartGenerator),
        ChartType::Waterfall => Box::new(WaterfallBarChartGenerator),
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartType, generator_for};

    #[test]
    fn chart_type_parsing_is_case_insensitive() {
        assert_eq!(
            " Waterfall ".parse::<ChartType>().expect("waterfall"),
            ChartType::Waterfall
        );
        assert!(matches!(
            "pie".parse::<ChartType>(),
            Err(crate::ChartError::UnsupportedChartType(name)) if name == "pie"
        ));
    }

    #[test]
    fn factory_returns_generator_of_requested_type() {
        for chart_type in [ChartType::Bar, ChartType::Waterfall] {
            assert_eq!(generator_for(chart_type).chart_type(), chart_type);
        }
    }
}
