use tracing::debug;

use crate::core::{ChartDocument, ChartElement, TAG_NAME_PLOT};
use crate::css::StyleKey;
use crate::data::ChartTableModel;
use crate::error::{ChartError, ChartResult};
use crate::generator::common::{apply_series_attributes, base_category_chart};
use crate::generator::{CategoryChart, ChartGenerator, ChartType, WaterfallPaints};

/// Waterfall bar chart: a bar chart whose first, last, rising and falling
/// bars are painted from the plot element's style.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterfallBarChartGenerator;

impl WaterfallBarChartGenerator {
    /// Overrides renderer defaults with concrete colors from `plot`; `auto`
    /// and unset properties keep the defaults.
    #[must_use]
    pub fn plot_paints(plot: &ChartElement) -> WaterfallPaints {
        let style = plot.layout_style();
        let defaults = WaterfallPaints::default();
        WaterfallPaints {
            first_bar: style
                .color(StyleKey::FirstBarColor)
                .unwrap_or(defaults.first_bar),
            last_bar: style
                .color(StyleKey::LastBarColor)
                .unwrap_or(defaults.last_bar),
            positive_bar: style
                .color(StyleKey::PositiveBarColor)
                .unwrap_or(defaults.positive_bar),
            negative_bar: style
                .color(StyleKey::NegativeBarColor)
                .unwrap_or(defaults.negative_bar),
        }
    }
}

impl ChartGenerator for WaterfallBarChartGenerator {
    fn chart_type(&self) -> ChartType {
        ChartType::Waterfall
    }

    fn create_chart(
        &self,
        document: &ChartDocument,
        data: &ChartTableModel,
    ) -> ChartResult<CategoryChart> {
        let plot = document
            .plot_element()
            .and_then(|id| document.element(id))
            .ok_or_else(|| ChartError::MissingElement {
                tag: TAG_NAME_PLOT.to_owned(),
            })?;

        let mut chart = base_category_chart(self.chart_type(), document, data);
        chart.renderer.waterfall = Some(Self::plot_paints(plot));

        let series = document.series_elements();
        let series_count = chart.dataset.series_count();
        apply_series_attributes(document, &series, data, series_count, &mut chart.renderer);
        debug!(
            series_elements = series.len(),
            dataset_series = series_count,
            "created waterfall chart"
        );
        Ok(chart)
    }
}
