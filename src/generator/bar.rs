use tracing::debug;

use crate::core::ChartDocument;
use crate::data::ChartTableModel;
use crate::error::ChartResult;
use crate::generator::common::{apply_series_attributes, base_category_chart};
use crate::generator::{CategoryChart, ChartGenerator, ChartType};

/// Plain category bar chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChartGenerator;

impl ChartGenerator for BarChartGenerator {
    fn chart_type(&self) -> ChartType {
        ChartType::Bar
    }

    fn create_chart(
        &self,
        document: &ChartDocument,
        data: &ChartTableModel,
    ) -> ChartResult<CategoryChart> {
        let mut chart = base_category_chart(self.chart_type(), document, data);
        let series = document.series_elements();
        let series_count = chart.dataset.series_count();
        apply_series_attributes(document, &series, data, series_count, &mut chart.renderer);
        debug!(
            series_elements = series.len(),
            dataset_series = series_count,
            "created bar chart"
        );
        Ok(chart)
    }
}
