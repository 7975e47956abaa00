use crate::error::ChartResult;
use crate::generator::CategoryChart;
use crate::render::Renderer;

/// No-op renderer used by tests and headless generation.
///
/// It still validates the chart so tests catch invalid renderer
/// configuration before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub rendered_charts: usize,
    pub last_series_count: usize,
    pub last_category_count: usize,
    pub last_outlined_series: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, chart: &CategoryChart) -> ChartResult<()> {
        chart.validate()?;
        self.rendered_charts += 1;
        self.last_series_count = chart.dataset.series_count();
        self.last_category_count = chart.dataset.category_count();
        self.last_outlined_series = chart
            .renderer
            .series
            .values()
            .filter(|style| style.outline_stroke.is_some())
            .count();
        Ok(())
    }
}
