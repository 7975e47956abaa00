use tracing::debug;

use crate::core::{ATTRIBUTE_TYPE, ChartDocument};
use crate::css::StyleResolver;
use crate::data::ChartTableModel;
use crate::error::ChartResult;
use crate::generator::{CategoryChart, ChartType, generator_for};
use crate::render::Renderer;

use super::GeneratorConfig;

/// A loaded chart document whose styles have been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDocumentContext {
    document: ChartDocument,
}

impl ChartDocumentContext {
    #[must_use]
    pub fn new(document: ChartDocument) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn chart_document(&self) -> &ChartDocument {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> ChartDocument {
        self.document
    }
}

/// Loads chart definitions and dispatches them to the generator of their
/// chart type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartFactory {
    config: GeneratorConfig,
}

impl ChartFactory {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Wraps an already-built document, resolving inline styles per config.
    pub fn load_document(&self, mut document: ChartDocument) -> ChartResult<ChartDocumentContext> {
        if self.config.resolve_inline_styles {
            let resolver = if self.config.strict_styles {
                StyleResolver::strict()
            } else {
                StyleResolver::new()
            };
            resolver.resolve_document(&mut document)?;
        }
        Ok(ChartDocumentContext::new(document))
    }

    pub fn load_json(&self, input: &str) -> ChartResult<ChartDocumentContext> {
        self.load_document(ChartDocument::from_json_str(input)?)
    }

    /// Chart type named by the `chart` element, else the configured default.
    pub fn chart_type(&self, document: &ChartDocument) -> ChartResult<ChartType> {
        match document
            .chart_element()
            .and_then(|id| document.element(id))
            .and_then(|chart| chart.attribute(ATTRIBUTE_TYPE))
        {
            Some(name) => name.parse(),
            None => Ok(self.config.default_chart_type),
        }
    }

    pub fn generate(
        &self,
        context: &ChartDocumentContext,
        data: &ChartTableModel,
    ) -> ChartResult<CategoryChart> {
        let document = context.chart_document();
        let chart_type = self.chart_type(document)?;
        debug!(chart_type = %chart_type, elements = document.len(), "generating chart");
        generator_for(chart_type).create_chart(document, data)
    }

    /// Generates the chart and hands it to `renderer`.
    pub fn render<R: Renderer>(
        &self,
        context: &ChartDocumentContext,
        data: &ChartTableModel,
        renderer: &mut R,
    ) -> ChartResult<CategoryChart> {
        let chart = self.generate(context, data)?;
        renderer.render(&chart)?;
        Ok(chart)
    }
}
