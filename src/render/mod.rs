mod null_renderer;
mod primitives;
mod stroke;

pub use null_renderer::NullRenderer;
pub use primitives::{BorderStroke, Color, StrokeStyle};
pub use stroke::{DEFAULT_BORDER_WIDTH_PX, border_stroke};

use crate::error::ChartResult;
use crate::generator::CategoryChart;

/// Contract implemented by any chart rendering backend.
///
/// Backends receive a fully configured `CategoryChart` so drawing code stays
/// isolated from the chart document and its styling.
pub trait Renderer {
    fn render(&mut self, chart: &CategoryChart) -> ChartResult<()>;
}
