use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::generator::ChartType;

/// Chart factory configuration.
///
/// This type is serializable so host applications can persist/load chart
/// generation setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Used when the `chart` element carries no `type` attribute.
    #[serde(default)]
    pub default_chart_type: ChartType,
    /// Resolve inline `style` attributes while loading.
    #[serde(default = "default_resolve_inline_styles")]
    pub resolve_inline_styles: bool,
    /// Fail loading on invalid style declarations instead of dropping them.
    #[serde(default)]
    pub strict_styles: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_chart_type: ChartType::Bar,
            resolve_inline_styles: true,
            strict_styles: false,
        }
    }

    #[must_use]
    pub fn with_default_chart_type(mut self, chart_type: ChartType) -> Self {
        self.default_chart_type = chart_type;
        self
    }

    #[must_use]
    pub fn with_inline_styles(mut self, enabled: bool) -> Self {
        self.resolve_inline_styles = enabled;
        self
    }

    #[must_use]
    pub fn with_strict_styles(mut self, strict: bool) -> Self {
        self.strict_styles = strict;
        self
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))
    }
}

fn default_resolve_inline_styles() -> bool {
    true
}
