use thiserror::Error;

use crate::core::ElementId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid chart definition: {0}")]
    InvalidDefinition(String),

    #[error("invalid value for style `{property}`: {reason}")]
    InvalidStyle { property: String, reason: String },

    #[error("unknown element id {0:?}")]
    UnknownElement(ElementId),

    #[error("chart definition has no `{tag}` element")]
    MissingElement { tag: String },

    #[error("unsupported chart type: {0}")]
    UnsupportedChartType(String),
}
