pub mod coercion;
pub mod definition;
pub mod document;
pub mod element;

pub use coercion::{boolean_attribute_value, parse_boolean_token};
pub use definition::ChartDefinitionNode;
pub use document::{ChartDocument, Descendants};
pub use element::{
    ATTRIBUTE_BY_ROW, ATTRIBUTE_CATEGORICAL, ATTRIBUTE_COLUMN, ATTRIBUTE_STYLE,
    ATTRIBUTE_TOOLTIPS, ATTRIBUTE_TYPE, ATTRIBUTE_URLS, ATTRIBUTE_VISIBLE, ChartElement,
    ElementId, TAG_NAME_AXIS, TAG_NAME_CHART, TAG_NAME_GROUP, TAG_NAME_LABEL, TAG_NAME_LEGEND,
    TAG_NAME_PLOT, TAG_NAME_SERIES, TAG_NAME_SUBTITLE, TAG_NAME_TITLE,
};
