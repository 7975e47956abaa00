//! chart-doc: chart definition documents and chart renderer configuration.
//!
//! A chart definition is a tree of tagged elements with string attributes and
//! CSS-style layout properties. Generators query the tree for chart-level
//! flags and series/group elements and configure a category chart for an
//! external renderer.

pub mod api;
pub mod core;
pub mod css;
pub mod data;
pub mod error;
pub mod generator;
pub mod render;
pub mod telemetry;

pub use api::{ChartDocumentContext, ChartFactory, GeneratorConfig};
pub use crate::core::{ChartDocument, ChartElement, ElementId};
pub use error::{ChartError, ChartResult};
