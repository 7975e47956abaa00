mod factory;
mod generator_config;

pub use factory::{ChartDocumentContext, ChartFactory};
pub use generator_config::GeneratorConfig;
