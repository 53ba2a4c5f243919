//! Public pipeline entry points.

pub mod engine;
pub mod engine_config;

pub use engine::{DashboardBundle, DashboardOptions, Pipeline};
pub use engine_config::PipelineConfig;
