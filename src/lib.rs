//! epicurve-rs: epidemic time-series pipeline and chart composer.
//!
//! This crate turns a raw daily table of per-entity case/death counts into
//! normalized analytical series and declarative, serializable chart
//! specifications (traces, layout, animation frames, slider steps) for a
//! dashboard rendering layer to consume as-is.

pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod figure;
pub mod loader;
pub mod telemetry;

pub use api::{Pipeline, PipelineConfig};
pub use error::{PipelineError, PipelineResult};
