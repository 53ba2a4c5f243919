use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::figure::layout::Layout;
use crate::figure::trace::Trace;

pub const FIGURE_JSON_SCHEMA_V1: u32 = 1;

/// One animation snapshot: every trace of the figure as of one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Trace>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FigureConfig {
    pub scroll_zoom: bool,
}

/// A complete declarative chart specification.
///
/// This is the hand-off contract to the rendering layer: data plus layout
/// plus optional animation frames, with no behavior of its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub config: FigureConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureJsonContractV1 {
    pub schema_version: u32,
    pub figure: Figure,
}

impl Figure {
    #[must_use]
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data,
            layout,
            frames: Vec::new(),
            config: FigureConfig::default(),
        }
    }

    #[must_use]
    pub fn with_frames(mut self, frames: Vec<Frame>) -> Self {
        self.frames = frames;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: FigureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn to_json_contract_v1_pretty(&self) -> PipelineResult<String> {
        let payload = FigureJsonContractV1 {
            schema_version: FIGURE_JSON_SCHEMA_V1,
            figure: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Parses either a bare figure or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PipelineResult<Self> {
        if let Ok(figure) = serde_json::from_str::<Figure>(input) {
            return Ok(figure);
        }
        let payload: FigureJsonContractV1 = serde_json::from_str(input)?;
        if payload.schema_version != FIGURE_JSON_SCHEMA_V1 {
            return Err(crate::error::PipelineError::InvalidData(format!(
                "unsupported figure schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.figure)
    }
}
