use crate::core::normalize::{NegativeCounts, NormalizeOptions};

/// Construction-time configuration for a [`crate::Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    pub normalize: NormalizeOptions,
}

impl PipelineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.normalize.window = window;
        self
    }

    #[must_use]
    pub fn with_negative_counts(mut self, policy: NegativeCounts) -> Self {
        self.normalize.negative_counts = policy;
        self
    }
}
