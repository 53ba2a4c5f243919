use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::figure::{Frame, Slider, Step, Trace};

/// Default frame label format. Includes the year so labels stay unique on
/// datasets spanning a year boundary.
pub const DEFAULT_FRAME_LABEL_FORMAT: &str = "%d %b %Y";

#[must_use]
pub fn frame_label(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// An ordered animation: one frame per distinct date, each paired with the
/// navigation step the playback control uses to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    pub frames: Vec<Frame>,
    pub steps: Vec<Step>,
}

impl FrameSequence {
    /// Builds one frame per distinct date, ascending.
    ///
    /// `build` receives the date and its label and returns the frame's trace
    /// list; a date where some entities have no data simply yields fewer
    /// traces. Dates are deduplicated and sorted here so every caller gets
    /// the full-coverage, unique-label guarantee regardless of input order.
    pub fn assemble<F>(
        dates: &[NaiveDate],
        label_format: &str,
        frame_duration_ms: u32,
        transition_ms: u32,
        mut build: F,
    ) -> Self
    where
        F: FnMut(NaiveDate, &str) -> Vec<Trace>,
    {
        let distinct: BTreeSet<NaiveDate> = dates.iter().copied().collect();

        let mut frames = Vec::with_capacity(distinct.len());
        let mut steps = Vec::with_capacity(distinct.len());
        for date in distinct {
            let label = frame_label(date, label_format);
            let data = build(date, &label);
            frames.push(Frame {
                name: label.clone(),
                data,
            });
            steps.push(Step {
                label: label.clone(),
                target: label,
                frame_duration_ms,
                transition_ms,
            });
        }

        debug!(frames = frames.len(), "assembled frame sequence");
        Self { frames, steps }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Slider over the steps, initially positioned on the last frame.
    #[must_use]
    pub fn slider(&self, current_value_prefix: Option<&str>, transition_ms: u32) -> Slider {
        Slider {
            active: self.len().saturating_sub(1),
            current_value_prefix: current_value_prefix.map(str::to_owned),
            transition_ms,
            steps: self.steps.clone(),
        }
    }
}
