use crate::charts::{SOURCE_NOTE, thousands, title_font, titled};
use crate::core::frames::{DEFAULT_FRAME_LABEL_FORMAT, FrameSequence};
use crate::core::normalize::NormalizedData;
use crate::core::observation::DEFAULT_GROUP;
use crate::core::palette::group_color;
use crate::figure::{
    ColorSpec, Figure, GeoLayout, Layout, Marker, MarkerLine, SizeSpec, Title, Trace, UpdateMenu,
};

/// Options for the animated world-map bubble chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMapOptions {
    /// Total cases are divided by this to get a marker size.
    pub size_divisor: f64,
    pub frame_duration_ms: u32,
    pub transition_ms: u32,
    /// Frame duration while the play control is driving the animation.
    pub play_frame_duration_ms: u32,
    pub label_format: String,
}

impl Default for WorldMapOptions {
    fn default() -> Self {
        Self {
            size_divisor: 1_000.0,
            frame_duration_ms: 100,
            transition_ms: 100,
            play_frame_duration_ms: 200,
            label_format: DEFAULT_FRAME_LABEL_FORMAT.to_owned(),
        }
    }
}

impl WorldMapOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size_divisor(mut self, size_divisor: f64) -> Self {
        self.size_divisor = size_divisor;
        self
    }
}

/// Animated geographic bubble map of total cases, one trace per group.
#[must_use]
pub fn world_map(data: &NormalizedData, options: &WorldMapOptions) -> Figure {
    let sequence = FrameSequence::assemble(
        &data.dates,
        &options.label_format,
        options.frame_duration_ms,
        options.transition_ms,
        |date, _| day_traces(data, date, options),
    );
    let current = data
        .latest_date()
        .map(|date| day_traces(data, date, options))
        .unwrap_or_default();
    let slider = sequence.slider(None, 300);

    let layout = Layout::new()
        .with_title(Title::new(titled("COVID-19 Total Cases", SOURCE_NOTE)).with_font(title_font()))
        .with_showlegend(true)
        .with_geo(GeoLayout {
            scope: Some("world".to_owned()),
            landcolor: Some("rgb(217, 217, 217)".to_owned()),
            coastlinecolor: Some("#ffffff".to_owned()),
            countrycolor: Some("#ffffff".to_owned()),
            countrywidth: Some(0.5),
        })
        .with_updatemenus(vec![UpdateMenu::play_button(
            options.play_frame_duration_ms,
            options.play_frame_duration_ms,
        )])
        .with_sliders(vec![slider]);

    Figure::new(current, layout).with_frames(sequence.frames)
}

/// One scatter-geo trace per group with data on the given day.
///
/// Group iteration follows the normalizer's entity order, so the trace list
/// is identical across runs for the same dataset.
fn day_traces(
    data: &NormalizedData,
    date: chrono::NaiveDate,
    options: &WorldMapOptions,
) -> Vec<Trace> {
    let mut traces = Vec::new();
    for group in data.groups() {
        // The fallback group holds unmapped codes and the aggregate; neither
        // belongs on a per-country map.
        if group == DEFAULT_GROUP {
            continue;
        }

        let mut locations = Vec::new();
        let mut sizes = Vec::new();
        let mut texts = Vec::new();
        for series in data.entities.values() {
            if series.group != group || series.code.is_empty() {
                continue;
            }
            let Some(i) = series.index_of_date(date) else {
                continue;
            };
            locations.push(series.code.clone());
            sizes.push(series.total_cases[i] / options.size_divisor);
            texts.push(format!(
                "{}<BR>Total Cases: {}",
                series.display_name,
                thousands(series.total_cases[i])
            ));
        }
        if locations.is_empty() {
            continue;
        }

        traces.push(
            Trace::scatter_geo()
                .with_name(group)
                .with_locationmode("ISO-3")
                .with_locations(locations)
                .with_marker(Marker {
                    color: Some(ColorSpec::Single(group_color(group).to_owned())),
                    size: Some(SizeSpec::PerPoint(sizes)),
                    sizeref: None,
                    sizemode: Some("area".to_owned()),
                    line: Some(MarkerLine {
                        color: Some("#ffffff".to_owned()),
                        width: Some(0.5),
                    }),
                })
                .with_text(texts),
        );
    }
    traces
}
