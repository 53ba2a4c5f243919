use ordered_float::OrderedFloat;

use crate::charts::{AXIS_TITLE_FONT_SIZE, SOURCE_NOTE, thousands, title_font, titled};
use crate::core::frames::{DEFAULT_FRAME_LABEL_FORMAT, FrameSequence};
use crate::core::normalize::NormalizedData;
use crate::core::palette::group_color;
use crate::core::series::Series;
use crate::figure::{
    Annotation, Axis, ColorSpec, Coord, Figure, Font, Layout, Marker, Title, Trace,
};

/// Options for the animated death-rate ranking chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DeathRateOptions {
    /// Entities must strictly exceed this many total cases to be shown.
    pub min_total_cases: f64,
    /// Ranking cap per day.
    pub max_entities: usize,
    pub frame_duration_ms: u32,
    pub transition_ms: u32,
    pub label_format: String,
}

impl Default for DeathRateOptions {
    fn default() -> Self {
        Self {
            min_total_cases: 100.0,
            max_entities: 204,
            frame_duration_ms: 100,
            transition_ms: 100,
            label_format: DEFAULT_FRAME_LABEL_FORMAT.to_owned(),
        }
    }
}

impl DeathRateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_total_cases(mut self, min_total_cases: f64) -> Self {
        self.min_total_cases = min_total_cases;
        self
    }

    #[must_use]
    pub fn with_max_entities(mut self, max_entities: usize) -> Self {
        self.max_entities = max_entities;
        self
    }
}

/// Animated bar chart of death rate per entity, worst first.
#[must_use]
pub fn death_rate_bar(data: &NormalizedData, options: &DeathRateOptions) -> Figure {
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
    let slider = sequence.slider(Some("Date: "), 300);

    let footnote = Annotation::text_only(format!(
        "Note: Differences in the scope of testing <BR>for the virus and in reporting across \
         <BR> countries means that figures <BR> should be compared with caution; <BR> Only \
         entities with more than {} cases are shown",
        thousands(options.min_total_cases)
    ))
    .with_xref("paper")
    .with_font(Font::sized(10.0));
    let footnote = Annotation {
        xanchor: Some("right".to_owned()),
        yanchor: Some("bottom".to_owned()),
        x: Some(0.95),
        y: Some(20.0),
        bgcolor: Some("#ffffff".to_owned()),
        bordercolor: Some("#D3D3D3".to_owned()),
        ..footnote
    };

    let layout = Layout::new()
        .with_title(
            Title::new(titled(
                "Ratio of total reported deaths from COVID-19 to total reported cases",
                SOURCE_NOTE,
            ))
            .with_font(title_font()),
        )
        .with_yaxis(Axis::titled("%", AXIS_TITLE_FONT_SIZE))
        .with_annotations(vec![footnote])
        .with_sliders(vec![slider]);

    Figure::new(current, layout).with_frames(sequence.frames)
}

/// The single ranked bar trace for one day.
///
/// Entities whose death rate is undefined that day are excluded outright
/// rather than sorted to an extreme.
fn day_traces(data: &NormalizedData, date: chrono::NaiveDate, options: &DeathRateOptions) -> Vec<Trace> {
    let mut rows: Vec<(&Series, f64, f64)> = Vec::new();
    for series in data.entities.values() {
        let Some(i) = series.index_of_date(date) else {
            continue;
        };
        let total = series.total_cases[i];
        if total <= options.min_total_cases {
            continue;
        }
        let Some(rate) = series.death_rate[i] else {
            continue;
        };
        rows.push((series, rate, total));
    }

    rows.sort_by(|a, b| {
        OrderedFloat(b.1)
            .cmp(&OrderedFloat(a.1))
            .then_with(|| a.0.entity.cmp(&b.0.entity))
    });
    rows.truncate(options.max_entities);
    if rows.is_empty() {
        return Vec::new();
    }

    let x: Vec<Coord> = rows
        .iter()
        .map(|(series, _, _)| Coord::from(series.display_name.clone()))
        .collect();
    let y: Vec<Coord> = rows.iter().map(|&(_, rate, _)| Coord::Num(rate)).collect();
    let text: Vec<String> = rows
        .iter()
        .map(|(series, _, _)| series.display_name.clone())
        .collect();
    let colors: Vec<String> = rows
        .iter()
        .map(|(series, _, _)| group_color(&series.group).to_owned())
        .collect();
    let totals: Vec<f64> = rows.iter().map(|&(_, _, total)| total).collect();

    vec![
        Trace::bar()
            .with_name("")
            .with_x(x)
            .with_y(y)
            .with_text(text)
            .with_customdata(totals)
            .with_marker(Marker {
                color: Some(ColorSpec::PerPoint(colors)),
                ..Marker::default()
            })
            .with_hovertemplate(
                "<br><b>%{text}</b><br> Death Rate (%): %{y:0.1f}<br>Total Cases: \
                 %{customdata:,}<extra></extra>",
            ),
    ]
}
