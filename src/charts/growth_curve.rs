use crate::charts::{
    AXIS_TITLE_FONT_SIZE, SOURCE_NOTE, TITLE_FONT_FAMILY, entity_visibility, latest_label,
    title_font,
};
use crate::core::normalize::NormalizedData;
use crate::core::reindex::reindex_series;
use crate::core::series::{Basis, Metric, SeriesVariable};
use crate::figure::{Annotation, Axis, AxisKind, Coord, Figure, Font, Layout, Line, Title, Trace};

/// Options for the day-zero growth-curve comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthCurveOptions {
    pub metric: Metric,
    pub basis: Basis,
    /// Crossing point for day-zero reindexing (strictly exceeded).
    pub threshold: f64,
    pub default_visible: Vec<String>,
    /// Length of the doubling-time guide lines, in days.
    pub guide_horizon_days: usize,
    pub x_range: [f64; 2],
    pub y_range_log: [f64; 2],
}

impl Default for GrowthCurveOptions {
    fn default() -> Self {
        Self {
            metric: Metric::Cases,
            basis: Basis::Rolling,
            threshold: 100.0,
            default_visible: Vec::new(),
            guide_horizon_days: 90,
            x_range: [0.0, 130.0],
            y_range_log: [0.0, 6.0],
        }
    }
}

impl GrowthCurveOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn with_basis(mut self, basis: Basis) -> Self {
        self.basis = basis;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_default_visible(mut self, entities: Vec<String>) -> Self {
        self.default_visible = entities;
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, range: [f64; 2]) -> Self {
        self.x_range = range;
        self
    }

    #[must_use]
    pub fn with_y_range_log(mut self, range: [f64; 2]) -> Self {
        self.y_range_log = range;
        self
    }
}

/// Comparative growth curves on a day-zero axis with a log y scale.
///
/// Entities that never cross the threshold contribute no trace.
#[must_use]
pub fn growth_curve(data: &NormalizedData, options: &GrowthCurveOptions) -> Figure {
    let variable = SeriesVariable::count(options.metric, options.basis);
    let noun = hover_noun(options.metric, options.basis, data.window);

    let mut traces = Vec::new();
    for series in data.entities.values() {
        let Some(reindexed) = reindex_series(series, variable, options.threshold) else {
            continue;
        };

        let mut x: Vec<Coord> = Vec::new();
        let mut y: Vec<Coord> = Vec::new();
        for (day, value) in reindexed.points() {
            x.push(Coord::from(day));
            y.push(Coord::Num(value));
        }
        if x.is_empty() {
            continue;
        }

        let points = x.len();
        traces.push(
            Trace::scatter()
                .with_name(series.display_name.clone())
                .with_x(x)
                .with_y(y)
                .with_mode("lines")
                .with_line(Line {
                    color: Some(series.color.clone()),
                    shape: Some("linear".to_owned()),
                    ..Line::default()
                })
                .with_text(vec![series.display_name.clone(); points])
                .with_hovertemplate(format!(
                    "<br><b>%{{text}}</b><br><i>{noun}</i>: %{{y:,}}<extra></extra>"
                ))
                .with_visible(entity_visibility(&series.entity, &options.default_visible)),
        );
    }

    traces.push(doubling_trace("Doubling every three days", 3.0, options));
    traces.push(doubling_trace("Doubling every week", 7.0, options));

    let guide_font = Font::sized(10.0).with_family(TITLE_FONT_FAMILY);
    let top = options.y_range_log[1];
    let annotations = vec![
        Annotation::text_only("Doubling every <BR> 3 days")
            .with_xref("paper")
            .at(0.5, top - 0.3)
            .with_font(guide_font.clone()),
        Annotation::text_only("Doubling every <BR> week")
            .with_xref("paper")
            .at(0.93, top - 1.2)
            .with_font(guide_font),
    ];

    let layout = Layout::new()
        .with_title(Title::new(plot_title(data, options)).with_font(title_font()))
        .with_xaxis(
            Axis::titled(
                format!(
                    "Days since {} {} reached",
                    options.threshold,
                    options.metric.noun()
                ),
                AXIS_TITLE_FONT_SIZE,
            )
            .with_range(options.x_range),
        )
        .with_yaxis(
            Axis::titled(
                format!("{} (log scale)", options.metric.capitalized()),
                AXIS_TITLE_FONT_SIZE,
            )
            .with_kind(AxisKind::Log)
            .with_range(options.y_range_log),
        )
        .with_annotations(annotations);

    Figure::new(traces, layout)
}

fn plot_title(data: &NormalizedData, options: &GrowthCurveOptions) -> String {
    let heading = match options.basis {
        Basis::Rolling => format!(
            "COVID-19 {}: {} day rolling sum",
            options.metric.capitalized(),
            data.window
        ),
        Basis::Total => format!("COVID-19 {}: cumulative total", options.metric.capitalized()),
        Basis::Daily => format!("COVID-19 {}", options.metric.capitalized()),
    };
    format!(
        "<b>{heading}</b><BR>{}<br><span style=\"font-size: 11px;\">{SOURCE_NOTE}</span>",
        latest_label(data)
    )
}

fn hover_noun(metric: Metric, basis: Basis, window: usize) -> String {
    match basis {
        Basis::Rolling if window == 7 => format!("Weekly {}", metric.capitalized()),
        Basis::Rolling => format!("{window}-day {}", metric.capitalized()),
        Basis::Total => format!("Total {}", metric.capitalized()),
        Basis::Daily => format!("Daily {}", metric.capitalized()),
    }
}

/// Reference line showing a constant doubling time from the threshold.
fn doubling_trace(name: &str, doubling_days: f64, options: &GrowthCurveOptions) -> Trace {
    let factor = 2f64.powf(1.0 / doubling_days);
    let mut x: Vec<Coord> = Vec::with_capacity(options.guide_horizon_days);
    let mut y: Vec<Coord> = Vec::with_capacity(options.guide_horizon_days);
    for day in 0..options.guide_horizon_days {
        x.push(Coord::from(day));
        y.push(Coord::Num(options.threshold * factor.powi(day as i32)));
    }

    Trace::scatter()
        .with_name(name)
        .with_x(x)
        .with_y(y)
        .with_mode("lines")
        .with_line(Line {
            color: Some("#999999".to_owned()),
            dash: Some("dot".to_owned()),
            shape: Some("linear".to_owned()),
            width: None,
        })
        .with_hoverinfo("skip")
}
