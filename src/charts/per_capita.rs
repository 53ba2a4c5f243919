use crate::charts::{
    AXIS_TITLE_FONT_SIZE, SOURCE_NOTE, entity_visibility, latest_label, thousands, title_font,
};
use crate::core::normalize::NormalizedData;
use crate::core::observation::AGGREGATE_ENTITY;
use crate::core::series::SeriesVariable;
use crate::figure::{
    Axis, ColorSpec, Coord, Figure, Layout, Marker, MarkerLine, SizeSpec, Title, Trace,
};

/// Options for the per-capita bubble scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct PerCapitaOptions {
    pub default_visible: Vec<String>,
    /// Population unit the rates are expressed per (100,000 by default).
    pub per: f64,
    /// Pixel size the largest population bubble maps to.
    pub max_bubble_px: f64,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
}

impl Default for PerCapitaOptions {
    fn default() -> Self {
        Self {
            default_visible: Vec::new(),
            per: 100_000.0,
            max_bubble_px: 150.0,
            x_range: [0.0, 700.0],
            y_range: [0.0, 70.0],
        }
    }
}

impl PerCapitaOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_visible(mut self, entities: Vec<String>) -> Self {
        self.default_visible = entities;
        self
    }

    #[must_use]
    pub fn with_per(mut self, per: f64) -> Self {
        self.per = per;
        self
    }
}

/// Total cases vs total deaths per capita, bubble area sized by population.
///
/// Entities without population data contribute no trace; the aggregate
/// entity is excluded since the chart is a cross-entity comparison.
#[must_use]
pub fn per_capita_scatter(data: &NormalizedData, options: &PerCapitaOptions) -> Figure {
    let Some(latest) = data.latest_date() else {
        return Figure::new(Vec::new(), Layout::new());
    };

    let max_population = data
        .entities
        .values()
        .filter(|series| series.entity != AGGREGATE_ENTITY)
        .filter_map(|series| series.population)
        .fold(0.0f64, f64::max);
    // Shared size reference so bubble areas stay comparable across traces.
    let sizeref = 2.0 * max_population / (options.max_bubble_px * options.max_bubble_px);

    let mut traces = Vec::new();
    for series in data.entities.values() {
        if series.entity == AGGREGATE_ENTITY {
            continue;
        }
        let (Some(cases_rate), Some(deaths_rate), Some(population)) = (
            series.value_on(SeriesVariable::CasesPerCapita, latest),
            series.value_on(SeriesVariable::DeathsPerCapita, latest),
            series.population,
        ) else {
            continue;
        };

        traces.push(
            Trace::scatter()
                .with_name(series.display_name.clone())
                .with_x(vec![Coord::Num(cases_rate * options.per)])
                .with_y(vec![Coord::Num(deaths_rate * options.per)])
                .with_mode("markers")
                .with_text(vec![series.display_name.clone()])
                .with_marker(Marker {
                    color: Some(ColorSpec::Single(series.color.clone())),
                    size: Some(SizeSpec::PerPoint(vec![population])),
                    sizeref: Some(sizeref),
                    sizemode: Some("area".to_owned()),
                    line: Some(MarkerLine {
                        color: Some("#ffffff".to_owned()),
                        width: None,
                    }),
                })
                .with_customdata(vec![population / 1_000_000.0])
                .with_hovertemplate(format!(
                    "<br><b>%{{text}}</b><br>Cases per 100k people: %{{x:0.1f}}<BR> Deaths per \
                     100k people: %{{y:0.1f}}<BR> Population ({}) %{{customdata:,.0f}}M\
                     <extra></extra>",
                    data.population_vintage
                ))
                .with_visible(entity_visibility(&series.entity, &options.default_visible)),
        );
    }

    let per_label = thousands(options.per);
    let layout = Layout::new()
        .with_title(
            Title::new(format!(
                "<b>Total cases of Covid-19 v Total deaths : per {per_label} population</b><BR>\
                 {}<br><span style=\"font-size: 11px;\">{SOURCE_NOTE}</span>",
                latest_label(data)
            ))
            .with_font(title_font()),
        )
        .with_xaxis(
            Axis::titled(format!("Cases per {per_label} population"), AXIS_TITLE_FONT_SIZE)
                .with_range(options.x_range),
        )
        .with_yaxis(
            Axis::titled(
                format!("Deaths per {per_label} population"),
                AXIS_TITLE_FONT_SIZE,
            )
            .with_range(options.y_range),
        );

    Figure::new(traces, layout)
}
