use crate::charts::{SOURCE_NOTE, latest_label, thousands, title_font};
use crate::core::normalize::NormalizedData;
use crate::core::observation::AGGREGATE_ENTITY;
use crate::figure::{
    Axis, ColorSpec, Coord, Figure, Layout, Marker, Orientation, Title, Trace, Visibility,
};

const CATEGORIES: [&str; 4] = [
    "Total Cases",
    "Total Deaths",
    "Latest Daily Cases",
    "Latest Daily Deaths",
];

/// Options for the headline-figures bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineOptions {
    /// Bar color for the aggregate entity's default-visible trace.
    pub aggregate_color: String,
}

impl Default for HeadlineOptions {
    fn default() -> Self {
        Self {
            aggregate_color: "firebrick".to_owned(),
        }
    }
}

impl HeadlineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_aggregate_color(mut self, color: impl Into<String>) -> Self {
        self.aggregate_color = color.into();
        self
    }
}

/// Horizontal headline bars: totals and latest daily counts per entity.
///
/// The aggregate entity is shown by default; every other entity starts
/// collapsed into the legend.
#[must_use]
pub fn headline(data: &NormalizedData, options: &HeadlineOptions) -> Figure {
    let Some(latest) = data.latest_date() else {
        return Figure::new(Vec::new(), Layout::new());
    };

    let mut traces = Vec::new();
    for series in data.entities.values() {
        let Some(i) = series.index_of_date(latest) else {
            continue;
        };
        let values = [
            series.total_cases[i],
            series.total_deaths[i],
            series.new_cases[i] as f64,
            series.new_deaths[i] as f64,
        ];
        let aggregate = series.entity == AGGREGATE_ENTITY;

        let text: Vec<String> = values
            .iter()
            .map(|&value| format!("<b>{}</b>: {}", series.display_name, thousands(value)))
            .collect();
        let textposition: Vec<String> = if aggregate {
            // The first (largest) bar carries its label inside.
            ["inside", "outside", "outside", "outside"]
                .map(str::to_owned)
                .to_vec()
        } else {
            vec!["outside".to_owned(); CATEGORIES.len()]
        };
        let color = if aggregate {
            options.aggregate_color.clone()
        } else {
            series.color.clone()
        };

        traces.push(
            Trace::bar()
                .with_name(series.display_name.clone())
                .with_y(CATEGORIES.iter().map(|&c| Coord::from(c)).collect())
                .with_x(values.iter().map(|&v| Coord::Num(v)).collect())
                .with_orientation(Orientation::Horizontal)
                .with_text(text)
                .with_textposition(textposition)
                .with_marker(Marker {
                    color: Some(ColorSpec::Single(color)),
                    ..Marker::default()
                })
                .with_hovertemplate(format!(
                    "<br><b>{}</b><br>%{{y}}: %{{x:,}}<extra></extra>",
                    series.display_name
                ))
                .with_visible(if aggregate {
                    Visibility::Visible
                } else {
                    Visibility::LegendOnly
                }),
        );
    }

    let layout = Layout::new()
        .with_title(
            Title::new(format!(
                "<b>Headline Figures: COVID-19 Cases and Deaths</b><BR>{}<br>\
                 <span style=\"font-size: 11px;\">{SOURCE_NOTE}</span>",
                latest_label(data)
            ))
            .with_font(title_font()),
        )
        .with_yaxis(Axis::default().with_autorange("reversed"));

    Figure::new(traces, layout)
}
