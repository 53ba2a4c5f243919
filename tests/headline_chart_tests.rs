use chrono::NaiveDate;
use epicurve_rs::charts::{HeadlineOptions, headline};
use epicurve_rs::core::{
    GroupLookup, NormalizeOptions, NormalizedData, PopulationTable, RawRecord, RawTable, normalize,
};
use epicurve_rs::figure::{ColorSpec, Coord, Orientation, Visibility};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, n).expect("valid date")
}

fn record(entity: &str, date: NaiveDate, cases: i64, deaths: i64) -> RawRecord {
    RawRecord {
        entity: entity.to_owned(),
        code: entity[..3].to_uppercase(),
        date,
        new_cases: cases,
        new_deaths: deaths,
        population: None,
    }
}

fn fixture() -> NormalizedData {
    let records = vec![
        record("Alpha", day(1), 100, 10),
        record("Alpha", day(2), 50, 5),
    ];
    normalize(
        &RawTable::from_records(&records),
        &PopulationTable::new(2019),
        &GroupLookup::new(),
        &NormalizeOptions::default(),
    )
    .expect("normalize")
}

#[test]
fn bars_carry_totals_and_latest_daily_counts() {
    let figure = headline(&fixture(), &HeadlineOptions::default());
    let alpha = figure
        .data
        .iter()
        .find(|trace| trace.name.as_deref() == Some("Alpha"))
        .expect("alpha trace");

    assert_eq!(alpha.orientation, Some(Orientation::Horizontal));
    assert_eq!(
        alpha.y,
        vec![
            Coord::Label("Total Cases".to_owned()),
            Coord::Label("Total Deaths".to_owned()),
            Coord::Label("Latest Daily Cases".to_owned()),
            Coord::Label("Latest Daily Deaths".to_owned()),
        ]
    );
    assert_eq!(
        alpha.x,
        vec![
            Coord::Num(150.0),
            Coord::Num(15.0),
            Coord::Num(50.0),
            Coord::Num(5.0),
        ]
    );
}

#[test]
fn only_the_aggregate_is_visible_by_default() {
    let figure = headline(&fixture(), &HeadlineOptions::default());

    for trace in &figure.data {
        let expected = if trace.name.as_deref() == Some("World") {
            Visibility::Visible
        } else {
            Visibility::LegendOnly
        };
        assert_eq!(trace.visible, Some(expected), "trace {:?}", trace.name);
    }
}

#[test]
fn the_aggregate_gets_its_own_highlight_color() {
    let figure = headline(&fixture(), &HeadlineOptions::default());
    let world = figure
        .data
        .iter()
        .find(|trace| trace.name.as_deref() == Some("World"))
        .expect("world trace");

    let marker = world.marker.as_ref().expect("marker");
    assert_eq!(
        marker.color,
        Some(ColorSpec::Single("firebrick".to_owned()))
    );
}

#[test]
fn text_labels_group_thousands() {
    let records = vec![record("Alpha", day(1), 1_234_567, 0)];
    let data = normalize(
        &RawTable::from_records(&records),
        &PopulationTable::new(2019),
        &GroupLookup::new(),
        &NormalizeOptions::default(),
    )
    .expect("normalize");

    let figure = headline(&data, &HeadlineOptions::default());
    let alpha = figure
        .data
        .iter()
        .find(|trace| trace.name.as_deref() == Some("Alpha"))
        .expect("alpha trace");
    assert_eq!(alpha.text[0], "<b>Alpha</b>: 1,234,567");
}

#[test]
fn category_axis_is_reversed() {
    let figure = headline(&fixture(), &HeadlineOptions::default());
    let yaxis = figure.layout.yaxis.as_ref().expect("y axis");
    assert_eq!(yaxis.autorange.as_deref(), Some("reversed"));
}
