use chrono::NaiveDate;
use epicurve_rs::core::{
    GroupLookup, NormalizeOptions, PopulationTable, RawRecord, RawTable, SeriesVariable,
    normalize, reindex_series,
};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, n).expect("valid date")
}

/// Builds a one-entity dataset whose daily cases are exactly `daily`.
fn single_entity(daily: &[i64]) -> epicurve_rs::core::NormalizedData {
    let records: Vec<RawRecord> = daily
        .iter()
        .enumerate()
        .map(|(i, &cases)| RawRecord {
            entity: "Alpha".to_owned(),
            code: "ALP".to_owned(),
            date: day(i as u32 + 1),
            new_cases: cases,
            new_deaths: 0,
            population: None,
        })
        .collect();
    normalize(
        &RawTable::from_records(&records),
        &PopulationTable::new(2019),
        &GroupLookup::new(),
        &NormalizeOptions::default(),
    )
    .expect("normalize")
}

#[test]
fn first_value_strictly_above_threshold_becomes_day_zero() {
    let data = single_entity(&[5, 3, 4, 8]);
    // Daily values [5, 3, 4, 8]; totals [5, 8, 12, 20].
    let series = data.get("Alpha").expect("series");

    let reindexed =
        reindex_series(series, SeriesVariable::TotalCases, 10.0).expect("crossing exists");
    assert_eq!(reindexed.values, vec![Some(12.0), Some(20.0)]);
    assert_eq!(
        reindexed.points().collect::<Vec<_>>(),
        vec![(0, 12.0), (1, 20.0)]
    );
}

#[test]
fn touching_the_threshold_is_not_a_crossing() {
    let data = single_entity(&[10, 0, 0]);
    // Totals stay exactly at the threshold; strict > must never fire.
    let series = data.get("Alpha").expect("series");

    assert!(reindex_series(series, SeriesVariable::TotalCases, 10.0).is_none());
}

#[test]
fn never_crossing_yields_no_data_not_an_error() {
    let data = single_entity(&[1, 1, 1]);
    let series = data.get("Alpha").expect("series");

    assert!(reindex_series(series, SeriesVariable::TotalCases, 10.0).is_none());
}

#[test]
fn undefined_rolling_values_never_count_as_a_crossing() {
    // Five days only: the 7-day rolling sum is undefined on every index, so
    // even huge daily counts must not produce a crossing.
    let data = single_entity(&[1_000, 1_000, 1_000, 1_000, 1_000]);
    let series = data.get("Alpha").expect("series");

    assert!(reindex_series(series, SeriesVariable::CasesRolling, 10.0).is_none());
}

#[test]
fn reindexed_series_keeps_the_tail_length() {
    let data = single_entity(&[0, 0, 50, 1, 2, 3]);
    let series = data.get("Alpha").expect("series");

    let reindexed =
        reindex_series(series, SeriesVariable::TotalCases, 10.0).expect("crossing exists");
    // Crossing at absolute index 2 of 6; four values remain.
    assert_eq!(reindexed.len(), 4);
    assert_eq!(reindexed.values[0], Some(50.0));
}

#[test]
fn rolling_crossing_starts_where_the_window_is_defined() {
    let data = single_entity(&[1, 1, 1, 1, 1, 1, 1, 100]);
    let series = data.get("Alpha").expect("series");

    let reindexed =
        reindex_series(series, SeriesVariable::CasesRolling, 50.0).expect("crossing exists");
    // Window sums: index 6 = 7, index 7 = 106; day zero is index 7.
    assert_eq!(reindexed.values, vec![Some(106.0)]);
}
