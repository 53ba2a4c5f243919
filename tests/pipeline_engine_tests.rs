use chrono::NaiveDate;
use epicurve_rs::api::{DashboardOptions, Pipeline, PipelineConfig};
use epicurve_rs::core::{GroupLookup, PopulationTable, RawRecord};
use epicurve_rs::error::PipelineError;
use epicurve_rs::loader::{LoaderConfig, load_records};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, n).expect("valid date")
}

fn record(entity: &str, code: &str, date: NaiveDate, cases: i64, deaths: i64) -> RawRecord {
    RawRecord {
        entity: entity.to_owned(),
        code: code.to_owned(),
        date,
        new_cases: cases,
        new_deaths: deaths,
        population: Some(1_000_000.0),
    }
}

fn sample_records() -> Vec<RawRecord> {
    let mut records = Vec::new();
    for n in 1..=10 {
        records.push(record("Alpha", "ALP", day(n), 100 + i64::from(n), 5));
        records.push(record("Beta", "BET", day(n), 10, 1));
    }
    records
}

#[test]
fn pipeline_construction_is_deterministic() {
    let records = sample_records();
    let populations = PopulationTable::from_records(&records, 2019);
    let groups = GroupLookup::new();
    let config = PipelineConfig::new();

    let first = Pipeline::from_records(&records, &populations, &groups, &config)
        .expect("first pipeline");
    let second = Pipeline::from_records(&records, &populations, &groups, &config)
        .expect("second pipeline");

    assert_eq!(first.normalized(), second.normalized());
    assert_eq!(first.latest_date(), Some(day(10)));
}

#[test]
fn empty_input_fails_construction() {
    let result = Pipeline::from_records(
        &[],
        &PopulationTable::new(2019),
        &GroupLookup::new(),
        &PipelineConfig::new(),
    );
    assert!(matches!(result, Err(PipelineError::EmptyEntitySet)));
}

#[test]
fn load_report_skips_flow_through_to_the_dataset() {
    let input = "dateRep\tcases\tdeaths\tcountriesAndTerritories\tcountryterritoryCode\tpopData2019\n\
                 14/03/2020\t10\t1\tItaly\tITA\t1000\n\
                 garbage\tten\t1\tItaly\tITA\t1000";
    let report = load_records(input.as_bytes(), &LoaderConfig::default()).expect("load");
    assert_eq!(report.skipped, 1);

    let populations = PopulationTable::from_records(&report.records, 2019);
    let pipeline = Pipeline::from_load_report(
        &report,
        &populations,
        &GroupLookup::new(),
        &PipelineConfig::new(),
    )
    .expect("pipeline");

    assert_eq!(pipeline.normalized().skipped_rows, 1);
}

#[test]
fn window_configuration_reaches_the_series() {
    let records = sample_records();
    let populations = PopulationTable::from_records(&records, 2019);
    let pipeline = Pipeline::from_records(
        &records,
        &populations,
        &GroupLookup::new(),
        &PipelineConfig::new().with_window(3),
    )
    .expect("pipeline");

    let data = pipeline.normalized();
    assert_eq!(data.window, 3);
    let alpha = data.get("Alpha").expect("alpha");
    assert_eq!(alpha.cases_rolling[1], None);
    assert!(alpha.cases_rolling[2].is_some());
}

#[test]
fn dashboard_composes_every_figure() {
    let records = sample_records();
    let populations = PopulationTable::from_records(&records, 2019);
    let pipeline = Pipeline::from_records(
        &records,
        &populations,
        &GroupLookup::new(),
        &PipelineConfig::new(),
    )
    .expect("pipeline");

    let bundle = pipeline.dashboard(&DashboardOptions::default());

    // The growth-curve pair differs by metric; deaths use the lower
    // threshold so Alpha (50 total deaths) crosses it.
    assert!(!bundle.growth_curve_cases.data.is_empty());
    assert!(!bundle.growth_curve_deaths.data.is_empty());
    assert!(!bundle.headline.data.is_empty());
    assert!(!bundle.per_capita.data.is_empty());
    assert_eq!(bundle.death_rate.frames.len(), 10);

    let json = bundle.to_json_pretty().expect("serialize");
    assert!(json.contains("growth_curve_cases"));
}
