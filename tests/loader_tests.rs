use chrono::NaiveDate;
use epicurve_rs::error::PipelineError;
use epicurve_rs::loader::{ColumnMap, LoaderConfig, load_records};

const HEADER: &str =
    "dateRep\tcases\tdeaths\tcountriesAndTerritories\tgeoId\tcountryterritoryCode\tpopData2019";

fn tsv(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out
}

#[test]
fn parses_day_first_dates_and_optional_population() {
    let input = tsv(&[
        "14/03/2020\t10\t1\tItaly\tIT\tITA\t60359546",
        "2020-03-15\t12\t2\tItaly\tIT\tITA\t",
    ]);
    let report = load_records(input.as_bytes(), &LoaderConfig::default()).expect("load");

    assert_eq!(report.skipped, 0);
    assert_eq!(report.records.len(), 2);

    let first = &report.records[0];
    assert_eq!(first.entity, "Italy");
    assert_eq!(first.code, "ITA");
    assert_eq!(
        first.date,
        NaiveDate::from_ymd_opt(2020, 3, 14).expect("valid date")
    );
    assert_eq!(first.new_cases, 10);
    assert_eq!(first.new_deaths, 1);
    assert_eq!(first.population, Some(60_359_546.0));

    // ISO fallback and empty population column.
    assert_eq!(report.records[1].population, None);
}

#[test]
fn unparseable_rows_are_skipped_and_counted() {
    let input = tsv(&[
        "14/03/2020\t10\t1\tItaly\tIT\tITA\t60359546",
        "not-a-date\t10\t1\tItaly\tIT\tITA\t60359546",
        "15/03/2020\tten\t1\tItaly\tIT\tITA\t60359546",
        "16/03/2020\t9\t0\tItaly\tIT\tITA\t60359546",
    ]);
    let report = load_records(input.as_bytes(), &LoaderConfig::default()).expect("load");

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.skipped, 2);
}

#[test]
fn rows_with_empty_required_fields_are_skipped() {
    let input = tsv(&[
        "14/03/2020\t10\t1\t\tIT\tITA\t100",
        "14/03/2020\t10\t1\tItaly\tIT\t\t100",
    ]);
    let report = load_records(input.as_bytes(), &LoaderConfig::default()).expect("load");

    assert!(report.records.is_empty());
    assert_eq!(report.skipped, 2);
}

#[test]
fn missing_required_column_fails_the_whole_load() {
    let input = "dateRep\tcases\tcountriesAndTerritories\n14/03/2020\t10\tItaly";
    let result = load_records(input.as_bytes(), &LoaderConfig::default());

    match result {
        Err(PipelineError::MissingField { field, .. }) => {
            assert_eq!(field, "countryterritoryCode");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn missing_population_column_still_loads() {
    let input = "dateRep\tcases\tdeaths\tcountriesAndTerritories\tcountryterritoryCode\n\
                 14/03/2020\t10\t1\tItaly\tITA";
    let report = load_records(input.as_bytes(), &LoaderConfig::default()).expect("load");

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].population, None);
}

#[test]
fn custom_delimiter_and_columns_are_honored() {
    let config = LoaderConfig::default()
        .with_delimiter(b',')
        .with_columns(ColumnMap {
            entity: "country".to_owned(),
            code: "iso".to_owned(),
            date: "day".to_owned(),
            cases: "confirmed".to_owned(),
            deaths: "fatalities".to_owned(),
            population: "pop".to_owned(),
        });
    let input = "day,confirmed,fatalities,country,iso,pop\n01/04/2020,5,0,Chile,CHL,19000000";
    let report = load_records(input.as_bytes(), &config).expect("load");

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].entity, "Chile");
    assert_eq!(report.records[0].population, Some(19_000_000.0));
}
