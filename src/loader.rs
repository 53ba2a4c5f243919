//! Delimited-table loader.
//!
//! The one I/O edge of the crate: parses a daily-counts snapshot into typed
//! records. Row-level failures are skipped and counted, never silently
//! dropped; reader-level failures propagate.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::core::RawRecord;
use crate::error::{PipelineError, PipelineResult};

/// Source column names for the recognized fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub entity: String,
    pub code: String,
    pub date: String,
    pub cases: String,
    pub deaths: String,
    pub population: String,
}

impl Default for ColumnMap {
    /// Column names of the ECDC daily case-distribution snapshot.
    fn default() -> Self {
        Self {
            entity: "countriesAndTerritories".to_owned(),
            code: "countryterritoryCode".to_owned(),
            date: "dateRep".to_owned(),
            cases: "cases".to_owned(),
            deaths: "deaths".to_owned(),
            population: "popData2019".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub delimiter: u8,
    pub columns: ColumnMap,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            columns: ColumnMap::default(),
        }
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }
}

/// Parsed records plus the count of rows that did not survive parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub records: Vec<RawRecord>,
    pub skipped: usize,
}

struct ColumnIndices {
    entity: usize,
    code: usize,
    date: usize,
    cases: usize,
    deaths: usize,
    population: Option<usize>,
}

/// Reads a delimited snapshot into typed records.
///
/// Required columns missing from the header fail the whole load; individual
/// rows that fail to parse are skipped with a warning and counted in the
/// report.
pub fn load_records<R: Read>(reader: R, config: &LoaderConfig) -> PipelineResult<LoadReport> {
    let mut table = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = table.headers()?.clone();
    let indices = resolve_columns(&headers, &config.columns)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (i, row) in table.records().enumerate() {
        // Header is line 1; data rows start at line 2.
        let line = i + 2;
        let row = row?;
        match parse_row(&row, &indices, line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(line, %reason, "skipping unparseable row");
                skipped += 1;
            }
        }
    }

    debug!(
        records = records.len(),
        skipped, "loaded delimited snapshot"
    );
    Ok(LoadReport { records, skipped })
}

fn resolve_columns(headers: &StringRecord, columns: &ColumnMap) -> PipelineResult<ColumnIndices> {
    let find = |name: &str| headers.iter().position(|header| header == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| PipelineError::MissingField {
            field: name.to_owned(),
            row: 1,
        })
    };

    Ok(ColumnIndices {
        entity: require(&columns.entity)?,
        code: require(&columns.code)?,
        date: require(&columns.date)?,
        cases: require(&columns.cases)?,
        deaths: require(&columns.deaths)?,
        // Population is reference data; a snapshot without it still loads.
        population: find(&columns.population),
    })
}

fn parse_row(
    row: &StringRecord,
    indices: &ColumnIndices,
    line: usize,
) -> Result<RawRecord, PipelineError> {
    let field = |index: usize, name: &'static str| {
        row.get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(PipelineError::MissingField {
                field: name.to_owned(),
                row: line,
            })
    };

    let entity = field(indices.entity, "entity")?.to_owned();
    let code = field(indices.code, "code")?.to_owned();
    let date = parse_date(field(indices.date, "date")?, line)?;
    let new_cases = parse_count(field(indices.cases, "cases")?, "cases", line)?;
    let new_deaths = parse_count(field(indices.deaths, "deaths")?, "deaths", line)?;

    let population = match indices.population {
        Some(index) => match row.get(index).map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => Some(value.parse::<f64>().map_err(|_| {
                PipelineError::NonNumeric {
                    field: "population".to_owned(),
                    value: value.to_owned(),
                    row: line,
                }
            })?),
            None => None,
        },
        None => None,
    };

    Ok(RawRecord {
        entity,
        code,
        date,
        new_cases,
        new_deaths,
        population,
    })
}

fn parse_date(value: &str, line: usize) -> Result<NaiveDate, PipelineError> {
    // Day-first is the source convention; ISO is accepted as a fallback.
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| PipelineError::InvalidDate {
            value: value.to_owned(),
            row: line,
        })
}

fn parse_count(value: &str, name: &'static str, line: usize) -> Result<i64, PipelineError> {
    value.parse::<i64>().map_err(|_| PipelineError::NonNumeric {
        field: name.to_owned(),
        value: value.to_owned(),
        row: line,
    })
}
