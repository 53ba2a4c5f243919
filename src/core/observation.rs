use chrono::NaiveDate;
use indexmap::IndexMap;

/// Synthetic entity id for the date-wise global aggregate.
pub const AGGREGATE_ENTITY: &str = "World";
/// ISO-style code assigned to the aggregate entity.
pub const AGGREGATE_CODE: &str = "WLD";
/// Group used when the group lookup has no entry for an entity's code.
pub const DEFAULT_GROUP: &str = "Other";

/// One entity-day of raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub date: NaiveDate,
    pub new_cases: i64,
    pub new_deaths: i64,
}

impl Observation {
    #[must_use]
    pub fn new(date: NaiveDate, new_cases: i64, new_deaths: i64) -> Self {
        Self {
            date,
            new_cases,
            new_deaths,
        }
    }
}

/// Loader output contract: one parsed source row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub entity: String,
    pub code: String,
    pub date: NaiveDate,
    pub new_cases: i64,
    pub new_deaths: i64,
    pub population: Option<f64>,
}

/// Static metadata carried alongside an entity's series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    pub display_name: String,
    pub code: String,
}

// Source entity names that are too unwieldy for legends and hover labels.
const DISPLAY_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Democratic_Republic_of_the_Congo", "D.R.C"),
    ("Falkland_Islands_(Malvinas)", "Falklands"),
    ("Cases_on_an_international_conveyance_Japan", "Cruise Ship (Japan)"),
    ("Saint_Vincent_and_the_Grenadines", "St.Vincent & the Grenadines"),
    ("United_States_Virgin_Islands", "U.S Virgin Islands"),
];

/// Human-readable name for a source entity id.
///
/// Applies the fixed substitution table first, then replaces the
/// underscores the source uses in place of spaces.
#[must_use]
pub fn display_name(entity: &str) -> String {
    for (source, short) in DISPLAY_SUBSTITUTIONS {
        if entity == *source {
            return (*short).to_owned();
        }
    }
    entity.replace('_', " ")
}

/// Raw observations grouped per entity, ordered by (entity id, date).
///
/// Construction sorts once so every downstream stage can rely on a stable,
/// deterministic entity and date order regardless of source row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    by_entity: IndexMap<String, Vec<Observation>>,
    meta: IndexMap<String, EntityMeta>,
    skipped_rows: usize,
}

impl RawTable {
    #[must_use]
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut ordered: Vec<&RawRecord> = records.iter().collect();
        ordered.sort_by(|a, b| a.entity.cmp(&b.entity).then(a.date.cmp(&b.date)));

        let mut table = Self::default();
        for record in ordered {
            table
                .by_entity
                .entry(record.entity.clone())
                .or_default()
                .push(Observation::new(
                    record.date,
                    record.new_cases,
                    record.new_deaths,
                ));
            table
                .meta
                .entry(record.entity.clone())
                .or_insert_with(|| EntityMeta {
                    display_name: display_name(&record.entity),
                    code: record.code.clone(),
                });
        }
        table
    }

    /// Adds to the count of source rows dropped before this table was built.
    pub fn record_skipped(&mut self, rows: usize) {
        self.skipped_rows += rows;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_entity.values().all(Vec::is_empty)
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.by_entity.len()
    }

    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn entities(&self) -> impl Iterator<Item = (&String, &Vec<Observation>)> {
        self.by_entity.iter()
    }

    #[must_use]
    pub fn meta(&self, entity: &str) -> Option<&EntityMeta> {
        self.meta.get(entity)
    }
}

/// Population reference values for one explicit vintage year.
///
/// The pipeline never mixes vintages; callers pick one and supply it whole.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationTable {
    vintage: u16,
    by_entity: IndexMap<String, f64>,
}

impl PopulationTable {
    #[must_use]
    pub fn new(vintage: u16) -> Self {
        Self {
            vintage,
            by_entity: IndexMap::new(),
        }
    }

    /// Builds a table from loader records, keeping the last defined positive
    /// value seen per entity.
    #[must_use]
    pub fn from_records(records: &[RawRecord], vintage: u16) -> Self {
        let mut table = Self::new(vintage);
        for record in records {
            if let Some(population) = record.population {
                if population > 0.0 {
                    table.insert(&record.entity, population);
                }
            }
        }
        table
    }

    pub fn insert(&mut self, entity: &str, population: f64) {
        self.by_entity.insert(entity.to_owned(), population);
    }

    #[must_use]
    pub fn get(&self, entity: &str) -> Option<f64> {
        self.by_entity.get(entity).copied()
    }

    #[must_use]
    pub fn vintage(&self) -> u16 {
        self.vintage
    }
}

/// Entity code to display-group lookup, joined during normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupLookup {
    by_code: IndexMap<String, String>,
}

impl GroupLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &str, group: &str) {
        self.by_code.insert(code.to_owned(), group.to_owned());
    }

    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }
}
