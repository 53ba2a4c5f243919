use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::core::observation::{
    AGGREGATE_CODE, AGGREGATE_ENTITY, DEFAULT_GROUP, EntityMeta, GroupLookup, Observation,
    PopulationTable, RawTable, display_name,
};
use crate::core::palette::color_for_rank;
use crate::core::series::Series;
use crate::error::{PipelineError, PipelineResult};

/// Policy for negative daily counts (source data revisions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeCounts {
    /// Keep revisions as-is; cumulative totals may dip.
    #[default]
    PassThrough,
    /// Replace negative daily counts with zero.
    ClampToZero,
    /// Fail the whole run on the first negative count.
    Reject,
}

/// Tuning controls for series normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub window: usize,
    pub negative_counts: NegativeCounts,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            window: 7,
            negative_counts: NegativeCounts::default(),
        }
    }
}

impl NormalizeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn with_negative_counts(mut self, policy: NegativeCounts) -> Self {
        self.negative_counts = policy;
        self
    }

    fn validate(self) -> PipelineResult<Self> {
        if self.window == 0 {
            return Err(PipelineError::InvalidData(
                "rolling window must be at least 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// The full normalized dataset: every entity's derived series plus the
/// dataset-wide date axis and color assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedData {
    pub entities: IndexMap<String, Series>,
    pub dates: Vec<NaiveDate>,
    pub colors: IndexMap<String, String>,
    pub window: usize,
    pub population_vintage: u16,
    pub skipped_rows: usize,
}

impl NormalizedData {
    #[must_use]
    pub fn get(&self, entity: &str) -> Option<&Series> {
        self.entities.get(entity)
    }

    /// Last date with any observation across the dataset.
    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Distinct groups in first-seen entity order.
    #[must_use]
    pub fn groups(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for series in self.entities.values() {
            if !seen.contains(&series.group.as_str()) {
                seen.push(series.group.as_str());
            }
        }
        seen
    }
}

struct EntityJob {
    entity: String,
    meta: EntityMeta,
    group: String,
    population: Option<f64>,
    observations: Vec<Observation>,
}

/// Normalizes the raw table into derived per-entity series.
///
/// Pure with respect to its inputs: the same table, population vintage and
/// group lookup always produce the same output, including map iteration
/// order and the color assignment.
pub fn normalize(
    table: &RawTable,
    populations: &PopulationTable,
    groups: &GroupLookup,
    options: &NormalizeOptions,
) -> PipelineResult<NormalizedData> {
    let options = options.validate()?;
    if table.is_empty() {
        return Err(PipelineError::EmptyEntitySet);
    }

    let mut per_entity: Vec<(String, EntityMeta, Vec<Observation>)> = Vec::new();
    for (entity, observations) in table.entities() {
        if observations.is_empty() {
            continue;
        }
        let mut ordered = observations.clone();
        // Stable sort: same-date duplicates keep their input order.
        ordered.sort_by_key(|obs| obs.date);
        let meta = table.meta(entity).cloned().unwrap_or_else(|| EntityMeta {
            display_name: display_name(entity),
            code: String::new(),
        });
        per_entity.push((entity.clone(), meta, ordered));
    }

    // The aggregate must observe every entity's raw series before any
    // derivation starts; it then flows through the same steps as the rest.
    let mut aggregate: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();
    for (_, _, observations) in &per_entity {
        for obs in observations {
            let slot = aggregate.entry(obs.date).or_insert((0, 0));
            slot.0 += obs.new_cases;
            slot.1 += obs.new_deaths;
        }
    }
    let aggregate_population: f64 = per_entity
        .iter()
        .filter_map(|(entity, _, _)| populations.get(entity))
        .sum();
    let aggregate_observations: Vec<Observation> = aggregate
        .into_iter()
        .map(|(date, (cases, deaths))| Observation::new(date, cases, deaths))
        .collect();
    per_entity.push((
        AGGREGATE_ENTITY.to_owned(),
        EntityMeta {
            display_name: AGGREGATE_ENTITY.to_owned(),
            code: AGGREGATE_CODE.to_owned(),
        },
        aggregate_observations,
    ));

    let jobs: Vec<EntityJob> = per_entity
        .into_iter()
        .map(|(entity, meta, observations)| {
            let population = if entity == AGGREGATE_ENTITY {
                (aggregate_population > 0.0).then_some(aggregate_population)
            } else {
                populations.get(&entity)
            };
            let group = if entity == AGGREGATE_ENTITY {
                DEFAULT_GROUP.to_owned()
            } else {
                match groups.resolve(&meta.code) {
                    Some(group) => group.to_owned(),
                    None => {
                        warn!(
                            entity = %entity,
                            code = %meta.code,
                            "no group for entity code, using default"
                        );
                        DEFAULT_GROUP.to_owned()
                    }
                }
            };
            EntityJob {
                entity,
                meta,
                group,
                population,
                observations,
            }
        })
        .collect();

    // Per-entity derivation is independent once the aggregate exists.
    #[cfg(feature = "parallel-normalize")]
    let derived: PipelineResult<Vec<Series>> = {
        use rayon::prelude::*;
        jobs.into_par_iter()
            .map(|job| derive_series(job, options))
            .collect()
    };
    #[cfg(not(feature = "parallel-normalize"))]
    let derived: PipelineResult<Vec<Series>> = jobs
        .into_iter()
        .map(|job| derive_series(job, options))
        .collect();
    let derived = derived?;

    let mut entities: IndexMap<String, Series> = derived
        .into_iter()
        .map(|series| (series.entity.clone(), series))
        .collect();

    // Color ranking needs the complete entity set, aggregate included.
    let mut ranked: Vec<(OrderedFloat<f64>, String)> = entities
        .values()
        .map(|series| (OrderedFloat(series.final_total_cases()), series.entity.clone()))
        .collect();
    ranked.sort();

    let mut colors: IndexMap<String, String> = IndexMap::new();
    for (rank, (_, entity)) in ranked.iter().enumerate() {
        let color = color_for_rank(rank).to_owned();
        if let Some(series) = entities.get_mut(entity.as_str()) {
            series.color = color.clone();
        }
        colors.insert(entity.clone(), color);
    }

    let dates: Vec<NaiveDate> = entities
        .values()
        .flat_map(|series| series.dates.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    debug!(
        entities = entities.len(),
        dates = dates.len(),
        skipped = table.skipped_rows(),
        "normalized raw table"
    );

    Ok(NormalizedData {
        entities,
        dates,
        colors,
        window: options.window,
        population_vintage: populations.vintage(),
        skipped_rows: table.skipped_rows(),
    })
}

fn derive_series(job: EntityJob, options: NormalizeOptions) -> PipelineResult<Series> {
    let EntityJob {
        entity,
        meta,
        group,
        population,
        observations,
    } = job;

    let len = observations.len();
    let mut dates = Vec::with_capacity(len);
    let mut new_cases: Vec<i64> = Vec::with_capacity(len);
    let mut new_deaths: Vec<i64> = Vec::with_capacity(len);
    let mut negatives = 0usize;

    for obs in &observations {
        if obs.new_cases < 0 || obs.new_deaths < 0 {
            if options.negative_counts == NegativeCounts::Reject {
                return Err(PipelineError::NegativeCount {
                    entity,
                    date: obs.date,
                });
            }
            negatives += 1;
        }
        let (cases, deaths) = if options.negative_counts == NegativeCounts::ClampToZero {
            (obs.new_cases.max(0), obs.new_deaths.max(0))
        } else {
            (obs.new_cases, obs.new_deaths)
        };
        dates.push(obs.date);
        new_cases.push(cases);
        new_deaths.push(deaths);
    }

    if negatives > 0 {
        warn!(
            entity = %entity,
            count = negatives,
            policy = ?options.negative_counts,
            "negative daily counts in source data"
        );
    }

    let total_cases = running_sum(&new_cases);
    let total_deaths = running_sum(&new_deaths);
    let cases_rolling = trailing_sum(&new_cases, options.window);
    let deaths_rolling = trailing_sum(&new_deaths, options.window);

    let death_rate: Vec<Option<f64>> = total_cases
        .iter()
        .zip(&total_deaths)
        .map(|(&cases, &deaths)| (cases > 0.0).then(|| deaths / cases * 100.0))
        .collect();

    let per_capita = |totals: &[f64]| -> Vec<Option<f64>> {
        totals
            .iter()
            .map(|&total| match population {
                Some(pop) if pop > 0.0 => Some(total / pop),
                _ => None,
            })
            .collect()
    };
    let cases_per_capita = per_capita(&total_cases);
    let deaths_per_capita = per_capita(&total_deaths);

    Ok(Series {
        entity,
        display_name: meta.display_name,
        code: meta.code,
        group,
        color: String::new(),
        population,
        dates,
        new_cases,
        new_deaths,
        total_cases,
        total_deaths,
        cases_rolling,
        deaths_rolling,
        death_rate,
        cases_per_capita,
        deaths_per_capita,
    })
}

fn running_sum(values: &[i64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|&value| {
            total += value as f64;
            total
        })
        .collect()
}

/// Trailing sum over exactly `window` observations.
///
/// Indices with fewer than `window` available observations are undefined,
/// never a partial sum.
fn trailing_sum(values: &[i64], window: usize) -> Vec<Option<f64>> {
    let mut prefix: Vec<i64> = Vec::with_capacity(values.len() + 1);
    let mut total = 0i64;
    prefix.push(0);
    for &value in values {
        total += value;
        prefix.push(total);
    }
    (0..values.len())
        .map(|i| {
            (i + 1 >= window).then(|| (prefix[i + 1] - prefix[i + 1 - window]) as f64)
        })
        .collect()
}
