use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::engine_config::PipelineConfig;
use crate::charts::{
    DeathRateOptions, GrowthCurveOptions, HeadlineOptions, PerCapitaOptions, WorldMapOptions,
    death_rate_bar, growth_curve, headline, per_capita_scatter, world_map,
};
use crate::core::normalize::{NormalizedData, normalize};
use crate::core::observation::{GroupLookup, PopulationTable, RawRecord, RawTable};
use crate::core::series::Metric;
use crate::error::PipelineResult;
use crate::figure::Figure;
use crate::loader::LoadReport;

/// Main pipeline facade: one immutable normalized dataset plus the chart
/// composers over it.
///
/// Construction runs the whole batch: sort, aggregate synthesis, derived
/// fields, coloring. The same inputs always reconstruct an identical
/// pipeline; there is no hidden process-wide state.
pub struct Pipeline {
    data: NormalizedData,
}

impl Pipeline {
    pub fn from_table(
        table: &RawTable,
        populations: &PopulationTable,
        groups: &GroupLookup,
        config: &PipelineConfig,
    ) -> PipelineResult<Self> {
        let data = normalize(table, populations, groups, &config.normalize)?;
        Ok(Self { data })
    }

    pub fn from_records(
        records: &[RawRecord],
        populations: &PopulationTable,
        groups: &GroupLookup,
        config: &PipelineConfig,
    ) -> PipelineResult<Self> {
        Self::from_table(&RawTable::from_records(records), populations, groups, config)
    }

    /// Builds from loader output, carrying its skipped-row count through to
    /// the normalized dataset.
    pub fn from_load_report(
        report: &LoadReport,
        populations: &PopulationTable,
        groups: &GroupLookup,
        config: &PipelineConfig,
    ) -> PipelineResult<Self> {
        let mut table = RawTable::from_records(&report.records);
        table.record_skipped(report.skipped);
        Self::from_table(&table, populations, groups, config)
    }

    #[must_use]
    pub fn normalized(&self) -> &NormalizedData {
        &self.data
    }

    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.data.latest_date()
    }

    #[must_use]
    pub fn world_map(&self, options: &WorldMapOptions) -> Figure {
        world_map(&self.data, options)
    }

    #[must_use]
    pub fn death_rate_bar(&self, options: &DeathRateOptions) -> Figure {
        death_rate_bar(&self.data, options)
    }

    #[must_use]
    pub fn growth_curve(&self, options: &GrowthCurveOptions) -> Figure {
        growth_curve(&self.data, options)
    }

    #[must_use]
    pub fn per_capita_scatter(&self, options: &PerCapitaOptions) -> Figure {
        per_capita_scatter(&self.data, options)
    }

    #[must_use]
    pub fn headline(&self, options: &HeadlineOptions) -> Figure {
        headline(&self.data, options)
    }

    /// Composes every dashboard figure in one pass.
    #[must_use]
    pub fn dashboard(&self, options: &DashboardOptions) -> DashboardBundle {
        DashboardBundle {
            world_map: self.world_map(&options.world_map),
            death_rate: self.death_rate_bar(&options.death_rate),
            growth_curve_cases: self.growth_curve(&options.growth_curve_cases),
            growth_curve_deaths: self.growth_curve(&options.growth_curve_deaths),
            per_capita: self.per_capita_scatter(&options.per_capita),
            headline: self.headline(&options.headline),
        }
    }
}

/// Per-figure options for [`Pipeline::dashboard`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub world_map: WorldMapOptions,
    pub death_rate: DeathRateOptions,
    pub growth_curve_cases: GrowthCurveOptions,
    pub growth_curve_deaths: GrowthCurveOptions,
    pub per_capita: PerCapitaOptions,
    pub headline: HeadlineOptions,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            world_map: WorldMapOptions::default(),
            death_rate: DeathRateOptions::default(),
            growth_curve_cases: GrowthCurveOptions::default(),
            // Deaths cross much later than cases, so the day-zero threshold
            // and axis spans shrink accordingly.
            growth_curve_deaths: GrowthCurveOptions::default()
                .with_metric(Metric::Deaths)
                .with_threshold(10.0)
                .with_x_range([0.0, 120.0])
                .with_y_range_log([0.0, 5.0]),
            per_capita: PerCapitaOptions::default(),
            headline: HeadlineOptions::default(),
        }
    }
}

/// Every dashboard figure, ready to serialize for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBundle {
    pub world_map: Figure,
    pub death_rate: Figure,
    pub growth_curve_cases: Figure,
    pub growth_curve_deaths: Figure,
    pub per_capita: Figure,
    pub headline: Figure,
}

impl DashboardBundle {
    pub fn to_json_pretty(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
