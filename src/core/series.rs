use chrono::NaiveDate;

/// Which raw count a derived variable is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cases,
    Deaths,
}

impl Metric {
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Deaths => "deaths",
        }
    }

    #[must_use]
    pub fn capitalized(self) -> &'static str {
        match self {
            Metric::Cases => "Cases",
            Metric::Deaths => "Deaths",
        }
    }
}

/// How a count metric is aggregated along the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    /// The raw daily count.
    Daily,
    /// Running sum from the first observation.
    Total,
    /// Trailing rolling-window sum.
    Rolling,
}

/// Selector for one per-day field of a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesVariable {
    NewCases,
    NewDeaths,
    TotalCases,
    TotalDeaths,
    CasesRolling,
    DeathsRolling,
    DeathRate,
    CasesPerCapita,
    DeathsPerCapita,
}

impl SeriesVariable {
    /// Maps a (metric, basis) pair onto the matching count selector.
    #[must_use]
    pub fn count(metric: Metric, basis: Basis) -> Self {
        match (metric, basis) {
            (Metric::Cases, Basis::Daily) => SeriesVariable::NewCases,
            (Metric::Cases, Basis::Total) => SeriesVariable::TotalCases,
            (Metric::Cases, Basis::Rolling) => SeriesVariable::CasesRolling,
            (Metric::Deaths, Basis::Daily) => SeriesVariable::NewDeaths,
            (Metric::Deaths, Basis::Total) => SeriesVariable::TotalDeaths,
            (Metric::Deaths, Basis::Rolling) => SeriesVariable::DeathsRolling,
        }
    }
}

/// One entity's date-ascending series with all derived fields.
///
/// Derived per-day values are `Option<f64>`; `None` is the "undefined"
/// sentinel and is never conflated with zero downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub entity: String,
    pub display_name: String,
    pub code: String,
    pub group: String,
    pub color: String,
    pub population: Option<f64>,
    pub dates: Vec<NaiveDate>,
    pub new_cases: Vec<i64>,
    pub new_deaths: Vec<i64>,
    pub total_cases: Vec<f64>,
    pub total_deaths: Vec<f64>,
    pub cases_rolling: Vec<Option<f64>>,
    pub deaths_rolling: Vec<Option<f64>>,
    pub death_rate: Vec<Option<f64>>,
    pub cases_per_capita: Vec<Option<f64>>,
    pub deaths_per_capita: Vec<Option<f64>>,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Value of `variable` at index `i`, `None` when undefined or out of range.
    #[must_use]
    pub fn value_at(&self, variable: SeriesVariable, i: usize) -> Option<f64> {
        if i >= self.len() {
            return None;
        }
        match variable {
            SeriesVariable::NewCases => Some(self.new_cases[i] as f64),
            SeriesVariable::NewDeaths => Some(self.new_deaths[i] as f64),
            SeriesVariable::TotalCases => Some(self.total_cases[i]),
            SeriesVariable::TotalDeaths => Some(self.total_deaths[i]),
            SeriesVariable::CasesRolling => self.cases_rolling[i],
            SeriesVariable::DeathsRolling => self.deaths_rolling[i],
            SeriesVariable::DeathRate => self.death_rate[i],
            SeriesVariable::CasesPerCapita => self.cases_per_capita[i],
            SeriesVariable::DeathsPerCapita => self.deaths_per_capita[i],
        }
    }

    #[must_use]
    pub fn values(&self, variable: SeriesVariable) -> Vec<Option<f64>> {
        (0..self.len()).map(|i| self.value_at(variable, i)).collect()
    }

    /// Index of `date` in this series; dates are ascending and unique.
    #[must_use]
    pub fn index_of_date(&self, date: NaiveDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    #[must_use]
    pub fn value_on(&self, variable: SeriesVariable, date: NaiveDate) -> Option<f64> {
        self.index_of_date(date)
            .and_then(|i| self.value_at(variable, i))
    }

    /// Value of `variable` on the last observed day.
    #[must_use]
    pub fn latest(&self, variable: SeriesVariable) -> Option<f64> {
        self.len()
            .checked_sub(1)
            .and_then(|i| self.value_at(variable, i))
    }

    /// Final cumulative case count, the color-ranking key.
    #[must_use]
    pub fn final_total_cases(&self) -> f64 {
        self.total_cases.last().copied().unwrap_or(0.0)
    }
}
