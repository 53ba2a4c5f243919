use crate::core::series::{Series, SeriesVariable};

/// One variable of a series re-based so index 0 is the first day the
/// threshold was strictly exceeded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReindexedSeries {
    pub entity: String,
    pub variable: SeriesVariable,
    pub threshold: f64,
    /// Values at relative day indices `0..`; days before the crossing are
    /// dropped, not kept as negative indices.
    pub values: Vec<Option<f64>>,
}

impl ReindexedSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Defined (relative day, value) points, undefined days omitted.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(day, value)| value.map(|v| (day, v)))
    }
}

/// Re-bases `variable` to days since `threshold` was first strictly exceeded.
///
/// Returns `None` when the series never crosses the threshold: a defined
/// "no data" outcome that consumers render as nothing, not an error and not
/// a zero-filled series. Undefined values (for instance the first days of a
/// rolling window) never count as a crossing.
#[must_use]
pub fn reindex_series(
    series: &Series,
    variable: SeriesVariable,
    threshold: f64,
) -> Option<ReindexedSeries> {
    let crossing = (0..series.len()).find(|&i| {
        series
            .value_at(variable, i)
            .is_some_and(|value| value > threshold)
    })?;

    let values = (crossing..series.len())
        .map(|i| series.value_at(variable, i))
        .collect();

    Some(ReindexedSeries {
        entity: series.entity.clone(),
        variable,
        threshold,
        values,
    })
}
