use chrono::NaiveDate;
use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("missing field `{field}` in row {row}")]
    MissingField { field: String, row: usize },

    #[error("non-numeric value `{value}` for field `{field}` in row {row}")]
    NonNumeric {
        field: String,
        value: String,
        row: usize,
    },

    #[error("unparseable date `{value}` in row {row}")]
    InvalidDate { value: String, row: usize },

    #[error("no observations to normalize")]
    EmptyEntitySet,

    #[error("negative daily count for `{entity}` on {date}")]
    NegativeCount { entity: String, date: NaiveDate },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("table read failed: {0}")]
    Table(#[from] csv::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
