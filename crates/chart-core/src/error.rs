// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for dataset construction and chart setup.

use thiserror::Error;

use crate::axis::TickStride;
use crate::series::Period;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("{period} series needs {expected} samples, got {actual}")]
    SampleCount { period: Period, expected: usize, actual: usize },

    #[error("{period} series is not consecutive at sample {index}")]
    NonContiguous { period: Period, index: usize },

    #[error("previous week must end the day before the current week starts")]
    WeeksNotAdjacent,

    #[error("dataset needs exactly 2 series, got {0}")]
    SeriesCount(usize),

    #[error("period {0} appears more than once")]
    DuplicatePeriod(Period),

    #[error("no color mapped for series '{0}'")]
    UnmappedSeries(String),

    #[error("color scale key '{0}' does not name a period")]
    UnknownScaleKey(String),

    #[error("tick binning by {0:?} is not supported; bin by day and format labels by weekday")]
    UnsupportedBinning(TickStride),
}
