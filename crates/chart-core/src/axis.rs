// File: crates/chart-core/src/axis.rs
// Summary: Axis models: day-binned weekday X ticks and the fixed-domain value axis.

use chrono::NaiveDate;

use crate::calendar::Calendar;
use crate::error::{ChartError, Result};
use crate::grid::stride_ticks;

/// Calendar unit used to place X ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStride {
    /// One tick per calendar day.
    Day,
    /// Weekday binning. Rejected: day-of-week is a label format, not a bin unit.
    Weekday,
}

/// One X-axis mark: a gridline at the bin start and a centered weekday label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XTick {
    pub index: usize,
    pub day: NaiveDate,
    pub label: &'static str,
    pub highlighted: bool,
}

/// Bin `days` by `stride` and label each bin with its narrow weekday.
/// Only `TickStride::Day` is accepted.
pub fn bin_ticks(
    calendar: &impl Calendar,
    days: &[NaiveDate],
    stride: TickStride,
    highlight: Option<usize>,
) -> Result<Vec<XTick>> {
    if stride != TickStride::Day {
        return Err(ChartError::UnsupportedBinning(stride));
    }
    let mut days = days.to_vec();
    days.sort_unstable();
    days.dedup();
    Ok(days
        .into_iter()
        .enumerate()
        .map(|(index, day)| XTick {
            index,
            day,
            label: calendar.weekday_abbreviation(day),
            highlighted: highlight == Some(index),
        })
        .collect())
}

/// Value axis with a fixed domain; never autoscaled from data.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueAxis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, step: 1.0 }
    }

    /// Mood axis: [-0.5, 4.5] with a mark at every whole value.
    pub fn mood() -> Self {
        Self::new(-0.5, 4.5)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn ticks(&self) -> Vec<f64> {
        stride_ticks(self.min, self.max, self.step)
    }
}

/// Format a value tick the way the axis prints it ("2", "2.5").
pub fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v}")
    }
}
