// File: crates/chart-core/src/dataset.rs
// Summary: Data preparation: week series from literal mood arrays and the validated two-week dataset.

use chrono::NaiveDate;

use crate::calendar::Calendar;
use crate::error::{ChartError, Result};
use crate::series::{Period, Sample, Series, DAYS_PER_WEEK};

/// Previous week, Mon 1 Aug .. Sun 7 Aug 2022.
pub const PREVIOUS_WEEK_MOODS: [f64; DAYS_PER_WEEK] = [2.5, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
/// Current week, Mon 8 Aug .. Sun 14 Aug 2022.
pub const CURRENT_WEEK_MOODS: [f64; DAYS_PER_WEEK] = [2.5, 2.0, 2.5, 3.5, 2.5, 1.5, 3.0];

pub const SAMPLE_YEAR: i32 = 2022;
pub const SAMPLE_MONTH: u32 = 8;
pub const PREVIOUS_WEEK_FIRST_DAY: u32 = 1;
pub const CURRENT_WEEK_FIRST_DAY: u32 = 8;

/// Build one week of samples: `moods[i]` pairs with day `first_day + i` of the month.
pub fn week_series(
    calendar: &impl Calendar,
    period: Period,
    year: i32,
    month: u32,
    first_day: u32,
    moods: &[f64],
) -> Result<Series> {
    if moods.len() != DAYS_PER_WEEK {
        return Err(ChartError::SampleCount { period, expected: DAYS_PER_WEEK, actual: moods.len() });
    }
    let samples = (0u32..)
        .zip(moods)
        .map(|(i, &mood)| {
            let day = match first_day.checked_add(i) {
                Some(day) => calendar.compose_date(year, month, day),
                None => {
                    tracing::warn!(first_day, offset = i, "day of month overflowed, using today's date");
                    calendar.today()
                }
            };
            Sample::new(day, mood)
        })
        .collect();
    Ok(Series::new(period, samples))
}

/// Exactly two week-long series, previous week first.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    series: Vec<Series>,
}

impl Dataset {
    /// Validate and wrap the series. Order is preserved as given.
    pub fn new(series: Vec<Series>) -> Result<Self> {
        if series.len() != 2 {
            return Err(ChartError::SeriesCount(series.len()));
        }
        if series[0].period == series[1].period {
            return Err(ChartError::DuplicatePeriod(series[0].period));
        }
        for s in &series {
            check_week(s)?;
        }

        let previous = find(&series, Period::Previous);
        let current = find(&series, Period::Current);
        if let (Some(prev_end), Some(cur_start)) =
            (previous.and_then(Series::last_day), current.and_then(Series::first_day))
        {
            if prev_end.succ_opt() != Some(cur_start) {
                return Err(ChartError::WeeksNotAdjacent);
            }
        }

        Ok(Self { series })
    }

    /// The two-week mood comparison from 1 Aug 2022.
    pub fn sample(calendar: &impl Calendar) -> Result<Self> {
        let previous = week_series(
            calendar,
            Period::Previous,
            SAMPLE_YEAR,
            SAMPLE_MONTH,
            PREVIOUS_WEEK_FIRST_DAY,
            &PREVIOUS_WEEK_MOODS,
        )?;
        let current = week_series(
            calendar,
            Period::Current,
            SAMPLE_YEAR,
            SAMPLE_MONTH,
            CURRENT_WEEK_FIRST_DAY,
            &CURRENT_WEEK_MOODS,
        )?;
        let dataset = Self::new(vec![previous, current])?;
        tracing::debug!(
            first = ?dataset.series[0].first_day(),
            last = ?dataset.series[1].last_day(),
            "built sample mood dataset"
        );
        Ok(dataset)
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn get(&self, period: Period) -> Option<&Series> {
        find(&self.series, period)
    }

    /// Days of the first series; the x axis is laid out over these.
    pub fn reference_days(&self) -> Vec<NaiveDate> {
        self.series.first().map(Series::days).unwrap_or_default()
    }
}

fn find(series: &[Series], period: Period) -> Option<&Series> {
    series.iter().find(|s| s.period == period)
}

fn check_week(series: &Series) -> Result<()> {
    if series.samples.len() != DAYS_PER_WEEK {
        return Err(ChartError::SampleCount {
            period: series.period,
            expected: DAYS_PER_WEEK,
            actual: series.samples.len(),
        });
    }
    for (index, pair) in series.samples.windows(2).enumerate() {
        if pair[0].day.succ_opt() != Some(pair[1].day) {
            return Err(ChartError::NonContiguous { period: series.period, index: index + 1 });
        }
    }
    Ok(())
}

