// File: crates/chart-core/src/series.rs
// Summary: Sample/series model for the two comparison weeks.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Number of samples in a week-long series.
pub const DAYS_PER_WEEK: usize = 7;

/// One mood reading. `day` is the sample's identity within its series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub day: NaiveDate,
    pub value: f64,
}

impl Sample {
    pub const fn new(day: NaiveDate, value: f64) -> Self {
        Self { day, value }
    }

    /// Offset of the sample within a Monday-start week (Mon = 0 .. Sun = 6).
    pub fn weekday_index(&self) -> u32 {
        self.day.weekday().num_days_from_monday()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Current,
    Previous,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Current, Period::Previous];

    /// Stable key used by the color scale and the legend.
    pub const fn name(self) -> &'static str {
        match self {
            Period::Current => "current",
            Period::Previous => "previous",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One labeled sequence of samples; `period` is the series identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub period: Period,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(period: Period, samples: Vec<Sample>) -> Self {
        Self { period, samples }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.samples.first().map(|s| s.day)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.samples.last().map(|s| s.day)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        self.samples.iter().map(|s| s.day).collect()
    }

    /// Samples ordered by day. Stable for equal days.
    pub fn sorted_by_day(&self, ascending: bool) -> Vec<Sample> {
        let mut out = self.samples.clone();
        if ascending {
            out.sort_by_key(|s| s.day);
        } else {
            out.sort_by_key(|s| std::cmp::Reverse(s.day));
        }
        out
    }

    /// (min, max) of the sample values, None when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.samples.iter().fold(None, |acc, s| match acc {
            None => Some((s.value, s.value)),
            Some((lo, hi)) => Some((lo.min(s.value), hi.max(s.value))),
        })
    }
}
