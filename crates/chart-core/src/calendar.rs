// File: crates/chart-core/src/calendar.rs
// Summary: Calendar capability (date composition + narrow weekday labels) backed by chrono.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::error::{ChartError, Result};

/// Minimal calendar surface the data preparation and axis code rely on.
pub trait Calendar {
    /// Compose a date, substituting today when the components are not a real date.
    fn compose_date(&self, year: i32, month: u32, day: u32) -> NaiveDate {
        match try_compose_date(year, month, day) {
            Ok(date) => date,
            Err(err) => {
                let today = self.today();
                tracing::warn!(%err, %today, "falling back to today's date");
                today
            }
        }
    }

    /// Single-letter weekday label (M T W T F S S).
    fn weekday_abbreviation(&self, date: NaiveDate) -> &'static str {
        narrow_weekday(date.weekday())
    }

    fn today(&self) -> NaiveDate;
}

/// Gregorian calendar reading the local wall clock for its fallback date.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gregorian;

impl Calendar for Gregorian {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Calendar with a pinned "today", for deterministic fallbacks.
#[derive(Clone, Copy, Debug)]
pub struct FixedCalendar {
    pub today: NaiveDate,
}

impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Strict date composition.
pub fn try_compose_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ChartError::InvalidDate { year, month, day })
}

/// First day of the month, leniently composed.
pub fn first_of_month(calendar: &impl Calendar, year: i32, month: u32) -> NaiveDate {
    calendar.compose_date(year, month, 1)
}

pub fn narrow_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "M",
        Weekday::Tue => "T",
        Weekday::Wed => "W",
        Weekday::Thu => "T",
        Weekday::Fri => "F",
        Weekday::Sat => "S",
        Weekday::Sun => "S",
    }
}
