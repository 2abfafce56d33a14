//! Local wall-clock date helpers used by the grid.
//!
//! Everything here works on `Naive*` values: the calendar shows the host's
//! local clock and never converts through UTC, so an 11pm reservation stays on
//! the day it was booked for.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;

/// Shortest span an event is drawn with, in hours.
pub const MIN_SPAN_HOURS: f64 = 0.5;

/// First day of the displayed week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = crate::CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(crate::CalendarError::InvalidConfig(format!(
                "unknown week start '{other}'"
            ))),
        }
    }
}

/// True iff both timestamps fall on the same local calendar date.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// True iff the local hour-of-day of `ts` equals `hour` (0-23).
pub fn is_same_hour(ts: NaiveDateTime, hour: u32) -> bool {
    ts.hour() == hour
}

/// The Sunday..Saturday dates of the week containing `anchor`.
pub fn week_dates_for(anchor: NaiveDate) -> [NaiveDate; 7] {
    week_dates_starting(anchor, WeekStart::Sunday)
}

/// The seven dates of the week containing `anchor`, beginning on `start`.
pub fn week_dates_starting(anchor: NaiveDate, start: WeekStart) -> [NaiveDate; 7] {
    let first = anchor.week(start.weekday()).first_day();
    std::array::from_fn(|i| first + Duration::days(i as i64))
}

/// Fractional hour-of-day, e.g. 09:15 -> 9.25.
pub(crate) fn clock_hours(ts: NaiveDateTime) -> f64 {
    ts.hour() as f64 + ts.minute() as f64 / 60.0
}

/// Visible span of an event in hours, from time-of-day only.
///
/// Spans below [`MIN_SPAN_HOURS`] (including negative ones from `end < start`
/// or events that cross midnight) are raised to the minimum so the block stays
/// clickable.
pub fn event_span_hours(event: &CalendarEvent) -> f64 {
    let span = clock_hours(event.end) - clock_hours(event.start);
    // NaN fails the comparison and is also raised to the minimum.
    if span >= MIN_SPAN_HOURS {
        span
    } else {
        MIN_SPAN_HOURS
    }
}
