//! Current-time indicator ("now" line) position and refresh cadence.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::{GridConfig, DEFAULT_REFRESH_SECS, MAX_REFRESH_SECS};

/// Vertical offset of `now` from the top of the grid, or `None` when the
/// clock is outside the placed hours and the indicator should be hidden.
pub fn current_time_offset(now: NaiveDateTime, config: &GridConfig) -> Option<f64> {
    let hour = now.hour();
    if !config.places_hour(hour) {
        return None;
    }
    let hours_in = (hour - config.first_hour) as f64 + now.minute() as f64 / 60.0;
    Some(hours_in * config.hour_height_px)
}

/// Indicator state handed to the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeIndicator {
    pub visible: bool,
    pub offset_px: f64,
    /// Index of today's column among the visible days.
    pub day_index: Option<usize>,
}

impl TimeIndicator {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            offset_px: 0.0,
            day_index: None,
        }
    }

    /// Indicator for `now` over the visible `days`. Shown only when today is
    /// visible and the clock is inside the placed hours.
    pub fn for_days(now: NaiveDateTime, days: &[NaiveDate], config: &GridConfig) -> Self {
        let day_index = days.iter().position(|d| *d == now.date());
        match (day_index, current_time_offset(now, config)) {
            (Some(index), Some(offset_px)) => Self {
                visible: true,
                offset_px,
                day_index: Some(index),
            },
            _ => Self::hidden(),
        }
    }
}

/// Tells the host when the indicator is due for recomputation.
///
/// The host owns the actual timer; it calls [`start`](Self::start) on mount,
/// polls [`due`](Self::due) from its tick callback and calls
/// [`stop`](Self::stop) on teardown. A stopped ticker is never due.
#[derive(Debug, Clone)]
pub struct RefreshTicker {
    interval: Duration,
    last_refresh: Option<NaiveDateTime>,
    running: bool,
}

impl RefreshTicker {
    /// Ticker firing every `interval_secs`, clamped to `1..=MAX_REFRESH_SECS`.
    pub fn new(interval_secs: u64) -> Self {
        let interval = i64::try_from(interval_secs.clamp(1, MAX_REFRESH_SECS))
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(DEFAULT_REFRESH_SECS as i64));
        Self {
            interval,
            last_refresh: None,
            running: false,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.refresh_interval_secs)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
        self.last_refresh = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_refresh = None;
    }

    /// Whether the indicator should be recomputed at `now`.
    pub fn due(&self, now: NaiveDateTime) -> bool {
        if !self.running {
            return false;
        }
        match self.last_refresh {
            None => true,
            // A clock that moved backwards also forces a refresh.
            Some(last) => now < last || now - last >= self.interval,
        }
    }

    /// Recompute the indicator if due, recording the refresh time.
    pub fn poll(
        &mut self,
        now: NaiveDateTime,
        days: &[NaiveDate],
        config: &GridConfig,
    ) -> Option<TimeIndicator> {
        if !self.due(now) {
            return None;
        }
        self.last_refresh = Some(now);
        Some(TimeIndicator::for_days(now, days, config))
    }
}
