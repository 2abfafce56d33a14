//! Grid configuration.
//!
//! Defaults match the catering dashboard: rows from 12:00 through 22:00,
//! 32 px per hour, Sunday-first weeks, indicator refreshed every minute.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::datetime::WeekStart;
use crate::error::{CalendarError, Result};

pub const DEFAULT_FIRST_HOUR: u32 = 12;
pub const DEFAULT_LAST_HOUR: u32 = 22;
pub const DEFAULT_HOUR_HEIGHT_PX: f64 = 32.0;
pub const DEFAULT_REFRESH_SECS: u64 = 60;
/// Longest accepted indicator refresh interval, one day.
pub const MAX_REFRESH_SECS: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Hour of the first grid row.
    pub first_hour: u32,
    /// Hour of the last labelled row. Events and the time indicator are only
    /// placed while the clock is before this hour.
    pub last_hour: u32,
    pub hour_height_px: f64,
    pub week_start: WeekStart,
    /// How often the host should recompute the current-time indicator.
    pub refresh_interval_secs: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_hour: DEFAULT_FIRST_HOUR,
            last_hour: DEFAULT_LAST_HOUR,
            hour_height_px: DEFAULT_HOUR_HEIGHT_PX,
            week_start: WeekStart::default(),
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl GridConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.last_hour > 24 {
            return Err(CalendarError::InvalidConfig(format!(
                "last_hour must be at most 24, got {}",
                self.last_hour
            )));
        }
        if self.first_hour >= self.last_hour {
            return Err(CalendarError::InvalidConfig(format!(
                "first_hour ({}) must be before last_hour ({})",
                self.first_hour, self.last_hour
            )));
        }
        if !self.hour_height_px.is_finite() || self.hour_height_px <= 0.0 {
            return Err(CalendarError::InvalidConfig(format!(
                "hour_height_px must be a positive number, got {}",
                self.hour_height_px
            )));
        }
        if !(1..=MAX_REFRESH_SECS).contains(&self.refresh_interval_secs) {
            return Err(CalendarError::InvalidConfig(format!(
                "refresh_interval_secs must be between 1 and {}, got {}",
                MAX_REFRESH_SECS, self.refresh_interval_secs
            )));
        }
        Ok(())
    }

    /// Hours that get a labelled row, `first_hour..=last_hour`.
    pub fn hour_rows(&self) -> RangeInclusive<u32> {
        self.first_hour..=self.last_hour
    }

    /// Whether events starting in `hour` are placed on the grid.
    pub fn places_hour(&self, hour: u32) -> bool {
        hour >= self.first_hour && hour < self.last_hour
    }

    /// Total pixel height of the labelled rows. An inverted range that skipped
    /// [`validate`](Self::validate) counts as a single row.
    pub fn grid_height_px(&self) -> f64 {
        (self.last_hour.saturating_sub(self.first_hour) + 1) as f64 * self.hour_height_px
    }
}
