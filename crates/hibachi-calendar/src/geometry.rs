//! Pixel and percentage placement of an event inside a day column.
//!
//! An event is anchored in the row of its start hour. `top_offset_px` is
//! relative to that row; `height_px` may exceed one row and overflow into the
//! rows below. The host stacks event blocks above the row grid rather than
//! clipping them.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::datetime::event_span_hours;
use crate::event::CalendarEvent;
use crate::overlap::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Hour of the row the event is anchored in.
    pub hour_row: u32,
    pub top_offset_px: f64,
    pub height_px: f64,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Place `event` on the grid, or `None` when it starts outside the placed
/// hours (before `first_hour` or at/after `last_hour`).
pub fn place_event(event: &CalendarEvent, slot: Slot, config: &GridConfig) -> Option<Placement> {
    let hour = event.start.hour();
    if !config.places_hour(hour) {
        return None;
    }

    let (left_percent, width_percent) = horizontal(slot);
    Some(Placement {
        hour_row: hour,
        top_offset_px: event.start.minute() as f64 / 60.0 * config.hour_height_px,
        height_px: event_span_hours(event) * config.hour_height_px,
        left_percent,
        width_percent,
    })
}

/// `(left_percent, width_percent)` for an overlap slot.
pub fn horizontal(slot: Slot) -> (f64, f64) {
    let width = 100.0 / slot.total_columns.max(1) as f64;
    (slot.column as f64 * width, width)
}
