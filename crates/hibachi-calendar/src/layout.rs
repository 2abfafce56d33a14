//! Full layout pass: visible days, per-day overlap slots, placements and the
//! current-time indicator.
//!
//! The result is a pure function of the event list, the view state, "now" and
//! the grid config; the host re-runs it on every render.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GridConfig;
use crate::datetime::is_same_day;
use crate::event::CalendarEvent;
use crate::geometry::{place_event, Placement};
use crate::indicator::TimeIndicator;
use crate::overlap::assign_columns;
use crate::view::ViewState;

/// Day column label format, e.g. `Wed 6/12`.
pub const DAY_LABEL_FORMAT: &str = "%a %-m/%-d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub event: CalendarEvent,
    #[serde(flatten)]
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub label: String,
    pub is_today: bool,
    pub events: Vec<PositionedEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarLayout {
    pub view: ViewState,
    /// Hours that get a labelled row.
    pub hours: Vec<u32>,
    pub days: Vec<DayLayout>,
    pub indicator: TimeIndicator,
}

/// Lay out the events of a single day column.
///
/// Events not on `date`, and events starting outside the placed hours, are
/// left out. Output is in chronological order.
pub fn layout_day(
    events: &[CalendarEvent],
    date: NaiveDate,
    config: &GridConfig,
) -> Vec<PositionedEvent> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    let mut day_events: Vec<CalendarEvent> = events
        .iter()
        .filter(|e| is_same_day(e.start, midnight))
        .cloned()
        .collect();
    day_events.sort_by_key(|e| e.start);

    let slots = assign_columns(&day_events);
    let total = day_events.len();

    let positioned: Vec<PositionedEvent> = day_events
        .into_iter()
        .filter_map(|event| {
            let placement = place_event(&event, slots.slot_for(&event.id), config)?;
            Some(PositionedEvent { event, placement })
        })
        .collect();

    if positioned.len() < total {
        debug!(
            %date,
            dropped = total - positioned.len(),
            "events outside the displayed hours were not placed"
        );
    }

    positioned
}

/// Lay out every visible day of `view`.
pub fn layout_calendar(
    events: &[CalendarEvent],
    view: ViewState,
    now: NaiveDateTime,
    config: &GridConfig,
) -> CalendarLayout {
    let dates = view.visible_days(config.week_start);
    let today = now.date();

    let days: Vec<DayLayout> = dates
        .iter()
        .map(|&date| DayLayout {
            date,
            label: date.format(DAY_LABEL_FORMAT).to_string(),
            is_today: date == today,
            events: layout_day(events, date, config),
        })
        .collect();

    debug!(
        anchor = %view.anchor_date,
        mode = %view.view_mode,
        input = events.len(),
        placed = days.iter().map(|d| d.events.len()).sum::<usize>(),
        "calendar layout"
    );

    CalendarLayout {
        view,
        hours: config.hour_rows().collect(),
        indicator: TimeIndicator::for_days(now, &dates, config),
        days,
    }
}
