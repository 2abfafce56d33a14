//! # hibachi-calendar
//!
//! Layout core for the reservation calendar of the hibachi catering dashboard.
//!
//! Given the host's event list, the view state and the current time, the crate
//! computes everything a week/day grid needs to draw: which days are visible,
//! how concurrent reservations share a column, where each block sits in the
//! hour rows, and where the "now" line goes. It holds no event storage and
//! does no I/O.
//!
//! ## Modules
//!
//! - [`datetime`] — Local same-day/same-hour tests, week dates, event spans
//! - [`overlap`] — Chained overlap groups and column assignment
//! - [`geometry`] — Pixel/percentage placement within the hour grid
//! - [`indicator`] — Current-time line offset and refresh ticker
//! - [`view`] — View mode, navigation and controlled/uncontrolled state
//! - [`layout`] — The full per-render layout pass
//! - [`config`] — Grid configuration
//! - [`event`] — The event type and boundary parsing
//! - [`error`] — Error types

pub mod config;
pub mod datetime;
pub mod error;
pub mod event;
pub mod geometry;
pub mod indicator;
pub mod layout;
pub mod overlap;
pub mod view;

pub use config::{GridConfig, MAX_REFRESH_SECS};
pub use datetime::{
    event_span_hours, is_same_day, is_same_hour, week_dates_for, week_dates_starting, WeekStart,
};
pub use error::{CalendarError, Result};
pub use event::{parse_date, parse_events_json, parse_local_datetime, CalendarEvent};
pub use geometry::{place_event, Placement};
pub use indicator::{current_time_offset, RefreshTicker, TimeIndicator};
pub use layout::{layout_calendar, layout_day, CalendarLayout, DayLayout, PositionedEvent};
pub use overlap::{assign_columns, overlap_groups, OverlapLayout, Slot};
pub use view::{
    CalendarController, ControlledViewState, LocalViewState, Navigation, ViewMode, ViewState,
    ViewStateSource,
};
