//! View state and navigation for the calendar.
//!
//! The controller works against [`ViewStateSource`] so the host can either let
//! the calendar keep its own anchor date and mode ([`LocalViewState`]) or own
//! them itself and be told about every change ([`ControlledViewState`]).

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GridConfig;
use crate::datetime::{week_dates_starting, WeekStart};
use crate::error::CalendarError;
use crate::event::CalendarEvent;
use crate::layout::{layout_calendar, CalendarLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Week,
    Day,
}

impl ViewMode {
    /// Days moved by one prev/next step.
    pub fn step_days(self) -> i64 {
        match self {
            ViewMode::Week => 7,
            ViewMode::Day => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Week => "week",
            ViewMode::Day => "day",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            _ => Err(CalendarError::InvalidViewMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub anchor_date: NaiveDate,
    pub view_mode: ViewMode,
}

/// A discrete navigation action from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Prev,
    Next,
    /// Jump to the given date, normally the host's current local date.
    Today(NaiveDate),
}

impl ViewState {
    pub fn new(anchor_date: NaiveDate, view_mode: ViewMode) -> Self {
        Self {
            anchor_date,
            view_mode,
        }
    }

    /// State after applying `nav`. The mode never changes.
    pub fn navigated(self, nav: Navigation) -> Self {
        let anchor_date = match nav {
            Navigation::Prev => self.anchor_date - Duration::days(self.view_mode.step_days()),
            Navigation::Next => self.anchor_date + Duration::days(self.view_mode.step_days()),
            Navigation::Today(today) => today,
        };
        Self { anchor_date, ..self }
    }

    /// Dates shown as columns: the whole week in week mode, the anchor alone
    /// in day mode.
    pub fn visible_days(&self, week_start: WeekStart) -> Vec<NaiveDate> {
        match self.view_mode {
            ViewMode::Week => week_dates_starting(self.anchor_date, week_start).to_vec(),
            ViewMode::Day => vec![self.anchor_date],
        }
    }
}

/// Where the calendar's view state lives.
pub trait ViewStateSource {
    /// The state the calendar should render now.
    fn current(&self) -> ViewState;

    /// Apply a navigation action.
    fn advance(&mut self, nav: Navigation);

    /// Switch between week and day mode; the anchor date is kept.
    fn set_mode(&mut self, mode: ViewMode);
}

/// Self-managed view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalViewState {
    state: ViewState,
}

impl LocalViewState {
    pub fn new(anchor_date: NaiveDate, view_mode: ViewMode) -> Self {
        Self {
            state: ViewState::new(anchor_date, view_mode),
        }
    }
}

impl ViewStateSource for LocalViewState {
    fn current(&self) -> ViewState {
        self.state
    }

    fn advance(&mut self, nav: Navigation) {
        self.state = self.state.navigated(nav);
    }

    fn set_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }
}

pub type DateChangeFn = Box<dyn FnMut(NaiveDate)>;
pub type ViewChangeFn = Box<dyn FnMut(ViewMode)>;

/// Host-owned view state.
///
/// Each aspect is controlled independently. When the host supplies
/// `on_date_change`, navigation is computed from the current props and handed
/// to the callback, and the anchor date only moves when the host pushes new
/// props through [`sync`](Self::sync). Without it the anchor date is kept
/// here. `on_view_change` works the same way for the view mode.
pub struct ControlledViewState {
    props: ViewState,
    on_date_change: Option<DateChangeFn>,
    on_view_change: Option<ViewChangeFn>,
}

impl ControlledViewState {
    pub fn new(
        props: ViewState,
        on_date_change: Option<DateChangeFn>,
        on_view_change: Option<ViewChangeFn>,
    ) -> Self {
        Self {
            props,
            on_date_change,
            on_view_change,
        }
    }

    /// Replace the props with the host's latest values.
    pub fn sync(&mut self, props: ViewState) {
        self.props = props;
    }
}

impl std::fmt::Debug for ControlledViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlledViewState")
            .field("props", &self.props)
            .field("date_controlled", &self.on_date_change.is_some())
            .field("view_controlled", &self.on_view_change.is_some())
            .finish()
    }
}

impl ViewStateSource for ControlledViewState {
    fn current(&self) -> ViewState {
        self.props
    }

    fn advance(&mut self, nav: Navigation) {
        let anchor_date = self.props.navigated(nav).anchor_date;
        match self.on_date_change.as_mut() {
            Some(on_date_change) => on_date_change(anchor_date),
            None => self.props.anchor_date = anchor_date,
        }
    }

    fn set_mode(&mut self, mode: ViewMode) {
        match self.on_view_change.as_mut() {
            Some(on_view_change) => on_view_change(mode),
            None => self.props.view_mode = mode,
        }
    }
}

pub type EventClickFn = Box<dyn FnMut(&CalendarEvent)>;

/// Toolbar actions, visible-day derivation and layout over a view source.
pub struct CalendarController<S: ViewStateSource> {
    source: S,
    config: GridConfig,
    on_event_click: Option<EventClickFn>,
}

impl<S: ViewStateSource> CalendarController<S> {
    pub fn new(source: S, config: GridConfig) -> Self {
        Self {
            source,
            config,
            on_event_click: None,
        }
    }

    pub fn with_event_click(mut self, on_event_click: EventClickFn) -> Self {
        self.on_event_click = Some(on_event_click);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn state(&self) -> ViewState {
        self.source.current()
    }

    pub fn prev(&mut self) {
        self.navigate(Navigation::Prev);
    }

    pub fn next(&mut self) {
        self.navigate(Navigation::Next);
    }

    pub fn today(&mut self, today: NaiveDate) {
        self.navigate(Navigation::Today(today));
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        debug!(%mode, "view mode change");
        self.source.set_mode(mode);
    }

    fn navigate(&mut self, nav: Navigation) {
        debug!(?nav, from = %self.source.current().anchor_date, "calendar navigation");
        self.source.advance(nav);
    }

    pub fn visible_days(&self) -> Vec<NaiveDate> {
        self.source.current().visible_days(self.config.week_start)
    }

    pub fn layout(&self, events: &[CalendarEvent], now: NaiveDateTime) -> CalendarLayout {
        layout_calendar(events, self.source.current(), now, &self.config)
    }

    /// Report a click on the event with `id`. Returns the event when found.
    pub fn click_event<'e>(
        &mut self,
        id: &str,
        events: &'e [CalendarEvent],
    ) -> Option<&'e CalendarEvent> {
        let event = events.iter().find(|e| e.id == id)?;
        if let Some(on_click) = self.on_event_click.as_mut() {
            on_click(event);
        }
        Some(event)
    }
}
