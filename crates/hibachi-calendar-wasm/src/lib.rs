//! WASM bindings for hibachi-calendar.
//!
//! Exposes the week/day layout pass, week dates, toolbar navigation and the
//! current-time indicator to the browser dashboard via `wasm-bindgen`. All
//! complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p hibachi-calendar-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/calendar/wasm/ \
//!   target/wasm32-unknown-unknown/release/hibachi_calendar_wasm.wasm
//! ```

use chrono::NaiveDate;
use hibachi_calendar::{
    parse_date, parse_events_json, parse_local_datetime, CalendarError, GridConfig, Navigation,
    ViewMode, ViewState,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewStateDto {
    anchor_date: String,
    view_mode: ViewMode,
    visible_days: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndicatorDto {
    visible: bool,
    offset_px: f64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: CalendarError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse an optional JSON grid config; `None` or an empty string means defaults.
fn parse_config(config_json: Option<String>) -> Result<GridConfig, JsValue> {
    match config_json.as_deref().map(str::trim) {
        None | Some("") => Ok(GridConfig::default()),
        Some(json) => GridConfig::from_json(json).map_err(js_err),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out events for the visible days of a week or day view.
///
/// # Arguments
/// - `events_json` -- JSON array of `{id, title, start, end, notes?, ...}`;
///   extra fields are passed through to the output untouched
/// - `anchor_date` -- `YYYY-MM-DD`
/// - `view_mode` -- `"week"` or `"day"`
/// - `now` -- local datetime (e.g. `"2024-06-12T18:30:00"`) for the indicator
/// - `config_json` -- optional grid config JSON; missing fields use defaults
///
/// Returns the serialized `CalendarLayout`.
#[wasm_bindgen(js_name = "layoutCalendar")]
pub fn layout_calendar(
    events_json: &str,
    anchor_date: &str,
    view_mode: &str,
    now: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json).map_err(js_err)?;
    let anchor = parse_date(anchor_date).map_err(js_err)?;
    let mode: ViewMode = view_mode.parse().map_err(js_err)?;
    let now = parse_local_datetime(now).map_err(js_err)?;
    let config = parse_config(config_json)?;

    let layout =
        hibachi_calendar::layout_calendar(&events, ViewState::new(anchor, mode), now, &config);
    to_json(&layout)
}

/// The Sunday..Saturday dates (`YYYY-MM-DD`) of the week containing
/// `anchor_date`, as a JSON array.
#[wasm_bindgen(js_name = "weekDates")]
pub fn week_dates(anchor_date: &str) -> Result<String, JsValue> {
    let anchor = parse_date(anchor_date).map_err(js_err)?;
    let dates: Vec<String> = hibachi_calendar::week_dates_for(anchor)
        .into_iter()
        .map(format_date)
        .collect();
    to_json(&dates)
}

/// Apply a toolbar action for an uncontrolled host.
///
/// `action` is `"prev"`, `"next"` or `"today"` (`today` is the host's current
/// local date, `YYYY-MM-DD`). The optional config only matters for its
/// `week_start`. Returns `{anchorDate, viewMode, visibleDays}`.
#[wasm_bindgen(js_name = "navigate")]
pub fn navigate(
    anchor_date: &str,
    view_mode: &str,
    action: &str,
    today: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let anchor = parse_date(anchor_date).map_err(js_err)?;
    let mode: ViewMode = view_mode.parse().map_err(js_err)?;
    let nav = match action {
        "prev" => Navigation::Prev,
        "next" => Navigation::Next,
        "today" => Navigation::Today(parse_date(today).map_err(js_err)?),
        other => {
            return Err(JsValue::from_str(&format!(
                "Unknown navigation action '{}': expected prev, next or today",
                other
            )))
        }
    };

    let config = parse_config(config_json)?;
    let state = ViewState::new(anchor, mode).navigated(nav);
    to_json(&ViewStateDto {
        anchor_date: format_date(state.anchor_date),
        view_mode: state.view_mode,
        visible_days: state
            .visible_days(config.week_start)
            .into_iter()
            .map(format_date)
            .collect(),
    })
}

/// Offset of the current-time line for `now`.
///
/// Returns `{visible, offsetPx}`; `visible` is false outside the displayed
/// hours. The host re-calls this from its own refresh timer.
#[wasm_bindgen(js_name = "currentTimeOffset")]
pub fn current_time_offset(now: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let now = parse_local_datetime(now).map_err(js_err)?;
    let config = parse_config(config_json)?;
    let dto = match hibachi_calendar::current_time_offset(now, &config) {
        Some(offset_px) => IndicatorDto {
            visible: true,
            offset_px,
        },
        None => IndicatorDto {
            visible: false,
            offset_px: 0.0,
        },
    };
    to_json(&dto)
}
