//! Tests for the full week/day layout pass.

use chrono::{NaiveDate, NaiveDateTime};
use hibachi_calendar::{
    layout_calendar, layout_day, CalendarEvent, GridConfig, ViewMode, ViewState,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn event(id: &str, start: &str, end: &str) -> CalendarEvent {
    CalendarEvent::new(id, format!("Reservation {id}"), at(start), at(end))
}

fn week_of_june_12() -> Vec<CalendarEvent> {
    vec![
        event("mon-lunch", "2024-06-10 12:30", "2024-06-10 14:00"),
        event("wed-a", "2024-06-12 18:00", "2024-06-12 20:00"),
        event("wed-b", "2024-06-12 19:00", "2024-06-12 21:00"),
        event("wed-late", "2024-06-12 22:30", "2024-06-12 23:30"),
        event("fri", "2024-06-14 17:15", "2024-06-14 19:15"),
        event("next-week", "2024-06-17 18:00", "2024-06-17 20:00"),
    ]
}

// ── Week view ───────────────────────────────────────────────────────────────

#[test]
fn week_layout_has_seven_labelled_days() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 12), ViewMode::Week),
        at("2024-06-12 15:00"),
        &GridConfig::default(),
    );

    assert_eq!(layout.days.len(), 7);
    assert_eq!(layout.days[0].label, "Sun 6/9");
    assert_eq!(layout.days[3].label, "Wed 6/12");
    assert!(layout.days[3].is_today);
    assert_eq!(layout.days.iter().filter(|d| d.is_today).count(), 1);
    assert_eq!(layout.hours, (12..=22).collect::<Vec<u32>>());
}

#[test]
fn events_are_bucketed_by_start_date() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 12), ViewMode::Week),
        at("2024-06-12 15:00"),
        &GridConfig::default(),
    );

    let ids: Vec<Vec<&str>> = layout
        .days
        .iter()
        .map(|d| d.events.iter().map(|p| p.event.id.as_str()).collect())
        .collect();

    assert!(ids[0].is_empty());
    assert_eq!(ids[1], vec!["mon-lunch"]);
    assert_eq!(ids[3], vec!["wed-a", "wed-b"]);
    assert_eq!(ids[5], vec!["fri"]);
    assert!(ids.iter().flatten().all(|id| *id != "next-week"));
}

#[test]
fn out_of_hours_event_is_dropped() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 12), ViewMode::Week),
        at("2024-06-12 15:00"),
        &GridConfig::default(),
    );
    assert!(layout.days[3]
        .events
        .iter()
        .all(|p| p.event.id != "wed-late"));
}

#[test]
fn dropped_event_still_counts_for_column_width() {
    // Grouping runs before placement, so the unplaced morning event keeps
    // its column.
    let events = vec![
        event("morning", "2024-06-12 10:00", "2024-06-12 12:30"),
        event("noon", "2024-06-12 12:15", "2024-06-12 13:00"),
    ];
    let placed = layout_day(&events, date(2024, 6, 12), &GridConfig::default());
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].placement.width_percent, 50.0);
    assert_eq!(placed[0].placement.left_percent, 50.0);
}

#[test]
fn overlapping_reservations_share_the_column() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 12), ViewMode::Week),
        at("2024-06-12 15:00"),
        &GridConfig::default(),
    );
    let wed = &layout.days[3].events;
    assert_eq!(wed[0].placement.width_percent, 50.0);
    assert_eq!(wed[0].placement.left_percent, 0.0);
    assert_eq!(wed[1].placement.left_percent, 50.0);
    assert_eq!(wed[1].placement.hour_row, 19);
    assert_eq!(wed[1].placement.height_px, 64.0);
}

#[test]
fn indicator_follows_today_column() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 12), ViewMode::Week),
        at("2024-06-14 13:30"),
        &GridConfig::default(),
    );
    assert!(layout.indicator.visible);
    assert_eq!(layout.indicator.day_index, Some(5));
    assert_eq!(layout.indicator.offset_px, 48.0);
}

#[test]
fn indicator_hidden_in_other_weeks() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 19), ViewMode::Week),
        at("2024-06-12 15:00"),
        &GridConfig::default(),
    );
    assert!(!layout.indicator.visible);
    assert!(layout.days.iter().all(|d| !d.is_today));
}

// ── Day view ────────────────────────────────────────────────────────────────

#[test]
fn day_layout_has_exactly_the_anchor() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 14), ViewMode::Day),
        at("2024-06-12 15:00"),
        &GridConfig::default(),
    );
    assert_eq!(layout.days.len(), 1);
    assert_eq!(layout.days[0].date, date(2024, 6, 14));
    assert_eq!(layout.days[0].events.len(), 1);
    assert_eq!(layout.days[0].events[0].placement.top_offset_px, 8.0);
}

#[test]
fn day_layout_with_no_events() {
    let layout = layout_calendar(
        &[],
        ViewState::new(date(2024, 6, 14), ViewMode::Day),
        at("2024-06-14 15:00"),
        &GridConfig::default(),
    );
    assert_eq!(layout.days.len(), 1);
    assert!(layout.days[0].events.is_empty());
    assert!(layout.indicator.visible);
    assert_eq!(layout.indicator.day_index, Some(0));
}

// ── Purity and serialization ────────────────────────────────────────────────

#[test]
fn layout_is_idempotent() {
    let events = week_of_june_12();
    let view = ViewState::new(date(2024, 6, 12), ViewMode::Week);
    let now = at("2024-06-12 19:20");
    let config = GridConfig::default();

    let first = layout_calendar(&events, view, now, &config);
    let second = layout_calendar(&events, view, now, &config);
    assert_eq!(first, second);
}

#[test]
fn layout_serializes_flat_placements() {
    let layout = layout_calendar(
        &week_of_june_12(),
        ViewState::new(date(2024, 6, 14), ViewMode::Day),
        at("2024-06-14 18:00"),
        &GridConfig::default(),
    );
    let json = serde_json::to_value(&layout).unwrap();

    let placed = &json["days"][0]["events"][0];
    assert_eq!(placed["event"]["id"], "fri");
    assert_eq!(placed["top_offset_px"], 8.0);
    assert_eq!(placed["hour_row"], 17);
    assert_eq!(json["view"]["view_mode"], "day");
    assert_eq!(json["indicator"]["visible"], true);
}

#[test]
fn extra_event_fields_survive_layout() {
    let mut booking = event("r9", "2024-06-12 18:00", "2024-06-12 19:30");
    booking
        .extra
        .insert("guests".to_string(), serde_json::json!(14));
    let layout = layout_calendar(
        &[booking],
        ViewState::new(date(2024, 6, 12), ViewMode::Day),
        at("2024-06-12 12:00"),
        &GridConfig::default(),
    );
    assert_eq!(layout.days[0].events[0].event.extra["guests"], 14);
}
