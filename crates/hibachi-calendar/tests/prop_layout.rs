//! Property-based tests for week dates, overlap grouping and layout using
//! proptest.
//!
//! These check invariants that should hold for *any* event list, not just the
//! hand-picked cases in the other test files.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use hibachi_calendar::{
    assign_columns, layout_calendar, overlap_groups, week_dates_for, CalendarEvent, GridConfig,
    ViewMode, ViewState,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A date in 2023-2027. Day is capped at 28 to avoid invalid month/day combos.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2023i32..=2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Events on 2024-06-12 starting between 10:00 and 23:00, 0-240 minutes long.
fn arb_day_events() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec((600u32..1380, 0i64..=240), 0..12).prop_map(|specs| {
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (start_min, len))| {
                let start: NaiveDateTime = day.and_hms_opt(start_min / 60, start_min % 60, 0).unwrap();
                CalendarEvent::new(format!("e{i}"), "Reservation", start, start + Duration::minutes(len))
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Week dates
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn week_is_seven_consecutive_days_from_sunday(anchor in arb_date()) {
        let week = week_dates_for(anchor);
        prop_assert_eq!(week[0].weekday(), Weekday::Sun);
        for pair in week.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        prop_assert!(week.contains(&anchor));
    }

    #[test]
    fn day_mode_always_shows_only_anchor(anchor in arb_date(), events in arb_day_events()) {
        let layout = layout_calendar(
            &events,
            ViewState::new(anchor, ViewMode::Day),
            anchor.and_hms_opt(15, 0, 0).unwrap(),
            &GridConfig::default(),
        );
        prop_assert_eq!(layout.days.len(), 1);
        prop_assert_eq!(layout.days[0].date, anchor);
    }
}

// ---------------------------------------------------------------------------
// Overlap grouping
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_event_gets_exactly_one_slot(events in arb_day_events()) {
        let groups = overlap_groups(&events);
        let mut seen: Vec<usize> = groups.iter().flatten().copied().collect();
        seen.sort();
        prop_assert_eq!(seen, (0..events.len()).collect::<Vec<_>>());

        let layout = assign_columns(&events);
        prop_assert_eq!(layout.len(), events.len());
    }

    #[test]
    fn columns_are_distinct_within_a_group(events in arb_day_events()) {
        let layout = assign_columns(&events);
        for group in overlap_groups(&events) {
            let mut columns: Vec<usize> = group
                .iter()
                .map(|&i| layout.slot_for(&events[i].id).column)
                .collect();
            columns.sort();
            prop_assert_eq!(columns, (0..group.len()).collect::<Vec<_>>());
            for &i in &group {
                prop_assert_eq!(layout.slot_for(&events[i].id).total_columns, group.len());
            }
        }
    }

    #[test]
    fn separate_groups_never_overlap(events in arb_day_events()) {
        let groups = overlap_groups(&events);
        for pair in groups.windows(2) {
            let prev_end = pair[0].iter().map(|&i| events[i].end).max().unwrap();
            let next_start = pair[1].iter().map(|&i| events[i].start).min().unwrap();
            prop_assert!(prev_end <= next_start);
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn placed_blocks_are_at_least_half_an_hour_tall(events in arb_day_events()) {
        let config = GridConfig::default();
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let layout = layout_calendar(
            &events,
            ViewState::new(day, ViewMode::Day),
            day.and_hms_opt(12, 0, 0).unwrap(),
            &config,
        );
        for placed in &layout.days[0].events {
            prop_assert!(placed.placement.height_px >= 0.5 * config.hour_height_px);
            prop_assert!(placed.placement.top_offset_px < config.hour_height_px);
            prop_assert!(placed.placement.left_percent + placed.placement.width_percent <= 100.0 + 1e-9);
            prop_assert!(config.places_hour(placed.placement.hour_row));
        }
    }

    #[test]
    fn layout_is_a_pure_function(events in arb_day_events(), minute in 0u32..1440) {
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let now = day.and_hms_opt(minute / 60, minute % 60, 0).unwrap();
        let view = ViewState::new(day, ViewMode::Week);
        let config = GridConfig::default();
        prop_assert_eq!(
            layout_calendar(&events, view, now, &config),
            layout_calendar(&events, view, now, &config)
        );
    }
}
