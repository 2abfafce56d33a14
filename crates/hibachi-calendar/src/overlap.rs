//! Side-by-side column assignment for concurrent events within one day.
//!
//! Events are sorted by start time and swept once. An event joins the open
//! group while it starts strictly before the latest end seen so far in that
//! group; otherwise the group closes and a new one begins. Members of a group
//! share its width: `column` is the position in sort order and
//! `total_columns` the group size.
//!
//! The grouping is a chain, not an interval coloring. With A 9:00-10:00,
//! B 9:30-11:00 and C 10:30-11:30, B's end keeps the group open when C
//! arrives, so all three get a third of the width even though A and C never
//! overlap and could have shared a column.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::event::CalendarEvent;

/// Horizontal slot of an event inside its overlap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub column: usize,
    pub total_columns: usize,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            column: 0,
            total_columns: 1,
        }
    }
}

/// Slots keyed by event id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapLayout {
    slots: HashMap<String, Slot>,
}

impl OverlapLayout {
    /// Slot for `id`, or a single full-width column when the id is unknown.
    pub fn slot_for(&self, id: &str) -> Slot {
        self.slots.get(id).copied().unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<Slot> {
        self.slots.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Partition a day's events into chained overlap groups.
///
/// Each group is a list of indices into `events`, ordered by start time
/// (ties keep input order). Groups are returned in chronological order.
pub fn overlap_groups(events: &[CalendarEvent]) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    // `sort_by_key` is stable, so equal starts keep their input order.
    order.sort_by_key(|&i| events[i].start);

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut running_max_end: Option<NaiveDateTime> = None;

    for i in order {
        let event = &events[i];
        match running_max_end {
            Some(max_end) if event.start < max_end => {
                current.push(i);
                running_max_end = Some(max_end.max(event.end));
            }
            None => {
                current.push(i);
                running_max_end = Some(event.end);
            }
            Some(_) => {
                groups.push(std::mem::take(&mut current));
                current.push(i);
                running_max_end = Some(event.end);
            }
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Assign `(column, total_columns)` to every event of one day.
///
/// The caller is expected to have filtered `events` down to a single day.
pub fn assign_columns(events: &[CalendarEvent]) -> OverlapLayout {
    let groups = overlap_groups(events);
    let mut slots = HashMap::with_capacity(events.len());

    for group in &groups {
        let total_columns = group.len();
        if total_columns > 1 {
            trace!(size = total_columns, "overlap group");
        }
        for (column, &i) in group.iter().enumerate() {
            slots.insert(
                events[i].id.clone(),
                Slot {
                    column,
                    total_columns,
                },
            );
        }
    }

    OverlapLayout { slots }
}
