//! Base-day selection: either the earliest instance of a preferred weekday,
//! or the least-loaded weekday with Fridays penalized.

use std::collections::BTreeMap;

use super::calendar::{is_friday, weekdays};
use super::types::MeetingRequest;

/// Per-run occurrence counters for every weekday of the month.
///
/// Counters start at zero, are incremented as occurrences are actually
/// placed, and are never decremented. Each scheduling run owns a fresh one.
#[derive(Debug, Clone)]
pub struct WeekdayLoad {
    counts: BTreeMap<u8, u32>,
}

impl WeekdayLoad {
    pub fn new() -> Self {
        WeekdayLoad {
            counts: weekdays().into_iter().map(|day| (day, 0)).collect(),
        }
    }

    pub fn get(&self, day: u8) -> u32 {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    /// Records one occurrence placed on `day`.
    pub fn record(&mut self, day: u8) {
        *self.counts.entry(day).or_insert(0) += 1;
    }
}

impl Default for WeekdayLoad {
    fn default() -> Self {
        WeekdayLoad::new()
    }
}

/// Chooses the base day for a request, before recurrence expansion.
///
/// A preferred weekday pins the request to the earliest day of that weekday
/// in the month. Without a preference the least-loaded weekday wins, with
/// Fridays penalized and ties broken by the smallest day number. Selection
/// never touches the load counters; only placed occurrences do.
pub fn pick_base_day(request: &MeetingRequest, available_days: &[u8], load: &WeekdayLoad) -> u8 {
    if let Some(preferred) = request.preferred_weekday {
        let target = preferred.index();
        available_days
            .iter()
            .copied()
            .filter(|&day| (day - 1) % 7 == target)
            .min()
            .or_else(|| available_days.first().copied())
            .unwrap_or(1)
    } else {
        available_days
            .iter()
            .copied()
            .min_by_key(|&day| (u8::from(is_friday(day)), load.get(day), day))
            .unwrap_or(1)
    }
}
