//! Recurrence expansion: turns a base day and a cadence into the concrete
//! occurrence days of the month, updating load counters as it goes.

use super::calendar::{is_weekday, MONTH_DAYS};
use super::day_pick::WeekdayLoad;
use super::types::Recurrence;

/// Produces the ordered occurrence days for a request.
///
/// Monthly yields the base day alone. Periodic cadences step by their delta
/// until the candidate leaves the month; candidates that fall on a weekend
/// are skipped outright, never moved to an adjacent day. Every accepted day
/// bumps the load counter for that day.
pub fn expand_occurrence_days(
    base_day: u8,
    recurrence: Recurrence,
    load: &mut WeekdayLoad,
) -> Vec<u8> {
    let mut occurrence_days = Vec::new();
    match recurrence.delta_days() {
        None => {
            if base_day <= MONTH_DAYS {
                occurrence_days.push(base_day);
                load.record(base_day);
            }
        }
        Some(delta) => {
            let mut candidate = base_day;
            while candidate <= MONTH_DAYS {
                if is_weekday(candidate) {
                    occurrence_days.push(candidate);
                    load.record(candidate);
                }
                candidate += delta;
            }
        }
    }
    occurrence_days
}
