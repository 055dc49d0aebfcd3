//! Start-time assignment within a (day, half-day slot) group.
//!
//! Each slot has a fixed menu of legal start times (on the hour or
//! half-hour). A lone occurrence takes the middle of the menu; a group is
//! spread evenly across it, ordered by submission order so a recurring
//! meeting keeps the same relative start every week.

use super::types::{Occurrence, TimeSlot};

/// Legal morning starts, minutes after 9:00 (9:00 through 11:30).
pub const MORNING_STARTS: [u16; 6] = [0, 30, 60, 90, 120, 150];

/// Legal afternoon starts (12:00 through 4:30, so a 30-minute bar ends by
/// 5:00).
pub const AFTERNOON_STARTS: [u16; 10] = [180, 210, 240, 270, 300, 330, 360, 390, 420, 450];

pub fn start_candidates(slot: TimeSlot) -> &'static [u16] {
    match slot {
        TimeSlot::Morning => &MORNING_STARTS,
        TimeSlot::Afternoon => &AFTERNOON_STARTS,
    }
}

/// Assigns a start offset to every occurrence in one (day, slot) group.
///
/// With more occurrences than candidates the rounded index repeats and two
/// meetings share a start time; that capacity overflow is accepted rather
/// than rejected or clamped.
pub fn assign_start_offsets(slot: TimeSlot, group: &mut [Occurrence]) {
    let candidates = start_candidates(slot);
    let m = candidates.len();
    match group.len() {
        0 => {}
        1 => group[0].start_offset = candidates[m / 2],
        n => {
            group.sort_by_key(|occ| occ.submission_order);
            for (i, occ) in group.iter_mut().enumerate() {
                // Ties round to even so a .5 index leans toward the outer
                // candidates, e.g. three morning meetings land at 9:00,
                // 10:00 and 11:30 rather than crowding the middle.
                let index =
                    (i as f64 * (m - 1) as f64 / (n - 1) as f64).round_ties_even() as usize;
                occ.start_offset = candidates[index];
            }
        }
    }
}
