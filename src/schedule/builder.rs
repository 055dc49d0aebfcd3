//! Orchestrates one scheduling run: base-day selection, recurrence
//! expansion, then per-slot start assignment, producing the month schedule.

use std::collections::BTreeMap;

use super::calendar::weekdays;
use super::day_pick::{pick_base_day, WeekdayLoad};
use super::recurrence::expand_occurrence_days;
use super::slot_assign::assign_start_offsets;
use super::types::{MeetingRequest, MonthSchedule, Occurrence, TimeSlot};

/// Computes the full month schedule for an ordered request list.
///
/// Pure: all derived state (load counters, occurrence buckets) is rebuilt on
/// every call, so the caller owns the request list and nothing persists
/// between runs. Requests must be processed in intake order because later
/// base-day choices depend on the load left behind by earlier placements.
pub fn build_schedule(requests: &[MeetingRequest]) -> MonthSchedule {
    let available_days = weekdays();
    let mut load = WeekdayLoad::new();
    let mut days: BTreeMap<u8, Vec<Occurrence>> =
        available_days.iter().map(|&day| (day, Vec::new())).collect();

    for request in requests {
        let base_day = pick_base_day(request, &available_days, &load);
        for day in expand_occurrence_days(base_day, request.recurrence, &mut load) {
            if let Some(bucket) = days.get_mut(&day) {
                bucket.push(Occurrence {
                    day,
                    time_slot: request.time_slot,
                    start_offset: 0,
                    meeting_type: request.meeting_type,
                    label: request.label.clone(),
                    submission_order: request.submission_order,
                });
            }
        }
    }

    // Start times are a per-(day, slot) decision and need the complete
    // occurrence list, so they are assigned only after every request has
    // been expanded.
    for bucket in days.values_mut() {
        let (mut morning, mut afternoon): (Vec<Occurrence>, Vec<Occurrence>) = bucket
            .drain(..)
            .partition(|occ| occ.time_slot == TimeSlot::Morning);
        assign_start_offsets(TimeSlot::Morning, &mut morning);
        assign_start_offsets(TimeSlot::Afternoon, &mut afternoon);
        bucket.extend(morning);
        bucket.extend(afternoon);
        bucket.sort_by_key(|occ| (occ.start_offset, occ.submission_order));
    }

    MonthSchedule { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::calendar::is_weekday;
    use crate::schedule::types::{MeetingType, Recurrence, Weekday};

    fn request(
        meeting_type: MeetingType,
        slot: TimeSlot,
        recurrence: Recurrence,
        preferred: Option<Weekday>,
        order: u32,
    ) -> MeetingRequest {
        MeetingRequest {
            meeting_type,
            time_slot: slot,
            recurrence,
            preferred_weekday: preferred,
            label: String::new(),
            submission_order: order,
        }
    }

    #[test]
    fn three_monthly_requests_spread_over_the_first_three_days() {
        let requests = vec![
            request(MeetingType::AllHands, TimeSlot::Morning, Recurrence::Monthly, None, 1),
            request(MeetingType::Management, TimeSlot::Morning, Recurrence::Monthly, None, 2),
            request(MeetingType::BimReview, TimeSlot::Morning, Recurrence::Monthly, None, 3),
        ];
        let schedule = build_schedule(&requests);
        assert_eq!(schedule.total_occurrences(), 3);
        for day in [1, 2, 3] {
            let occurrences = schedule.occurrences_on(day);
            assert_eq!(occurrences.len(), 1, "day {day}");
            // Lone morning occurrence: middle candidate, 10:30 AM.
            assert_eq!(occurrences[0].start_offset, 90);
        }
    }

    #[test]
    fn every_occurrence_lands_on_a_weekday_within_the_month() {
        let requests = vec![
            request(MeetingType::OneToOne, TimeSlot::Morning, Recurrence::Weekly, None, 1),
            request(MeetingType::AllHands, TimeSlot::Morning, Recurrence::Weekly, Some(Weekday::Wednesday), 2),
            request(MeetingType::Management, TimeSlot::Afternoon, Recurrence::Fortnightly, Some(Weekday::Tuesday), 3),
            request(MeetingType::ClientReview, TimeSlot::Afternoon, Recurrence::EveryThirdWeek, None, 4),
            request(MeetingType::ProjectBrief, TimeSlot::Morning, Recurrence::Monthly, Some(Weekday::Friday), 5),
        ];
        let schedule = build_schedule(&requests);
        assert!(schedule.total_occurrences() > 0);
        for (&day, occurrences) in &schedule.days {
            assert!(is_weekday(day) && day <= 31);
            for occ in occurrences {
                assert_eq!(occ.day, day);
            }
        }
    }

    #[test]
    fn preferred_wednesday_starts_on_day_three() {
        let requests = vec![request(
            MeetingType::AllHands,
            TimeSlot::Morning,
            Recurrence::Weekly,
            Some(Weekday::Wednesday),
            1,
        )];
        let schedule = build_schedule(&requests);
        let days: Vec<u8> = schedule
            .days
            .iter()
            .filter(|(_, occs)| !occs.is_empty())
            .map(|(&day, _)| day)
            .collect();
        assert_eq!(days, vec![3, 10, 17, 24, 31]);
    }

    #[test]
    fn consecutive_unpreferred_requests_get_distinct_base_days() {
        let requests = vec![
            request(MeetingType::AllHands, TimeSlot::Morning, Recurrence::Weekly, None, 1),
            request(MeetingType::Management, TimeSlot::Morning, Recurrence::Weekly, None, 2),
        ];
        let schedule = build_schedule(&requests);
        // First weekly request claims the Mondays; the second must not.
        let first_days: Vec<u8> = schedule
            .days
            .iter()
            .filter(|(_, occs)| occs.iter().any(|o| o.submission_order == 1))
            .map(|(&day, _)| day)
            .collect();
        let second_days: Vec<u8> = schedule
            .days
            .iter()
            .filter(|(_, occs)| occs.iter().any(|o| o.submission_order == 2))
            .map(|(&day, _)| day)
            .collect();
        assert_eq!(first_days, vec![1, 8, 15, 22, 29]);
        assert_eq!(second_days, vec![2, 9, 16, 23, 30]);
    }

    #[test]
    fn weekly_siblings_keep_the_same_relative_start_each_week() {
        let requests = vec![
            request(MeetingType::OneToOne, TimeSlot::Morning, Recurrence::Weekly, Some(Weekday::Monday), 1),
            request(MeetingType::BimReview, TimeSlot::Morning, Recurrence::Weekly, Some(Weekday::Monday), 2),
        ];
        let schedule = build_schedule(&requests);
        for day in [1, 8, 15, 22, 29] {
            let occurrences = schedule.occurrences_on(day);
            assert_eq!(occurrences.len(), 2, "day {day}");
            let first = occurrences.iter().find(|o| o.submission_order == 1);
            let second = occurrences.iter().find(|o| o.submission_order == 2);
            assert_eq!(first.map(|o| o.start_offset), Some(0));
            assert_eq!(second.map(|o| o.start_offset), Some(150));
        }
    }

    #[test]
    fn morning_and_afternoon_groups_are_assigned_independently() {
        let requests = vec![
            request(MeetingType::AllHands, TimeSlot::Morning, Recurrence::Monthly, Some(Weekday::Monday), 1),
            request(MeetingType::Management, TimeSlot::Afternoon, Recurrence::Monthly, Some(Weekday::Monday), 2),
        ];
        let schedule = build_schedule(&requests);
        let occurrences = schedule.occurrences_on(1);
        assert_eq!(occurrences.len(), 2);
        // Each is alone in its own half-day group, so both take the middle.
        let morning = occurrences.iter().find(|o| o.time_slot == TimeSlot::Morning);
        let afternoon = occurrences.iter().find(|o| o.time_slot == TimeSlot::Afternoon);
        assert_eq!(morning.map(|o| o.start_offset), Some(90));
        assert_eq!(afternoon.map(|o| o.start_offset), Some(330));
    }

    #[test]
    fn runs_are_independent_and_deterministic() {
        let requests = vec![
            request(MeetingType::AllHands, TimeSlot::Morning, Recurrence::Weekly, None, 1),
            request(MeetingType::ClientUpdate, TimeSlot::Afternoon, Recurrence::Fortnightly, None, 2),
        ];
        let first = build_schedule(&requests);
        let second = build_schedule(&requests);
        assert_eq!(first.total_occurrences(), second.total_occurrences());
        for (&day, occurrences) in &first.days {
            let other = second.occurrences_on(day);
            assert_eq!(occurrences.len(), other.len());
            for (a, b) in occurrences.iter().zip(other) {
                assert_eq!(a.start_offset, b.start_offset);
                assert_eq!(a.submission_order, b.submission_order);
            }
        }
    }
}
