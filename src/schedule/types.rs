use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The closed set of meeting types the planner knows about.
///
/// Each type carries its display/colour attributes so that rendering never
/// has to fall back to a default colour for an unknown type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingType {
    OneToOne,
    AllHands,
    Management,
    BimReview,
    ClientUpdate,
    ClientReview,
    ProjectBrief,
}

impl MeetingType {
    pub const ALL: [MeetingType; 7] = [
        MeetingType::OneToOne,
        MeetingType::AllHands,
        MeetingType::Management,
        MeetingType::BimReview,
        MeetingType::ClientUpdate,
        MeetingType::ClientReview,
        MeetingType::ProjectBrief,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MeetingType::OneToOne => "One-to-One Meeting",
            MeetingType::AllHands => "All-Hands Meeting",
            MeetingType::Management => "Management Meeting",
            MeetingType::BimReview => "BIM Review",
            MeetingType::ClientUpdate => "Client Update",
            MeetingType::ClientReview => "Client Review",
            MeetingType::ProjectBrief => "Project Brief",
        }
    }

    /// Bar colour used when the schedule is rendered.
    pub fn color(&self) -> &'static str {
        match self {
            MeetingType::OneToOne => "blue",
            MeetingType::AllHands => "green",
            MeetingType::Management => "red",
            MeetingType::BimReview => "darkcyan",
            MeetingType::ClientUpdate => "navy",
            MeetingType::ClientReview => "darkviolet",
            MeetingType::ProjectBrief => "darkorange",
        }
    }

    /// Text colour that contrasts with `color()`.
    pub fn text_color(&self) -> &'static str {
        match self {
            MeetingType::ProjectBrief => "black",
            _ => "white",
        }
    }

    /// Nominal meeting length in minutes. The rendered bar height is fixed
    /// regardless of this value; it is kept for exports and tooltips.
    pub fn default_duration_min(&self) -> u16 {
        match self {
            MeetingType::OneToOne => 30,
            MeetingType::AllHands => 60,
            MeetingType::Management => 60,
            MeetingType::BimReview => 45,
            MeetingType::ClientUpdate => 30,
            MeetingType::ClientReview => 45,
            MeetingType::ProjectBrief => 20,
        }
    }

    /// Parses the value submitted by the intake form (the display name).
    pub fn from_form_value(value: &str) -> Option<MeetingType> {
        MeetingType::ALL
            .iter()
            .find(|mt| mt.display_name() == value.trim())
            .copied()
    }
}

/// Half-day window within a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
}

impl TimeSlot {
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
        }
    }

    pub fn from_form_value(value: &str) -> Option<TimeSlot> {
        match value.trim() {
            "Morning" => Some(TimeSlot::Morning),
            "Afternoon" => Some(TimeSlot::Afternoon),
            _ => None,
        }
    }
}

/// How often a meeting repeats within the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    Weekly,
    Fortnightly,
    EveryThirdWeek,
    Monthly,
}

impl Recurrence {
    /// Day interval between occurrences; `None` for a one-off monthly meeting.
    pub fn delta_days(&self) -> Option<u8> {
        match self {
            Recurrence::Weekly => Some(7),
            Recurrence::Fortnightly => Some(14),
            Recurrence::EveryThirdWeek => Some(21),
            Recurrence::Monthly => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Recurrence::Weekly => "Weekly",
            Recurrence::Fortnightly => "Fortnightly",
            Recurrence::EveryThirdWeek => "Every Third Week",
            Recurrence::Monthly => "Monthly",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Recurrence> {
        match value.trim() {
            "Weekly" => Some(Recurrence::Weekly),
            "Fortnightly" => Some(Recurrence::Fortnightly),
            "Every Third Week" => Some(Recurrence::EveryThirdWeek),
            "Monthly" => Some(Recurrence::Monthly),
            _ => None,
        }
    }
}

/// A weekday a request may be pinned to. Weekends are never schedulable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Column index within a week, Monday = 0 .. Friday = 4.
    pub fn index(&self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Weekday> {
        match value.trim() {
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            _ => None,
        }
    }
}

/// A validated meeting request, read-only input to the scheduling engine.
///
/// `submission_order` is assigned at intake (first request = 1, strictly
/// increasing) and is the sole tie-break used anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub meeting_type: MeetingType,
    pub time_slot: TimeSlot,
    pub recurrence: Recurrence,
    pub preferred_weekday: Option<Weekday>,
    pub label: String,
    pub submission_order: u32,
}

/// One concrete placement of a meeting request on a specific day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub day: u8,
    pub time_slot: TimeSlot,
    /// Minutes after 9:00 AM.
    pub start_offset: u16,
    pub meeting_type: MeetingType,
    pub label: String,
    pub submission_order: u32,
}

impl Occurrence {
    /// Display text for rendering: one-to-ones show the person's name,
    /// everything else shows the meeting type.
    pub fn display_text(&self) -> String {
        if self.meeting_type == MeetingType::OneToOne {
            format!("1:1 with {}", self.label)
        } else {
            self.meeting_type.display_name().to_string()
        }
    }
}

/// The computed month: every weekday maps to its (possibly empty) ordered
/// list of occurrences. Weekend days never appear as keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthSchedule {
    pub days: BTreeMap<u8, Vec<Occurrence>>,
}

impl MonthSchedule {
    pub fn occurrences_on(&self, day: u8) -> &[Occurrence] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_occurrences(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
