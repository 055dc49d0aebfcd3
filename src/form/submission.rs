use serde::{Deserialize, Serialize};

use crate::schedule::{MeetingRequest, MeetingType, Recurrence, TimeSlot, Weekday};

/// Raw meeting request as submitted by the intake form or a CSV row.
///
/// Fields are free strings on purpose: validation turns them into the
/// engine's closed enums, and anything unrecognized is rejected here so the
/// engine never sees an invalid request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingForm {
    pub meeting_type: String,
    pub time_slot: String,
    pub recurrence: String,
    pub preferred_day: Option<String>,
    pub person_name: Option<String>,
}

/// Why a form submission was rejected at intake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("a meeting type must be selected")]
    MissingMeetingType,

    #[error("unknown meeting type: {0}")]
    UnknownMeetingType(String),

    #[error("unknown time slot: {0} (expected Morning or Afternoon)")]
    UnknownTimeSlot(String),

    /// Unrecognized recurrence is invalid input, never defaulted to Monthly.
    #[error("unknown recurrence pattern: {0}")]
    UnknownRecurrence(String),

    #[error("unknown preferred day: {0} (expected Monday through Friday)")]
    UnknownPreferredDay(String),

    #[error("one-to-one meetings require a person name")]
    MissingPersonName,
}

/// Validates a form and turns it into an engine request carrying the given
/// submission order.
pub fn validate_form(form: &MeetingForm, submission_order: u32) -> Result<MeetingRequest, IntakeError> {
    let type_value = form.meeting_type.trim();
    if type_value.is_empty() {
        return Err(IntakeError::MissingMeetingType);
    }
    let meeting_type = MeetingType::from_form_value(type_value)
        .ok_or_else(|| IntakeError::UnknownMeetingType(type_value.to_string()))?;

    let time_slot = TimeSlot::from_form_value(&form.time_slot)
        .ok_or_else(|| IntakeError::UnknownTimeSlot(form.time_slot.trim().to_string()))?;

    let recurrence = Recurrence::from_form_value(&form.recurrence)
        .ok_or_else(|| IntakeError::UnknownRecurrence(form.recurrence.trim().to_string()))?;

    let preferred_weekday = match form.preferred_day.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(
            Weekday::from_form_value(value)
                .ok_or_else(|| IntakeError::UnknownPreferredDay(value.to_string()))?,
        ),
    };

    let label = form
        .person_name
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .to_string();
    if meeting_type == MeetingType::OneToOne && label.is_empty() {
        return Err(IntakeError::MissingPersonName);
    }

    Ok(MeetingRequest {
        meeting_type,
        time_slot,
        recurrence,
        preferred_weekday,
        label,
        submission_order,
    })
}
