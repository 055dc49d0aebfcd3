use std::fs::OpenOptions;
use std::path::Path;

use csv::WriterBuilder;

use crate::display::format_start_time;
use crate::form::submission::MeetingForm;
use crate::schedule::calendar::weekday_name;
use crate::schedule::MonthSchedule;

const REQUEST_HEADERS: [&str; 6] = [
    "timestamp",
    "meeting_type",
    "time_slot",
    "recurrence",
    "preferred_day",
    "person_name",
];

/// Appends one submitted request to the requests CSV, creating the file
/// with headers on first use. The timestamp records when the request was
/// taken in, not when it was scheduled.
pub fn append_request_to_csv(
    form: &MeetingForm,
    csv_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_exists = csv_path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    if !file_exists {
        wtr.write_record(REQUEST_HEADERS)?;
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    wtr.write_record(&[
        timestamp.as_str(),
        form.meeting_type.trim(),
        form.time_slot.trim(),
        form.recurrence.trim(),
        form.preferred_day.as_deref().unwrap_or("").trim(),
        form.person_name.as_deref().unwrap_or("").trim(),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Writes a computed schedule to CSV, one row per occurrence, for
/// spreadsheet use.
pub fn export_schedule_to_csv(
    schedule: &MonthSchedule,
    csv_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(csv_path)?;

    wtr.write_record([
        "day",
        "weekday",
        "time_slot",
        "start_time",
        "duration_min",
        "meeting_type",
        "label",
    ])?;

    for (&day, occurrences) in &schedule.days {
        for occurrence in occurrences {
            wtr.write_record(&[
                day.to_string(),
                weekday_name(day).to_string(),
                occurrence.time_slot.display_name().to_string(),
                format_start_time(occurrence.start_offset),
                occurrence.meeting_type.default_duration_min().to_string(),
                occurrence.meeting_type.display_name().to_string(),
                occurrence.label.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
