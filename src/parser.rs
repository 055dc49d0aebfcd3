use std::path::Path;

use csv::Reader;

use crate::form::submission::{validate_form, MeetingForm};
use crate::schedule::MeetingRequest;

/// Loads meeting requests from a CSV file.
///
/// Expected columns (matched by header name, order-insensitive):
/// `meeting_type`, `time_slot`, `recurrence`, `preferred_day`,
/// `person_name`. Row order defines submission order. Any invalid row
/// aborts the load with a row-numbered error; the engine never receives a
/// partially valid list.
pub fn load_requests<P: AsRef<Path>>(
    csv_path: P,
) -> Result<Vec<MeetingRequest>, Box<dyn std::error::Error>> {
    let mut reader = Reader::from_path(csv_path)?;

    let headers = reader.headers()?;
    let type_col = headers
        .iter()
        .position(|h| h.contains("meeting_type") || h.contains("meeting type"))
        .unwrap_or(0);
    let slot_col = headers
        .iter()
        .position(|h| h.contains("time_slot") || h.contains("time slot"))
        .unwrap_or(1);
    let recurrence_col = headers
        .iter()
        .position(|h| h.contains("recurrence"))
        .unwrap_or(2);
    let preferred_col = headers
        .iter()
        .position(|h| h.contains("preferred"))
        .unwrap_or(3);
    let name_col = headers
        .iter()
        .position(|h| h.contains("person") || h.contains("name"))
        .unwrap_or(4);

    let mut requests = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;

        let optional = |col: usize| -> Option<String> {
            let value = record.get(col).unwrap_or("").trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        let form = MeetingForm {
            meeting_type: record.get(type_col).unwrap_or("").trim().to_string(),
            time_slot: record.get(slot_col).unwrap_or("").trim().to_string(),
            recurrence: record.get(recurrence_col).unwrap_or("").trim().to_string(),
            preferred_day: optional(preferred_col),
            person_name: optional(name_col),
        };

        let submission_order = requests.len() as u32 + 1;
        match validate_form(&form, submission_order) {
            Ok(request) => requests.push(request),
            // Row 1 is the header line.
            Err(err) => return Err(format!("row {}: {}", row_idx + 2, err).into()),
        }
    }

    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{MeetingType, Recurrence, TimeSlot, Weekday};

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).expect("write temp csv");
        path
    }

    #[test]
    fn rows_become_ordered_requests() {
        let path = write_temp_csv(
            "month_planner_parser_ok.csv",
            "meeting_type,time_slot,recurrence,preferred_day,person_name\n\
             All-Hands Meeting,Morning,Weekly,Wednesday,\n\
             One-to-One Meeting,Morning,Weekly,,Ian\n",
        );
        let requests = load_requests(&path).expect("should load");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].meeting_type, MeetingType::AllHands);
        assert_eq!(requests[0].time_slot, TimeSlot::Morning);
        assert_eq!(requests[0].recurrence, Recurrence::Weekly);
        assert_eq!(requests[0].preferred_weekday, Some(Weekday::Wednesday));
        assert_eq!(requests[0].submission_order, 1);
        assert_eq!(requests[1].label, "Ian");
        assert_eq!(requests[1].submission_order, 2);
    }

    #[test]
    fn invalid_row_aborts_with_row_number() {
        let path = write_temp_csv(
            "month_planner_parser_bad.csv",
            "meeting_type,time_slot,recurrence,preferred_day,person_name\n\
             All-Hands Meeting,Morning,Weekly,,\n\
             Client Update,Afternoon,Sometimes,,\n",
        );
        let err = load_requests(&path).expect_err("unknown recurrence must fail");
        let message = err.to_string();
        assert!(message.contains("row 3"), "got: {message}");
        assert!(message.contains("Sometimes"), "got: {message}");
    }
}
