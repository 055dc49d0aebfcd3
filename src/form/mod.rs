pub mod export;
pub mod submission;

pub use export::{append_request_to_csv, export_schedule_to_csv};
pub use submission::{validate_form, IntakeError, MeetingForm};
