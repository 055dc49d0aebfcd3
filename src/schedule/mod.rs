pub mod builder;
pub mod calendar;
pub mod day_pick;
pub mod recurrence;
pub mod slot_assign;
pub mod types;

pub use builder::build_schedule;
pub use types::{
    MeetingRequest, MeetingType, MonthSchedule, Occurrence, Recurrence, TimeSlot, Weekday,
};
