use std::fs::File;
use std::io::Write;

use crate::schedule::calendar::{is_weekday, week_of, weekday_name, MONTH_DAYS};
use crate::schedule::{MonthSchedule, Occurrence};

/// Length of the rendered working day in minutes (9:00 to 5:00).
pub const WORKDAY_MINUTES: u16 = 480;

/// Fixed visual height of every meeting bar, in day-minutes.
pub const BAR_MINUTES: u16 = 30;

/// Formats a start offset (minutes after 9:00 AM) as a 12-hour clock label.
pub fn format_start_time(offset: u16) -> String {
    let total = 9 * 60 + offset as u32;
    let hour = total / 60;
    let minute = total % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

/// Formats one occurrence for display: "Client Update @ 2:00 PM".
pub fn format_occurrence(occurrence: &Occurrence) -> String {
    format!(
        "{} @ {}",
        occurrence.display_text(),
        format_start_time(occurrence.start_offset)
    )
}

/// Prints the month day by day, weekends included as grayed-out rows.
pub fn print_month_schedule(schedule: &MonthSchedule) {
    println!("\n=== 31-Day Month Schedule (meetings Mon-Fri) ===");
    println!("Total occurrences: {}", schedule.total_occurrences());

    for day in 1..=MONTH_DAYS {
        let header = format!("Day {:2} ({}, week {})", day, weekday_name(day), week_of(day));
        if !is_weekday(day) {
            println!("{} [WEEKEND]", header);
            continue;
        }
        let occurrences = schedule.occurrences_on(day);
        if occurrences.is_empty() {
            println!("{} [no meetings]", header);
        } else {
            println!("{}:", header);
            for occurrence in occurrences {
                println!(
                    "    {:8} {}",
                    occurrence.time_slot.display_name(),
                    format_occurrence(occurrence)
                );
            }
        }
    }
}

/// Writes the schedule to a text file, one line per occurrence.
pub fn write_schedule_to_file(
    schedule: &MonthSchedule,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** 31-Day Month Schedule **")?;
    for day in 1..=MONTH_DAYS {
        if !is_weekday(day) {
            writeln!(file, "Day {:2} ({}) [WEEKEND]", day, weekday_name(day))?;
            continue;
        }
        let occurrences = schedule.occurrences_on(day);
        if occurrences.is_empty() {
            writeln!(file, "Day {:2} ({}) [EMPTY]", day, weekday_name(day))?;
        } else {
            for occurrence in occurrences {
                writeln!(
                    file,
                    "Day {:2} ({}) {}",
                    day,
                    weekday_name(day),
                    format_occurrence(occurrence)
                )?;
            }
        }
    }

    Ok(())
}
