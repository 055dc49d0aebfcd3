//! The generic 31-day month grid: day 1 is always Monday of week 1,
//! so weekday-ness is pure modular arithmetic with no real dates involved.

/// Number of days in the generic month.
pub const MONTH_DAYS: u8 = 31;

/// True iff `day` falls Mon-Fri. Days are 1-based (day 1 is Monday);
/// day 0 is not part of the month and reports as non-working.
pub fn is_weekday(day: u8) -> bool {
    (day as u16 + 6) % 7 < 5
}

/// True iff `day` is a Friday. Days are 1-based.
pub fn is_friday(day: u8) -> bool {
    (day as u16 + 6) % 7 == 4
}

/// All weekday day numbers in the month, ascending.
pub fn weekdays() -> Vec<u8> {
    (1..=MONTH_DAYS).filter(|&day| is_weekday(day)).collect()
}

/// Short weekday name for a 1-based day number ("Mon" .. "Sun").
pub fn weekday_name(day: u8) -> &'static str {
    const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    NAMES[((day as u16 + 6) % 7) as usize]
}

/// 1-based week row a day falls into (days 1-7 are week 1).
pub fn week_of(day: u8) -> u8 {
    day.saturating_sub(1) / 7 + 1
}
