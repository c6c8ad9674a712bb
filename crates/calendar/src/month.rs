//! Month lengths, leap years, and the month naming table.

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// English month names (index 0 = January, ..., index 11 = December).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian
/// calendar (divisible by 4, except centuries not divisible by 400).
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// `month` must already be validated to 1..=12; callers inside this crate
/// only reach here with a valid month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Returns the English name of the given month (1..=12), or `None` if the
/// month number is out of range.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}
