//! Gregorian date with civil-day arithmetic.

use crate::error::CalendarError;
use crate::month::days_in_month;
use crate::weekday::Weekday;

/// A date in the proleptic Gregorian calendar.
///
/// Only valid (year, month, day) combinations can be constructed, and the
/// derived ordering matches calendar chronology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is not in 1..=12 or the day
    /// is not valid for the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns January 1 of the given year.
    pub fn first_of_year(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the civil day number: days since 1970-01-01.
    ///
    /// Uses the days-from-civil algorithm over 400-year eras, exact for
    /// the full proleptic Gregorian calendar including negative years.
    pub fn to_days(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400; // [0, 399]
        let mp = (i64::from(self.month) + 9) % 12; // March = 0 .. February = 11
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1; // [0, 365]
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
        era * 146097 + doe - 719_468
    }

    /// Returns the date for a civil day number (inverse of [`Date::to_days`]).
    pub fn from_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097; // [0, 146096]
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
        let mp = (5 * doy + 2) / 153; // [0, 11]
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8; // [1, 31]
        let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8; // [1, 12]
        Self {
            year: (y + i64::from(month <= 2)) as i32,
            month,
            day,
        }
    }

    /// Returns the day of the week (1970-01-01 was a Thursday).
    pub fn weekday(self) -> Weekday {
        let index = (self.to_days() + 4).rem_euclid(7) as u8;
        // Safety: rem_euclid(7) always lands in 0..=6.
        Weekday::from_index(index).expect("weekday index is always 0..=6")
    }

    /// Returns the civil day number of the week this date falls in: the
    /// date rolled back to the most recent `first_weekday` (or itself).
    ///
    /// Two dates belong to the same calendar week under a given first
    /// weekday iff their `week_start` values are equal.
    pub fn week_start(self, first_weekday: Weekday) -> i64 {
        let offset =
            (i64::from(self.weekday().index()) - i64::from(first_weekday.index())).rem_euclid(7);
        self.to_days() - offset
    }

    /// Returns the next date in the calendar.
    ///
    /// If the current date is December 31, the result wraps to January 1
    /// of the following year.
    pub fn next(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self::first_of_year(self.year + 1)
        }
    }
}
