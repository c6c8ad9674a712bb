//! Day-of-week enumeration and parsing.

use std::str::FromStr;

use crate::error::CalendarError;

/// A day of the week, numbered 0 (Sunday) through 6 (Saturday).
///
/// Used both to classify a [`Date`](crate::Date) and to configure which
/// weekday opens a calendar week when grouping dates into weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

/// All weekdays in numeric order, for index-based lookup.
const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Creates a `Weekday` from its numeric value (0 = Sunday .. 6 = Saturday).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `weekday` is not in 0..=6.
    pub fn from_index(weekday: u8) -> Result<Self, CalendarError> {
        ALL.get(weekday as usize)
            .copied()
            .ok_or(CalendarError::InvalidWeekday { weekday })
    }

    /// Returns the numeric value (0 = Sunday .. 6 = Saturday).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the full English name of the weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(weekday: u8) -> Result<Self, Self::Error> {
        Self::from_index(weekday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    /// Parses a weekday from a full name, a three-letter abbreviation
    /// (case-insensitive), or a digit 0..=6 with 0 = Sunday.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<u8>() {
            return Self::from_index(n).map_err(|_| CalendarError::UnknownWeekday {
                name: s.to_string(),
            });
        }
        match s.to_ascii_lowercase().as_str() {
            "sun" | "sunday" => Ok(Weekday::Sunday),
            "mon" | "monday" => Ok(Weekday::Monday),
            "tue" | "tuesday" => Ok(Weekday::Tuesday),
            "wed" | "wednesday" => Ok(Weekday::Wednesday),
            "thu" | "thursday" => Ok(Weekday::Thursday),
            "fri" | "friday" => Ok(Weekday::Friday),
            "sat" | "saturday" => Ok(Weekday::Saturday),
            _ => Err(CalendarError::UnknownWeekday {
                name: s.to_string(),
            }),
        }
    }
}
