//! Error types for the janus-calendar crate.

/// Error type for all fallible operations in the janus-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values, weekday values, and year ranges in the proleptic Gregorian
/// calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a numeric weekday value is outside the valid range 0..=6.
    #[error("invalid weekday: {weekday} (must be 0..=6, 0 = Sunday)")]
    InvalidWeekday {
        /// The invalid weekday value that was provided.
        weekday: u8,
    },

    /// Returned when a weekday name cannot be parsed.
    #[error("unknown weekday: {name:?} (expected a name, abbreviation, or 0..=6)")]
    UnknownWeekday {
        /// The unparsable weekday string that was provided.
        name: String,
    },

    /// Returned when a stop year precedes its start year.
    #[error("invalid year range: stop {stop} precedes start {start}")]
    InvalidRange {
        /// The first year of the requested range.
        start: i32,
        /// The offending stop year.
        stop: i32,
    },
}
