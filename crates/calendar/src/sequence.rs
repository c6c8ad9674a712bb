//! Lazy date sequence generation.

use crate::date::Date;
use crate::error::CalendarError;

/// A lazy, strictly increasing stream of consecutive [`Date`]s.
///
/// Produced by [`dates`] (bounded) or [`dates_from`] (unbounded). The
/// iterator holds only the current date and the optional exclusive end,
/// so an unbounded range can be consumed incrementally forever without
/// accumulating memory. Bounded ranges are `Clone` and may be re-iterated.
#[derive(Debug, Clone)]
pub struct DateRange {
    current: Date,
    /// Exclusive end as a civil day number; `None` means unbounded.
    end: Option<i64>,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.current;
        if let Some(end) = self.end {
            if current.to_days() >= end {
                return None;
            }
        }
        self.current = current.next();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end {
            Some(end) => {
                let remaining = (end - self.current.to_days()).max(0) as usize;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

/// Produces the dates from January 1 `start_year` up to but excluding
/// January 1 `stop_year`.
///
/// An equal start and stop year yields an empty range.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRange`] if `stop_year < start_year`.
pub fn dates(start_year: i32, stop_year: i32) -> Result<DateRange, CalendarError> {
    if stop_year < start_year {
        return Err(CalendarError::InvalidRange {
            start: start_year,
            stop: stop_year,
        });
    }
    Ok(DateRange {
        current: Date::first_of_year(start_year),
        end: Some(Date::first_of_year(stop_year).to_days()),
    })
}

/// Produces the dates from January 1 `start_year` onward, with no upper
/// bound.
///
/// The result must be consumed incrementally; collecting it does not
/// terminate.
pub fn dates_from(start_year: i32) -> DateRange {
    DateRange {
        current: Date::first_of_year(start_year),
        end: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range() {
        let mut range = dates(2023, 2023).unwrap();
        assert_eq!(range.next(), None);
    }

    #[test]
    fn invalid_range() {
        assert_eq!(
            dates(2023, 2022).unwrap_err(),
            CalendarError::InvalidRange {
                start: 2023,
                stop: 2022,
            }
        );
    }

    #[test]
    fn common_year_length() {
        assert_eq!(dates(2023, 2024).unwrap().count(), 365);
    }

    #[test]
    fn leap_year_length() {
        assert_eq!(dates(2024, 2025).unwrap().count(), 366);
    }

    #[test]
    fn multi_year_length() {
        // 2020 is leap, 2021-2023 are common.
        assert_eq!(dates(2020, 2024).unwrap().count(), 366 + 365 + 365 + 365);
    }

    #[test]
    fn starts_at_january_first() {
        let first = dates(2023, 2024).unwrap().next().unwrap();
        assert_eq!(first, Date::new(2023, 1, 1).unwrap());
    }

    #[test]
    fn ends_before_stop_year() {
        let last = dates(2023, 2024).unwrap().last().unwrap();
        assert_eq!(last, Date::new(2023, 12, 31).unwrap());
    }

    #[test]
    fn strictly_increasing_by_one_day() {
        let days: Vec<Date> = dates(2023, 2025).unwrap().collect();
        for pair in days.windows(2) {
            assert_eq!(pair[1].to_days(), pair[0].to_days() + 1);
        }
    }

    #[test]
    fn bounded_is_re_iterable() {
        let range = dates(2023, 2024).unwrap();
        let first: Vec<Date> = range.clone().collect();
        let second: Vec<Date> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn size_hint_bounded() {
        let range = dates(2023, 2024).unwrap();
        assert_eq!(range.size_hint(), (365, Some(365)));
    }

    #[test]
    fn size_hint_unbounded() {
        let range = dates_from(2023);
        assert_eq!(range.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn unbounded_crosses_year_boundary() {
        let day_366 = dates_from(2023).nth(365).unwrap();
        assert_eq!(day_366, Date::new(2024, 1, 1).unwrap());
    }

    #[test]
    fn unbounded_prefix_matches_bounded() {
        let bounded: Vec<Date> = dates(2023, 2025).unwrap().collect();
        let prefix: Vec<Date> = dates_from(2023).take(bounded.len()).collect();
        assert_eq!(bounded, prefix);
    }
}
