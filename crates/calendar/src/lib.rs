//! # janus-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new()"| B["Date"]
//!     B -->|".next()"| B
//!     B -->|".to_days()"| C["civil day number"]
//!     C -->|"Date::from_days()"| B
//!     B -->|".weekday()"| D["Weekday"]
//!     B -->|".week_start(first)"| E["week key"]
//!     F["start_year"] -->|"dates() / dates_from()"| G["DateRange"]
//!     G -->|"Iterator"| B
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use janus_calendar::{Date, Weekday, dates, dates_from};
//!
//! // Date construction and arithmetic
//! let d = Date::new(2023, 1, 1).unwrap(); // a Sunday
//! assert_eq!(d.weekday(), Weekday::Sunday);
//!
//! // Bounded range: [Jan 1 2023, Jan 1 2024)
//! let year: Vec<Date> = dates(2023, 2024).unwrap().collect();
//! assert_eq!(year.len(), 365);
//!
//! // Unbounded stream: consume incrementally, never collect
//! for d in dates_from(2023).take(10) {
//!     println!("{}-{}-{}", d.year(), d.month(), d.day());
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date with civil-day arithmetic |
//! | `weekday` | Day-of-week enumeration and parsing |
//! | `month` | Month lengths, leap years, month names |
//! | `sequence` | Lazy date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod sequence;
mod weekday;

pub use date::Date;
pub use error::CalendarError;
pub use month::{days_in_month, is_leap_year, month_name, MONTH_NAMES};
pub use sequence::{dates, dates_from, DateRange};
pub use weekday::Weekday;
