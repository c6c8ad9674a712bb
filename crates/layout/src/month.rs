//! Fixed-width rendering of a single month.

use janus_calendar::{month_name, Date, Weekday};

use crate::chunk::chunk_by;

/// Width of every line in a month block, in characters.
pub const BLOCK_WIDTH: usize = 22;

/// Number of week lines in a month block. Months spanning fewer calendar
/// weeks are padded with blank lines up to this count.
pub const WEEK_ROWS: usize = 6;

/// Total lines in a month block: one title line plus [`WEEK_ROWS`].
pub const BLOCK_ROWS: usize = WEEK_ROWS + 1;

/// One rendered calendar month: a title line followed by six week lines,
/// every line exactly [`BLOCK_WIDTH`] characters wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBlock {
    lines: [String; BLOCK_ROWS],
}

impl MonthBlock {
    /// Returns the block's lines, title first.
    pub fn lines(&self) -> &[String; BLOCK_ROWS] {
        &self.lines
    }

    /// Consumes the block, returning its lines.
    pub fn into_lines(self) -> [String; BLOCK_ROWS] {
        self.lines
    }
}

/// Renders one month of dates into a [`MonthBlock`].
///
/// `days` must be a non-empty, chronologically ordered run of dates that
/// all fall in the same (year, month) — the shape produced by grouping a
/// date stream by month.
///
/// Layout rules:
/// - the title is the month name centered in [`BLOCK_WIDTH`] characters;
/// - each day is a zero-padded two-digit number in a 3-character cell;
/// - the first week is right-aligned in 21 characters plus one trailing
///   space, pushing a short opening week under the correct weekday
///   columns; later weeks are left-aligned and padded to [`BLOCK_WIDTH`];
/// - months spanning fewer than [`WEEK_ROWS`] weeks get blank filler lines.
pub fn layout_month(days: &[Date], first_weekday: Weekday) -> MonthBlock {
    debug_assert!(!days.is_empty(), "a month run is never empty");

    let name = month_name(days[0].month()).unwrap_or("");
    let mut lines = vec![format!("{name:^BLOCK_WIDTH$}")];

    let weeks = chunk_by(days.iter().copied(), |d| d.week_start(first_weekday));
    for (index, week) in weeks.enumerate() {
        let cells: String = week.iter().map(|d| format!(" {:02}", d.day())).collect();
        lines.push(if index == 0 {
            format!("{cells:>21} ")
        } else {
            format!("{cells:<BLOCK_WIDTH$}")
        });
    }
    while lines.len() < BLOCK_ROWS {
        lines.push(" ".repeat(BLOCK_WIDTH));
    }

    MonthBlock {
        // A 31-day month spans at most six calendar weeks under any
        // first weekday, so the count is always exactly BLOCK_ROWS.
        lines: lines
            .try_into()
            .expect("a month never spans more than six weeks"),
    }
}
