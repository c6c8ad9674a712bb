//! The full pipeline: dates in, printable calendar lines out.

use janus_calendar::{Date, Weekday};
use tracing::debug;

use crate::chunk::{batched, chunk_by, Batched, ChunkBy};
use crate::month::{layout_month, MonthBlock};
use crate::rows::transpose;

/// Months printed side by side in one calendar row.
pub const MONTHS_PER_ROW: usize = 3;

/// Grouping key: a run of dates with equal key is one calendar month.
fn month_key(date: &Date) -> (i32, u8) {
    (date.year(), date.month())
}

/// Lazy sequence of [`MonthBlock`]s over a stream of dates.
///
/// Buffers one month of dates at a time; correct over unbounded input.
pub struct MonthBlocks<I: Iterator<Item = Date>> {
    months: ChunkBy<I, (i32, u8), fn(&Date) -> (i32, u8)>,
    first_weekday: Weekday,
}

/// Groups `dates` by month and renders each month into a [`MonthBlock`].
pub fn month_blocks<I>(dates: I, first_weekday: Weekday) -> MonthBlocks<I>
where
    I: Iterator<Item = Date>,
{
    MonthBlocks {
        months: chunk_by(dates, month_key as fn(&Date) -> (i32, u8)),
        first_weekday,
    }
}

impl<I: Iterator<Item = Date>> Iterator for MonthBlocks<I> {
    type Item = MonthBlock;

    fn next(&mut self) -> Option<MonthBlock> {
        self.months
            .next()
            .map(|month| layout_month(&month, self.first_weekday))
    }
}

/// Lazy stream of rendered calendar lines.
///
/// Produced by [`render_calendar`]. Holds one batch of up to
/// [`MONTHS_PER_ROW`] month blocks' worth of lines at a time; each line is
/// emitted as soon as its row has been assembled, so the stream works over
/// an unbounded date source.
pub struct CalendarLines<I: Iterator<Item = Date>> {
    rows: Batched<MonthBlocks<I>>,
    pending: std::vec::IntoIter<String>,
}

/// Renders a stream of dates as fixed-width calendar text,
/// [`MONTHS_PER_ROW`] months per row.
///
/// `dates` must be a chronologically ordered run of consecutive dates, as
/// produced by [`janus_calendar::dates`] or [`janus_calendar::dates_from`].
/// The returned iterator yields one printable line at a time: for each row
/// of months, a title line followed by six week lines, each
/// `22 × months-in-row` characters wide.
pub fn render_calendar<I>(dates: I, first_weekday: Weekday) -> CalendarLines<I>
where
    I: Iterator<Item = Date>,
{
    CalendarLines {
        rows: batched(month_blocks(dates, first_weekday), MONTHS_PER_ROW),
        pending: Vec::new().into_iter(),
    }
}

impl<I: Iterator<Item = Date>> Iterator for CalendarLines<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.pending.next() {
                return Some(line);
            }
            let row = self.rows.next()?;
            debug!(months = row.len(), "assembled calendar row");
            self.pending = Vec::from(transpose(&row)).into_iter();
        }
    }
}
