//! # janus-layout
//!
//! Lazy layout pipeline turning a stream of dates into printable
//! fixed-width calendar text, three months per row.
//!
//! # Architecture
//!
//! ```text
//! render_calendar()
//!   ├─ chunk_by month key          (chunk.rs)
//!   ├─ layout_month()              (month.rs)
//!   ├─ batched(3)                  (chunk.rs)
//!   ├─ transpose()                 (rows.rs)
//!   └─ CalendarLines flattening    (render.rs)
//! ```
//!
//! Every stage is a pull-based, one-pass iterator adapter, so the whole
//! pipeline runs over an unbounded date stream while buffering at most
//! one month of dates and one row of output lines.
//!
//! # Quick start
//!
//! ```ignore
//! use janus_calendar::{dates, Weekday};
//! use janus_layout::render_calendar;
//!
//! for line in render_calendar(dates(2023, 2024).unwrap(), Weekday::Sunday) {
//!     println!("{line}");
//! }
//! ```

pub mod chunk;
pub mod month;
pub mod render;
pub mod rows;

pub use chunk::{batched, chunk_by, Batched, ChunkBy};
pub use month::{layout_month, MonthBlock, BLOCK_ROWS, BLOCK_WIDTH, WEEK_ROWS};
pub use render::{month_blocks, render_calendar, CalendarLines, MonthBlocks, MONTHS_PER_ROW};
pub use rows::transpose;
