use clap::Parser;

use janus_calendar::Weekday;

/// Janus fixed-width text calendar.
#[derive(Parser)]
#[command(
    name = "janus",
    version,
    about = "Render a Gregorian calendar as text, three months per row"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// First year to render.
    pub start: i32,

    /// Stop year (exclusive), or "never" for an endless calendar.
    /// Defaults to one year after the start.
    pub stop: Option<String>,

    /// Weekday that opens each week: a name, abbreviation, or 0-6
    /// with 0 = Sunday.
    #[arg(short, long, default_value = "sunday")]
    pub first_weekday: Weekday,
}
