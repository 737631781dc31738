//! Per-tick frame output: clear, timestamp, command, chart.

use std::io::{self, Write};

use chrono::{DateTime, TimeZone};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Timestamp layout for the frame header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// Write one frame and flush.
///
/// The chart is written as-is, without a trailing newline.
pub fn write_frame<W, Tz>(
    out: &mut W,
    at: &DateTime<Tz>,
    command: &str,
    chart: &str,
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", at.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "{command}")?;
    write!(out, "{chart}")?;
    out.flush()
}
