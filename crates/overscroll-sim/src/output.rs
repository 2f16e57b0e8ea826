//! Record formatting.

use std::io::{self, Write};

use crate::sim::{Event, FrameRecord};

/// Output format for frame records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Aligned columns with a header row.
    #[default]
    Text,
    /// One JSON object per line.
    JsonLines,
}

fn event_name(event: Event) -> &'static str {
    match event {
        Event::Pull => "pull",
        Event::Release => "release",
        Event::Absorb => "absorb",
        Event::Resize => "resize",
        Event::Tick => "tick",
    }
}

/// Writes `records` to `out` in `format`.
pub fn write_records<W: Write>(out: &mut W, records: &[FrameRecord], format: Format) -> io::Result<()> {
    match format {
        Format::Text => {
            writeln!(
                out,
                "{:>6} {:>9} {:<8} {:>9} {:<10} {:<10}",
                "frame", "time_ms", "event", "shift_y", "top", "bottom"
            )?;
            for r in records {
                writeln!(
                    out,
                    "{:>6} {:>9.1} {:<8} {:>9.2} {:<10} {:<10}",
                    r.frame,
                    r.time_ms,
                    event_name(r.event),
                    r.shift_y,
                    r.top,
                    r.bottom
                )?;
            }
        }
        Format::JsonLines => {
            for r in records {
                serde_json::to_writer(&mut *out, r)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
