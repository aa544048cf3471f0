//! Segment output formatting.

use std::io::{BufWriter, Write};

use anyhow::Result;
use serde::Serialize;
use stlsweep_slicer::{Segment, SliceSettings};

use crate::OutputFormat;

#[derive(Serialize)]
struct SliceDocument<'a> {
    settings: &'a SliceSettings,
    segment_count: usize,
    segments: Vec<Segment>,
}

/// Write segments in the chosen format, returning how many were written.
pub fn write<W, I>(writer: W, format: OutputFormat, settings: &SliceSettings, segments: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Segment>,
{
    let mut out = BufWriter::new(writer);
    let count = match format {
        OutputFormat::Text => write_text(&mut out, segments)?,
        OutputFormat::Json => {
            let segments: Vec<Segment> = segments.into_iter().collect();
            let doc = SliceDocument {
                settings,
                segment_count: segments.len(),
                segments,
            };
            serde_json::to_writer_pretty(&mut out, &doc)?;
            writeln!(out)?;
            doc.segment_count
        }
    };
    out.flush()?;
    Ok(count)
}

/// Two lines per segment, `x y z` each.
fn write_text<W: Write>(out: &mut W, segments: impl IntoIterator<Item = Segment>) -> Result<usize> {
    let mut count = 0;
    for seg in segments {
        writeln!(out, "{} {} {}", seg.a.x, seg.a.y, seg.z)?;
        writeln!(out, "{} {} {}", seg.b.x, seg.b.y, seg.z)?;
        count += 1;
    }
    Ok(count)
}
