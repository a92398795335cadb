use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::{Line, Result, VertexLine};

/// Counts reported by a completed rescale pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines written to the destination.
    pub lines: usize,
    /// Vertex lines that were rescaled.
    pub vertices: usize,
}

/// Copies the geometry file at `source` to `destination`, multiplying every
/// coordinate of every vertex line by `factor`. All other lines are copied
/// byte-for-byte. The source is never modified; an existing destination is
/// truncated.
pub fn rescale(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    factor: f64,
) -> Result<Summary> {
    let source = OpenOptions::new().read(true).open(source)?;
    let destination = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)?;

    rescale_buffered(BufReader::new(source), BufWriter::new(destination), factor)
}

/// Streaming core of [`rescale`]. Stops at the first malformed vertex line;
/// nothing is written for that line.
pub fn rescale_buffered(
    mut reader: impl BufRead,
    mut writer: impl Write,
    factor: f64,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        summary.lines += 1;

        match Line::classify(&raw, summary.lines)?.scale(factor) {
            Line::Vertex(coordinates) => {
                writeln!(writer, "{}", VertexLine(&coordinates))?;
                summary.vertices += 1;
            }
            Line::Other(bytes) => writer.write_all(bytes)?,
        }
    }

    writer.flush()?;

    tracing::debug!(
        lines = summary.lines,
        vertices = summary.vertices,
        "rescale pass complete"
    );

    Ok(summary)
}
