//! File sinks for encoded waveforms.

use crate::error::Result;
use crate::signal::Waveform;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "time,level";

/// Writes the `(time, level)` table as CSV.
///
/// ```rust
/// use linecode::{encode, BitSequence, Scheme};
/// use linecode::export::write_csv;
///
/// let bits: BitSequence = "10".parse().unwrap();
/// let mut out = Vec::new();
/// write_csv(&encode(&bits, Scheme::Rz).to_waveform(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "time,level\n0,1\n1,0\n2,-1\n3,0\n");
/// ```
pub fn write_csv<W: Write>(waveform: &Waveform, mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for (time, level) in waveform.points() {
        writeln!(writer, "{time},{level}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes CSV for several waveforms as one table, one column per scheme.
///
/// Shorter waveforms leave their trailing cells empty.
pub fn write_csv_table<W: Write>(waveforms: &[Waveform], mut writer: W) -> Result<()> {
    let header: Vec<&str> = std::iter::once("time")
        .chain(waveforms.iter().map(|w| w.scheme().name()))
        .collect();
    writeln!(writer, "{}", header.join(","))?;

    let rows = waveforms.iter().map(Waveform::len).max().unwrap_or(0);
    for time in 0..rows {
        let cells: Vec<String> = waveforms
            .iter()
            .map(|w| w.samples().get(time).map(f64::to_string).unwrap_or_default())
            .collect();
        writeln!(writer, "{time},{}", cells.join(","))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes an already rendered SVG document.
pub fn write_svg<W: Write>(svg: &str, mut writer: W) -> Result<()> {
    writer.write_all(svg.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Creates `path` and writes the CSV export into it.
pub fn export_csv(waveform: &Waveform, path: &Path) -> Result<()> {
    debug!(path = %path.display(), samples = waveform.len(), "exporting csv");
    write_csv(waveform, BufWriter::new(File::create(path)?))
}

/// Creates `path` and writes the combined CSV table into it.
pub fn export_csv_table(waveforms: &[Waveform], path: &Path) -> Result<()> {
    debug!(path = %path.display(), columns = waveforms.len(), "exporting csv table");
    write_csv_table(waveforms, BufWriter::new(File::create(path)?))
}

/// Creates `path` and writes the SVG document into it.
pub fn export_svg(svg: &str, path: &Path) -> Result<()> {
    debug!(path = %path.display(), bytes = svg.len(), "exporting svg");
    write_svg(svg, BufWriter::new(File::create(path)?))
}
