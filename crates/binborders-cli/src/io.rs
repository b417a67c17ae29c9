//! Text I/O for sample files and border lists

use binborders_core::{BorderSet, Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a flattened sample from a plain text file
///
/// Tokens are whitespace-separated decimal floats, spread over any number
/// of lines. Blank lines and lines starting with `#` (the header decoders
/// put in front of the values) are skipped.
pub fn read_sample(path: &Path) -> Result<Vec<f64>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut sample = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        for token in trimmed.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| Error::InvalidSampleValue {
                token: token.to_string(),
                line: index + 1,
            })?;
            sample.push(value);
        }
    }
    Ok(sample)
}

/// Write borders one per line, fixed notation with 20 fractional digits
pub fn write_borders(path: &Path, borders: &BorderSet) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for edge in borders.edges() {
        writeln!(writer, "{edge:.20}")?;
    }
    writer.flush()?;
    Ok(())
}
